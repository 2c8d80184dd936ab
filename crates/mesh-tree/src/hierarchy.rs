//! Complete vocabulary hierarchy
//!
//! Unlike [`PathTree`](crate::PathTree), which only holds the branches
//! touched by a set of results, the hierarchy covers every path of every
//! indexed term. Children are matched by segment and kept in first-discovery
//! order at every level.

use mesh_common::{PathKey, Term};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode<'a> {
    /// Segment leading to this node, `root` for the top node
    pub segment: String,
    pub path: PathKey,
    /// Terms registered at exactly this path, in insertion order
    pub terms: Vec<&'a Term>,
    pub branches: Vec<HierarchyNode<'a>>,
}

impl<'a> HierarchyNode<'a> {
    pub(crate) fn root() -> Self {
        Self {
            segment: "root".to_string(),
            path: PathKey::root(),
            terms: Vec::new(),
            branches: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, path: &PathKey, term: &'a Term) {
        let mut node = self;
        for (depth, segment) in path.segments().iter().enumerate() {
            let at = match node.branches.iter().position(|b| &b.segment == segment) {
                Some(at) => at,
                None => {
                    node.branches.push(HierarchyNode {
                        segment: segment.clone(),
                        path: path.prefix(depth + 1),
                        terms: Vec::new(),
                        branches: Vec::new(),
                    });
                    node.branches.len() - 1
                },
            };
            node = &mut node.branches[at];
        }
        node.terms.push(term);
    }

    /// Node at exactly `path`, if any term path passes through it
    pub fn find(&self, path: &PathKey) -> Option<&HierarchyNode<'a>> {
        path.segments().iter().try_fold(self, |node, segment| {
            node.branches.iter().find(|b| &b.segment == segment)
        })
    }

    /// Number of nodes below this one
    pub fn descendants(&self) -> usize {
        self.branches.iter().map(|b| 1 + b.descendants()).sum()
    }

    /// Longest segment count from this node down to a leaf
    pub fn height(&self) -> usize {
        self.branches.iter().map(|b| 1 + b.height()).max().unwrap_or(0)
    }

    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Copy of this node keeping at most `levels` levels of branches below it
    pub fn pruned(&self, levels: usize) -> HierarchyNode<'a> {
        HierarchyNode {
            segment: self.segment.clone(),
            path: self.path.clone(),
            terms: self.terms.clone(),
            branches: match levels {
                0 => Vec::new(),
                _ => self.branches.iter().map(|b| b.pruned(levels - 1)).collect(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::PathTreeIndex;
    use mesh_common::{PathKey, Term};

    fn key(s: &str) -> PathKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_hierarchy_covers_every_path() {
        let index = PathTreeIndex::build(vec![
            Term::new("Chemicals", "", ["D02"]),
            Term::new("Aspirin", "", ["D02.241.223", "D27.505.696"]),
            Term::new("Caffeine", "", ["D02.241.511"]),
        ])
        .unwrap();
        let root = index.hierarchy();

        assert_eq!(root.segment, "root");
        assert!(root.terms.is_empty());
        let top: Vec<&str> = root.branches.iter().map(|b| b.segment.as_str()).collect();
        assert_eq!(top, ["D02", "D27"]);

        let d02 = root.find(&key("D02")).unwrap();
        assert_eq!(d02.terms[0].name, "Chemicals");
        let d02_241 = root.find(&key("D02.241")).unwrap();
        assert!(d02_241.terms.is_empty());
        let leaves: Vec<&str> = d02_241.branches.iter().map(|b| b.segment.as_str()).collect();
        assert_eq!(leaves, ["223", "511"]);

        assert_eq!(root.find(&key("D27.505.696")).unwrap().terms[0].name, "Aspirin");
        assert!(root.find(&key("D27.999")).is_none());
        assert_eq!(root.height(), 3);
        assert_eq!(root.descendants(), 7);
    }

    #[test]
    fn test_shared_path_collects_every_term() {
        let index = PathTreeIndex::build(vec![
            Term::new("First", "", ["A.1"]),
            Term::new("Second", "", ["A.1"]),
        ])
        .unwrap();
        let root = index.hierarchy();
        let node = root.find(&key("A.1")).unwrap();
        let names: Vec<&str> = node.terms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
        assert!(node.is_leaf());
        assert_eq!(node.path, key("A.1"));
    }

    #[test]
    fn test_pruned_cuts_levels() {
        let index = PathTreeIndex::build(vec![
            Term::new("Chemicals", "", ["D02"]),
            Term::new("Aspirin", "", ["D02.241.223"]),
        ])
        .unwrap();
        let root = index.hierarchy();

        let one = root.pruned(1);
        assert_eq!(one.height(), 1);
        assert_eq!(one.branches[0].terms[0].name, "Chemicals");
        assert!(root.pruned(0).is_leaf());
        assert_eq!(root.pruned(10), root);
    }

    #[test]
    fn test_empty_index_has_bare_root() {
        let index = PathTreeIndex::build(Vec::new()).unwrap();
        let root = index.hierarchy();
        assert!(root.is_leaf());
        assert_eq!(root.find(&PathKey::root()).unwrap().segment, "root");
    }
}

//! Projected tree of results over the MeSH hierarchy
//!
//! Nodes live in an arena owned by [`PathTree`]; every node keeps an ordered
//! list of its children and no link back to its parent. A node's parent is
//! recovered from its [`PathKey`] by stripping the last segment.

use mesh_common::{PathKey, Term};
use serde::Serialize;

/// Handle to a node inside one [`PathTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node carries
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<'a, P> {
    /// The synthetic root; never carries a term
    Root,

    /// A synthesized ancestor. `term` is set when a heading is registered at
    /// exactly this path, but no payload is attached either way.
    Placeholder {
        segment: String,
        term: Option<&'a Term>,
    },

    /// One occurrence of a result: the heading plus its payload
    Term { term: &'a Term, payload: P },
}

#[derive(Debug, Clone)]
pub struct TreeNode<'a, P> {
    path: PathKey,
    kind: NodeKind<'a, P>,
    children: Vec<NodeId>,
}

impl<'a, P> TreeNode<'a, P> {
    pub fn path(&self) -> &PathKey {
        &self.path
    }

    pub fn kind(&self) -> &NodeKind<'a, P> {
        &self.kind
    }

    /// Display label: the heading name when one is known, otherwise the path
    /// segment. Empty for the root.
    pub fn label(&self) -> &str {
        match &self.kind {
            NodeKind::Root => "",
            NodeKind::Placeholder {
                term: Some(term), ..
            } => &term.name,
            NodeKind::Placeholder { segment, .. } => segment,
            NodeKind::Term { term, .. } => &term.name,
        }
    }

    pub fn term(&self) -> Option<&'a Term> {
        match self.kind {
            NodeKind::Root => None,
            NodeKind::Placeholder { term, .. } => term,
            NodeKind::Term { term, .. } => Some(term),
        }
    }

    pub fn payload(&self) -> Option<&P> {
        match &self.kind {
            NodeKind::Term { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, NodeKind::Placeholder { .. })
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, NodeKind::Root)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// The tree produced by [`PathTreeIndex::project`](crate::PathTreeIndex::project).
///
/// Borrows its terms from the index it was projected from.
#[derive(Debug, Clone)]
pub struct PathTree<'a, P> {
    nodes: Vec<TreeNode<'a, P>>,
}

impl<'a, P> PathTree<'a, P> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TreeNode {
                path: PathKey::root(),
                kind: NodeKind::Root,
                children: Vec::new(),
            }],
        }
    }

    /// Add a node that is not yet linked to any parent
    pub(crate) fn insert(&mut self, path: PathKey, kind: NodeKind<'a, P>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            path,
            kind,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }

    /// Add a node as the last child of `parent`
    pub(crate) fn push(&mut self, parent: NodeId, path: PathKey, kind: NodeKind<'a, P>) -> NodeId {
        let id = self.insert(path, kind);
        self.attach(parent, id);
        id
    }

    /// Reverse the order of the root's children; deeper levels are untouched
    pub(crate) fn reverse_top_level(&mut self) {
        self.nodes[0].children.reverse();
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// If `id` was issued by a different tree and is out of range.
    pub fn node(&self, id: NodeId) -> &TreeNode<'a, P> {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the root is present
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Maximum segment count over all nodes
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.path.len()).max().unwrap_or(0)
    }

    /// Depth-first pre-order traversal yielding `(depth, node)`; the root is
    /// yielded first at depth 0.
    pub fn walk(&self) -> Walk<'_, 'a, P> {
        Walk {
            tree: self,
            stack: vec![(0, self.root())],
        }
    }

    /// All term-bearing nodes for the heading called `name`, in walk order
    pub fn occurrences(&self, name: &str) -> Vec<NodeId> {
        self.walk()
            .map(|(_, id)| id)
            .filter(|&id| {
                let node = self.node(id);
                !node.is_placeholder() && node.term().is_some_and(|t| t.name == name)
            })
            .collect()
    }

    /// Owned, serializable copy of the tree
    pub fn to_view(&self) -> TreeView<P>
    where
        P: Clone,
    {
        self.view_of(self.root())
    }

    fn view_of(&self, id: NodeId) -> TreeView<P>
    where
        P: Clone,
    {
        let node = self.node(id);
        TreeView {
            label: node.label().to_string(),
            path: node.path.to_string(),
            placeholder: node.is_placeholder(),
            description: node.term().map(|t| t.description.clone()),
            payload: node.payload().cloned(),
            children: node.children.iter().map(|&c| self.view_of(c)).collect(),
        }
    }
}

/// Iterator returned by [`PathTree::walk`]
pub struct Walk<'t, 'a, P> {
    tree: &'t PathTree<'a, P>,
    stack: Vec<(usize, NodeId)>,
}

impl<'t, 'a, P> Iterator for Walk<'t, 'a, P> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop()?;
        let children = self.tree.children(id);
        self.stack
            .extend(children.iter().rev().map(|&child| (depth + 1, child)));
        Some((depth, id))
    }
}

/// Owned nested form of a [`PathTree`] for JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeView<P> {
    pub label: String,
    pub path: String,
    pub placeholder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeView<P>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn key(s: &str) -> PathKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_tree_has_only_root() {
        let tree: PathTree<'_, u32> = PathTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.depth(), 0);
        assert!(tree.node(tree.root()).is_root());
        assert_eq!(tree.node(tree.root()).label(), "");
    }

    #[test]
    fn test_walk_is_preorder() {
        let term = Term::new("T", "leaf", ["A.B"]);
        let mut tree = PathTree::new();
        let a = tree.push(
            tree.root(),
            key("A"),
            NodeKind::Placeholder {
                segment: "A".into(),
                term: None,
            },
        );
        tree.push(
            a,
            key("A.B"),
            NodeKind::Term {
                term: &term,
                payload: 1,
            },
        );
        let c = tree.push(
            tree.root(),
            key("C"),
            NodeKind::Placeholder {
                segment: "C".into(),
                term: None,
            },
        );

        let order: Vec<(usize, String)> = tree
            .walk()
            .map(|(d, id)| (d, tree.node(id).path().to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, String::new()),
                (1, "A".to_string()),
                (2, "A.B".to_string()),
                (1, "C".to_string())
            ]
        );

        tree.reverse_top_level();
        assert_eq!(tree.children(tree.root())[0], c);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_view_skips_placeholder_payload() {
        let term = Term::new("T", "leaf", ["A.B"]);
        let mut tree = PathTree::new();
        let a = tree.push(
            tree.root(),
            key("A"),
            NodeKind::Placeholder {
                segment: "A".into(),
                term: None,
            },
        );
        tree.push(
            a,
            key("A.B"),
            NodeKind::Term {
                term: &term,
                payload: 7,
            },
        );

        let json = serde_json::to_value(tree.to_view()).unwrap();
        let branch = &json["children"][0];
        assert_eq!(branch["label"], "A");
        assert_eq!(branch["placeholder"], true);
        assert!(branch.get("payload").is_none());
        assert_eq!(branch["children"][0]["payload"], 7);
        assert_eq!(branch["children"][0]["description"], "leaf");
        assert!(branch["children"][0].get("children").is_none());
    }
}

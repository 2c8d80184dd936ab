//! Name and path index over a set of MeSH terms
//!
//! The index is built once per query from a list of [`Term`]s and owns every
//! lookup table it needs, so two indexes over different vocabularies never
//! share state.
//!
//! Registration is last-write-wins: when two terms claim the same exact path,
//! or share a name, the one later in input order is returned by
//! [`PathTreeIndex::resolve`] and [`PathTreeIndex::term`].

use crate::hierarchy::HierarchyNode;
use crate::loader::Annotation;
use crate::table::TableRow;
use crate::tree::{NodeId, NodeKind, PathTree};
use mesh_common::{MeshError, PathKey, Result, Term};
use std::collections::HashMap;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct PathTreeIndex {
    /// Terms in input order, duplicates included
    terms: Vec<Term>,
    /// Parsed path identifiers, parallel to `terms`
    paths: Vec<Vec<PathKey>>,
    term_by_name: HashMap<String, usize>,
    term_by_path: HashMap<PathKey, usize>,
}

impl PathTreeIndex {
    /// Index `terms` by name and by every path identifier they carry.
    ///
    /// Fails with [`MeshError::MalformedPath`] if any identifier contains an
    /// empty segment; nothing is indexed in that case.
    pub fn build<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = Term>,
    {
        let mut index = Self::default();

        for term in terms {
            let paths = term
                .ids
                .iter()
                .map(|id| id.parse::<PathKey>())
                .collect::<Result<Vec<_>>>()
                .map_err(|e| e.for_term(&term.name))?;

            let slot = index.terms.len();
            for path in &paths {
                if let Some(previous) = index.term_by_path.insert(path.clone(), slot) {
                    trace!(
                        path = %path,
                        replaced = %index.terms[previous].name,
                        by = %term.name,
                        "Path registered twice, keeping the later term"
                    );
                }
            }
            if let Some(previous) = index.term_by_name.insert(term.name.clone(), slot) {
                trace!(term = %term.name, previous, "Duplicate term name, keeping the later term");
            }

            index.terms.push(term);
            index.paths.push(paths);
        }

        debug!(
            terms = index.terms.len(),
            names = index.term_by_name.len(),
            paths = index.term_by_path.len(),
            "Built path index"
        );
        Ok(index)
    }

    /// The term registered at exactly `path`, if any
    pub fn resolve(&self, path: &PathKey) -> Option<&Term> {
        self.term_by_path.get(path).map(|&slot| &self.terms[slot])
    }

    /// The term called `name`, if any
    pub fn term(&self, name: &str) -> Option<&Term> {
        self.term_by_name.get(name).map(|&slot| &self.terms[slot])
    }

    /// Parsed path identifiers of the term called `name`
    pub fn paths_of(&self, name: &str) -> Option<&[PathKey]> {
        self.term_by_name
            .get(name)
            .map(|&slot| self.paths[slot].as_slice())
    }

    /// All indexed terms in input order
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Project `(term name, payload)` results onto the hierarchy.
    ///
    /// Each result appears once per path of its term. A result node at a path
    /// is the parent of every result below it, whatever order the results
    /// arrive in; when several results share a path, the last one takes the
    /// descendants. Ancestors without a result become placeholders, resolved
    /// to the term registered at that path when there is one. Children keep
    /// discovery order, except at the top level where the order is reversed.
    /// Names that do not resolve are skipped.
    pub fn project<'a, N, P, I>(&'a self, results: I) -> PathTree<'a, P>
    where
        I: IntoIterator<Item = (N, P)>,
        N: AsRef<str>,
        P: Clone,
    {
        let mut tree = PathTree::new();
        let mut anchors: HashMap<PathKey, NodeId> = HashMap::new();
        anchors.insert(PathKey::root(), tree.root());
        let mut leaves = Vec::new();
        let mut skipped = 0usize;

        // Every result node exists before any of them is linked
        for (name, payload) in results {
            let name = name.as_ref();
            let Some(&slot) = self.term_by_name.get(name) else {
                trace!(term = name, "No term for result, skipping");
                skipped += 1;
                continue;
            };
            let term = &self.terms[slot];

            for path in &self.paths[slot] {
                let leaf = tree.insert(
                    path.clone(),
                    NodeKind::Term {
                        term,
                        payload: payload.clone(),
                    },
                );
                anchors.insert(path.clone(), leaf);
                leaves.push((path, leaf));
            }
        }

        for (path, leaf) in leaves {
            let parent = match path.parent() {
                Some(parent) => self.anchor(&mut tree, &mut anchors, &parent),
                None => tree.root(),
            };
            tree.attach(parent, leaf);
        }

        tree.reverse_top_level();
        debug!(nodes = tree.len(), depth = tree.depth(), skipped, "Projected results");
        tree
    }

    /// The node that parents everything below `path`, creating placeholders
    /// for it and any missing ancestors.
    fn anchor<'a, P>(
        &'a self,
        tree: &mut PathTree<'a, P>,
        anchors: &mut HashMap<PathKey, NodeId>,
        path: &PathKey,
    ) -> NodeId {
        if let Some(&id) = anchors.get(path) {
            return id;
        }
        let parent = match path.parent() {
            Some(parent) => self.anchor(tree, anchors, &parent),
            None => tree.root(),
        };
        let segment = path.last().unwrap_or_default().to_string();
        let term = self.resolve(path);
        let id = tree.push(parent, path.clone(), NodeKind::Placeholder { segment, term });
        anchors.insert(path.clone(), id);
        id
    }

    /// Flat `(term, payload)` rows in result order, one per resolving result
    pub fn table<'a, N, P, I>(&'a self, results: I) -> Vec<TableRow<'a, P>>
    where
        I: IntoIterator<Item = (N, P)>,
        N: AsRef<str>,
    {
        results
            .into_iter()
            .filter_map(|(name, payload)| {
                self.term(name.as_ref())
                    .map(|term| TableRow { term, payload })
            })
            .collect()
    }

    /// Pair compound annotations with the headings they name, in annotation
    /// order. Annotations naming an unknown heading are dropped.
    pub fn annotate<'a>(&'a self, annotations: &'a [Annotation]) -> Vec<(&'a Annotation, &'a Term)> {
        let paired: Vec<_> = annotations
            .iter()
            .filter_map(|annotation| self.term(&annotation.name).map(|term| (annotation, term)))
            .collect();
        debug!(
            annotations = annotations.len(),
            matched = paired.len(),
            "Matched compound annotations"
        );
        paired
    }

    /// The complete vocabulary hierarchy, independent of any results
    pub fn hierarchy(&self) -> HierarchyNode<'_> {
        let mut root = HierarchyNode::root();
        for (term, paths) in self.terms.iter().zip(&self.paths) {
            for path in paths {
                root.insert(path, term);
            }
        }
        root
    }
}

impl TryFrom<Vec<Term>> for PathTreeIndex {
    type Error = MeshError;

    fn try_from(terms: Vec<Term>) -> Result<Self> {
        Self::build(terms)
    }
}

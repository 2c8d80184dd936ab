//! MeSH Tree Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Path-indexed trees over MeSH headings.
//!
//! A MeSH heading may sit at several locations of the vocabulary, each written
//! as a dotted path such as `D27.505.696`. [`PathTreeIndex`] indexes a set of
//! [`Term`]s by name and by path and projects externally computed results
//! (e.g. enrichment statistics) onto the hierarchy, synthesizing the ancestor
//! nodes no result claims.
//!
//! # Modules
//!
//! - [`index`]: index construction, lookups and projection
//! - [`tree`]: the projected arena tree and its serializable view
//! - [`hierarchy`]: the results-independent vocabulary hierarchy
//! - [`table`]: flat rows for non-hierarchical display
//! - [`enrichment`]: the enrichment record and result filter
//! - [`loader`]: tab-delimited term, result and annotation files
//!
//! # Example
//!
//! ```
//! use mesh_tree::{PathTreeIndex, Term};
//!
//! let index = PathTreeIndex::build(vec![Term::new("X", "desc", ["1.2", "1.3"])])?;
//! let tree = index.project([("X", 42)]);
//!
//! let branch = tree.children(tree.root())[0];
//! assert_eq!(tree.node(branch).label(), "1");
//! assert_eq!(tree.children(branch).len(), 2);
//! # Ok::<(), mesh_tree::MeshError>(())
//! ```

pub mod enrichment;
pub mod hierarchy;
pub mod index;
pub mod loader;
pub mod table;
pub mod tree;

// Re-export commonly used types
pub use enrichment::{EnrichmentFilter, EnrichmentStat};
pub use hierarchy::HierarchyNode;
pub use index::PathTreeIndex;
pub use loader::Annotation;
pub use mesh_common::{MeshError, PathKey, Result, Term};
pub use table::TableRow;
pub use tree::{NodeId, NodeKind, PathTree, TreeNode, TreeView};

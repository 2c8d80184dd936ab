//! MeSH Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging and error handling for the MeSH browser workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all workspace members:
//!
//! - **Error Handling**: [`MeshError`] and the crate-wide [`Result`] alias
//! - **Types**: [`Term`] records and dotted [`PathKey`] identifiers
//! - **Logging**: `tracing` subscriber setup shared by the binaries
//!
//! # Example
//!
//! ```
//! use mesh_common::{PathKey, Result};
//!
//! fn branch_of(id: &str) -> Result<String> {
//!     let key: PathKey = id.parse()?;
//!     Ok(key.segments()[0].clone())
//! }
//!
//! assert_eq!(branch_of("D27.505.696").unwrap(), "D27");
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{MeshError, Result};
pub use types::{PathKey, Term};

//! Flat rows for table views

use mesh_common::Term;
use serde::Serialize;

/// One result row: the heading and its payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow<'a, P> {
    pub term: &'a Term,
    pub payload: P,
}

impl<'a, P> TableRow<'a, P> {
    pub fn name(&self) -> &'a str {
        &self.term.name
    }

    pub fn description(&self) -> &'a str {
        &self.term.description
    }
}

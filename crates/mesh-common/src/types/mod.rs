//! Common types used across the MeSH browser

use crate::error::MeshError;
use serde::{Deserialize, Serialize};

/// Separator between the segments of a dotted path identifier
pub const PATH_SEPARATOR: char = '.';

/// A MeSH heading together with every location it occupies in the hierarchy.
///
/// The same heading may sit under several branches, so `ids` usually holds
/// more than one dotted path (e.g. `D02.455.426` and `D27.505.696`).
///
/// # Examples
///
/// ```
/// use mesh_common::Term;
///
/// let term = Term::new("Aspirin", "Analgesic", ["D02.241.223.100", "D27.505.696"]);
/// assert_eq!(term.ids.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Heading name, unique within a vocabulary
    pub name: String,

    /// Human readable description
    pub description: String,

    /// Dotted path identifiers, unparsed
    #[serde(default)]
    pub ids: Vec<String>,
}

impl Term {
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// A location in the hierarchy as an ordered list of segments.
///
/// The empty key is the synthetic root. Keys compare segment by segment with
/// no normalization, so `"d27"` and `"D27"` are different keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathKey(Vec<String>);

impl PathKey {
    /// The synthetic root key
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Final segment, `None` for the root
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Key with the last segment stripped, `None` for the root
    pub fn parent(&self) -> Option<PathKey> {
        if self.is_root() {
            return None;
        }
        Some(self.prefix(self.0.len() - 1))
    }

    /// Key made of the first `len` segments
    pub fn prefix(&self, len: usize) -> PathKey {
        PathKey(self.0[..len.min(self.0.len())].to_vec())
    }
}

impl std::str::FromStr for PathKey {
    type Err = MeshError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(PATH_SEPARATOR).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(MeshError::malformed_path(s));
        }
        Ok(Self(segments.into_iter().map(str::to_string).collect()))
    }
}

impl std::fmt::Display for PathKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl TryFrom<String> for PathKey {
    type Error = MeshError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        if value.is_empty() {
            return Ok(Self::root());
        }
        value.parse()
    }
}

impl From<PathKey> for String {
    fn from(key: PathKey) -> Self {
        key.to_string()
    }
}

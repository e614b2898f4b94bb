/// ID types for vidplay entities
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Video identifier
///
/// Ids come from the catalog file and are compared exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Create a new video ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Lets `HashMap<VideoId, _>` be queried with a plain `&str`.
impl Borrow<str> for VideoId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

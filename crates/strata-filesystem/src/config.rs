use serde::{Deserialize, Serialize};

/// Configuration for [`FileReader`](crate::reader::FileReader).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Maximum number of nested file contents lists traversed for a single
    /// file, counting the root list. Blobs do not count towards the limit.
    pub max_depth: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { max_depth: 16 }
    }
}

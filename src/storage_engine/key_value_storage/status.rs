use serde::{Deserialize, Serialize};

/// Tree status
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Number of key/value pairs.
    pub keys: usize,
    pub nodes: usize,
    /// Number of levels, 0 for an empty tree.
    pub height: usize,
    pub degree: usize,
}

use std::fmt::{self, Debug};

/// A key/value pair stored in a node. Items are ordered by key, compared byte-lexicographically.
/// An item lives in exactly one node slot and is moved, never copied, when nodes are split,
/// rotated or merged.
#[derive(Clone, PartialEq, Eq)]
pub struct Item {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl Item {
    pub fn new(key: Vec<u8>, value: Vec<u8>) -> Self {
        Self { key, value }
    }
}

impl Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            String::from_utf8_lossy(&self.key),
            String::from_utf8_lossy(&self.value)
        )
    }
}

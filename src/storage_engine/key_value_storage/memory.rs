use crate::error::Result;
use crate::storage_engine::key_value_storage::{BTree, KvStore, Status};
use std::fmt::Display;
use std::sync::{Arc, RwLock};

/// In-memory key-value store using a B-tree. The tree itself is single-threaded; the store guards
/// it with a single RwLock, so clones of the store can be shared across threads with writers
/// serialized on the whole tree.
#[derive(Clone)]
pub struct KvMemory {
    /// The tree, guarded by an RwLock so the store can be shared.
    tree: Arc<RwLock<BTree>>,
}

impl Display for KvMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "memory")
    }
}

impl Default for KvMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl KvMemory {
    /// Creates a new in-memory store using the default degree.
    pub fn new() -> Self {
        Self { tree: Arc::new(RwLock::new(BTree::new())) }
    }

    /// Creates a new in-memory store using the given degree.
    pub fn new_with_degree(degree: usize) -> Result<Self> {
        Ok(Self { tree: Arc::new(RwLock::new(BTree::with_degree(degree)?)) })
    }

    /// Returns the status of the underlying tree.
    pub fn status(&self) -> Result<Status> {
        Ok(self.tree.read()?.status())
    }
}

impl KvStore for KvMemory {
    fn delete(&mut self, key: &[u8]) -> Result<bool> {
        Ok(self.tree.write()?.delete(key))
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.tree.read()?.find(key).map(|value| value.to_vec()))
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<bool> {
        Ok(self.tree.write()?.insert(key.to_vec(), value))
    }
}

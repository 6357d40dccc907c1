pub mod error;
pub mod storage_engine;

pub use error::{Error, Result};
pub use storage_engine::key_value_storage::{BTree, Degree, KvMemory, KvStore, Status, DEFAULT_DEGREE};

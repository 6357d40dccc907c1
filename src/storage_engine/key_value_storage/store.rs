use crate::error::Result;
use std::fmt::Display;

/// A key/value store, mapping arbitrary byte keys to byte values.
pub trait KvStore: Display + Send + Sync {
    /// Deletes a key, or does nothing if it does not exist. Returns whether the key existed.
    fn delete(&mut self, key: &[u8]) -> Result<bool>;

    /// Flushes any buffered data to the underlying storage medium.
    fn flush(&mut self) -> Result<()>;

    /// Gets a value for a key, if it exists.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Sets a value for a key, replacing the existing value if any. Returns false if an existing
    /// value was replaced.
    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<bool>;
}

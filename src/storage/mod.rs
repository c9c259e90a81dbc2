//! Persistence layer
//!
//! A namespaced JSON key-value store over the local data directory. Reads
//! fall back and writes are swallowed, so the engine and tracker never
//! observe a storage error.

pub mod kv;

pub use kv::{KvStorage, StorageError};

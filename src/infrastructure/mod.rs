//! Storage adapters implementing [`KeyValueStore`](crate::domain::ports::KeyValueStore).

pub mod in_memory;
pub mod json_file;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;

pub mod json_storage;
pub mod memory_storage;

pub use json_storage::JsonFileStorage;
pub use memory_storage::MemoryStorage;

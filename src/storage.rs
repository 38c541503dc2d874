mod file_storage;
mod key_value_storage;
mod memory_storage;

pub use self::{
    file_storage::FileStorage, key_value_storage::KeyValueStorage, memory_storage::MemoryStorage,
};

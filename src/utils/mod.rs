pub mod constants;
pub mod pages;
pub mod storage;

pub use constants::*;
pub use pages::{query_param, Page};
pub use storage::{MemoryStorage, SessionStore, StorageBackend};

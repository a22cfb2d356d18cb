#![forbid(unsafe_code)]

pub mod fs;
pub mod repository;

pub use fs::FileTokenStore;
pub use repository::{InMemoryTokenStore, StorageError, TokenStore};

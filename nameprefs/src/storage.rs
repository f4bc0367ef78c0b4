//! Backends for [`namecore::storage::Storage`].

mod file;
#[cfg(feature = "web")]
mod local;
mod memory;

pub use file::FileStorage;
#[cfg(feature = "web")]
pub use local::LocalStorage;
pub use memory::{
    MemoryStorage,
    NullStorage,
};

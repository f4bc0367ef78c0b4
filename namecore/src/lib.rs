pub mod error;
pub(crate) mod lenient;
pub mod name;
pub mod platform;
pub mod query;
pub mod statistics;
pub mod storage;

mod client;
pub mod error;

pub use client::{
    Builder,
    Client,
};

pub mod debounce;
pub mod favorites;
pub mod paginator;
pub mod search;
pub mod welcome;

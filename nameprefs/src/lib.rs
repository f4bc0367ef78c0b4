mod store;
pub mod storage;

pub use store::{
    PreferenceStore,
    FAVORITES_KEY,
    ONBOARDING_KEY,
    RECENT_SEARCHES_CAPACITY,
    RECENT_SEARCHES_KEY,
};

use namecore::storage::Storage;
use nameprefs::PreferenceStore;

/// Whether the one-time welcome screen is still due.
pub fn should_show_welcome<S: Storage>(prefs: &PreferenceStore<S>) -> bool {
    !prefs.has_completed_onboarding()
}

pub fn complete_welcome<S: Storage>(prefs: &PreferenceStore<S>) {
    log::info!("welcome screen completed");
    prefs.mark_onboarding_complete();
}

#[cfg(test)]
mod tests {
    use super::*;
    use nameprefs::storage::{
        MemoryStorage,
        NullStorage,
    };

    #[test]
    fn test_welcome_shown_once() {
        let prefs = PreferenceStore::new(MemoryStorage::new());
        assert!(should_show_welcome(&prefs));
        complete_welcome(&prefs);
        assert!(!should_show_welcome(&prefs));
    }

    #[test]
    fn test_welcome_without_storage() {
        // nothing persists, so the welcome is offered every time
        let prefs = PreferenceStore::new(NullStorage);
        complete_welcome(&prefs);
        assert!(should_show_welcome(&prefs));
    }
}

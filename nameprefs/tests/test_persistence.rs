use nameprefs::{
    storage::FileStorage,
    PreferenceStore,
};
use tempfile::TempDir;

#[test]
fn preferences_survive_reload() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("prefs.json");

    let store = PreferenceStore::new(FileStorage::new(&path));
    store.add_favorite(12);
    store.add_favorite(3);
    store.add_recent_search("Ola");
    store.mark_onboarding_complete();
    drop(store);

    let store = PreferenceStore::new(FileStorage::new(&path));
    assert_eq!(store.list_favorites(), vec![12, 3]);
    assert_eq!(store.list_recent_searches(), vec!["Ola"]);
    assert!(store.has_completed_onboarding());
    Ok(())
}

#[test]
fn shared_storage_between_stores() {
    let storage = nameprefs::storage::MemoryStorage::new();
    let first = PreferenceStore::new(&storage);
    let second = PreferenceStore::new(&storage);
    first.add_favorite(1);
    assert!(second.is_favorite(1));
    second.remove_favorite(1);
    assert!(first.list_favorites().is_empty());
}

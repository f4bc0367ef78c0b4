use namecore::name::Gender;
use namectrl::favorites::{
    load_favorites,
    resolve_favorites,
    FavoriteSort,
};
use nameprefs::{
    storage::MemoryStorage,
    PreferenceStore,
};
use test_names::{
    core::MockBackend,
    fixture::{
        name,
        not_found,
    },
};

fn backend() -> MockBackend {
    let mut backend = MockBackend::new();
    backend.expect_get_name()
        .returning(|id| match id {
            1 => Ok(name(1, "Zofia", Some(Gender::Female))),
            2 => Ok(name(2, "adam", Some(Gender::Male))),
            3 => Ok(name(3, "Bartek", Some(Gender::Male))),
            _ => Err(not_found()),
        });
    backend
}

#[async_std::test]
async fn unresolvable_favorites_are_skipped() {
    let names = resolve_favorites(&backend(), &[3, 99, 1]).await;
    assert_eq!(names.iter().map(|n| n.id).collect::<Vec<_>>(), vec![3, 1]);
}

#[async_std::test]
async fn favorites_sorted() {
    let prefs = PreferenceStore::new(MemoryStorage::new());
    for id in [1, 2, 404, 3] {
        prefs.add_favorite(id);
    }
    let backend = backend();

    let recent = load_favorites(&backend, &prefs, FavoriteSort::Recent).await;
    assert_eq!(recent.iter().map(|n| n.id).collect::<Vec<_>>(), vec![3, 2, 1]);

    let alpha = load_favorites(&backend, &prefs, FavoriteSort::Alphabetical).await;
    assert_eq!(
        alpha.iter().map(|n| n.name.as_str()).collect::<Vec<_>>(),
        vec!["adam", "Bartek", "Zofia"],
    );
    // the stored ids are left untouched
    assert_eq!(prefs.list_favorites(), vec![1, 2, 404, 3]);
}

#[async_std::test]
async fn no_favorites_no_requests() {
    let mut backend = MockBackend::new();
    backend.expect_get_name().times(0);
    let prefs = PreferenceStore::new(MemoryStorage::new());
    assert!(load_favorites(&backend, &prefs, FavoriteSort::Recent).await.is_empty());
}

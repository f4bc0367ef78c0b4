use async_trait::async_trait;
use futures::channel::oneshot;
use namecore::{
    error::ApiError,
    name::{
        Gender,
        Name,
        NameListing,
    },
    platform::NameBackend,
    query::ListQuery,
    statistics::{
        PopularName,
        StatisticsSummary,
        TrendingName,
    },
};
use namectrl::paginator::{
    Completion,
    ListFilter,
    PaginatedList,
    Paginator,
    Status,
};
use parking_lot::Mutex;
use std::{
    collections::VecDeque,
    sync::Arc,
};
use test_names::{
    core::MockBackend,
    fixture::listing,
};

#[async_std::test]
async fn scroll_through_three_pages() -> anyhow::Result<()> {
    let mut backend = MockBackend::new();
    for page in 1..=3 {
        backend.expect_list_names()
            .times(1)
            .withf(move |q: &ListQuery| q.page == Some(page) && q.page_size == Some(2) && q.gender.is_none())
            .returning(move |_| Ok(listing(page, 2, page == 3, None)));
    }
    let list = PaginatedList::new(backend, Paginator::new(ListFilter::default(), 2));

    assert_eq!(list.load().await, Some(Completion::Applied));
    assert_eq!(list.on_sentinel(0.2).await, Some(Completion::Applied));
    assert_eq!(list.on_sentinel(1.0).await, Some(Completion::Applied));
    // the last page is loaded; nothing else is requested
    assert_eq!(list.on_sentinel(1.0).await, None);
    assert_eq!(list.load().await, None);

    assert_eq!(list.status(), Status::Loaded);
    assert_eq!(
        list.with(|p| p.names().map(|n| n.id).collect::<Vec<_>>()),
        vec![1, 2, 3, 4, 5, 6],
    );
    Ok(())
}

#[async_std::test]
async fn load_all_stops_on_error() -> anyhow::Result<()> {
    let mut backend = MockBackend::new();
    backend.expect_list_names()
        .times(1)
        .withf(|q: &ListQuery| q.page == Some(1))
        .returning(|_| Ok(listing(1, 2, false, None)));
    backend.expect_list_names()
        .times(1)
        .withf(|q: &ListQuery| q.page == Some(2))
        .returning(|_| Err(ApiError::Transport("connection reset".to_string())));
    let list = PaginatedList::new(backend, Paginator::new(ListFilter::default(), 2));

    let err = list.load_all().await.unwrap_err();
    assert_eq!(err, ApiError::Transport("connection reset".to_string()));
    assert!(matches!(list.status(), Status::Error(_)));
    assert_eq!(list.with(Paginator::len), 2);
    // halted until the filter changes
    assert_eq!(list.on_sentinel(1.0).await, None);
    Ok(())
}

#[async_std::test]
async fn load_all_gender_filter() -> anyhow::Result<()> {
    let mut backend = MockBackend::new();
    backend.expect_list_names()
        .times(2)
        .withf(|q: &ListQuery| q.gender == Some(Gender::Male))
        .returning(|q| Ok(listing(q.page.unwrap_or(1), 3, q.page == Some(2), Some(Gender::Male))));
    let list = PaginatedList::new(
        backend,
        Paginator::new(ListFilter::gender(Some(Gender::Male)), 3),
    );
    list.load_all().await?;
    assert_eq!(list.with(Paginator::len), 6);
    assert_eq!(list.with(|p| p.total_rows()), Some(6));
    Ok(())
}

// A backend whose listing responses are released by the test itself, so
// that filter changes can be interleaved with in-flight requests.
#[derive(Clone, Default)]
struct GatedBackend {
    pending: Arc<Mutex<VecDeque<(ListQuery, oneshot::Sender<NameListing>)>>>,
}

impl GatedBackend {
    fn respond(&self, listing: NameListing) -> ListQuery {
        let (query, sender) = self.pending.lock()
            .pop_front()
            .expect("a request should be pending");
        sender.send(listing).expect("the request should still be awaited");
        query
    }
}

#[async_trait]
impl NameBackend for GatedBackend {
    async fn list_names(&self, query: &ListQuery) -> Result<NameListing, ApiError> {
        let (sender, receiver) = oneshot::channel();
        self.pending.lock().push_back((query.clone(), sender));
        receiver.await.map_err(|e| ApiError::Transport(e.to_string()))
    }
    async fn get_name(&self, _: i64) -> Result<Name, ApiError> {
        unimplemented!()
    }
    async fn search_names(
        &self,
        _: &str,
        _: Option<u32>,
        _: Option<Gender>,
    ) -> Result<Vec<Name>, ApiError> {
        unimplemented!()
    }
    async fn get_popular_names(
        &self,
        _: Option<i32>,
        _: Option<Gender>,
        _: Option<u32>,
    ) -> Result<Vec<PopularName>, ApiError> {
        unimplemented!()
    }
    async fn get_trending_names(
        &self,
        _: Option<u32>,
        _: Option<Gender>,
        _: Option<u32>,
    ) -> Result<Vec<TrendingName>, ApiError> {
        unimplemented!()
    }
    async fn get_statistics_summary(&self) -> Result<StatisticsSummary, ApiError> {
        unimplemented!()
    }
}

#[async_std::test]
async fn filter_change_while_loading_more() -> anyhow::Result<()> {
    let backend = GatedBackend::default();
    let list = PaginatedList::new(backend.clone(), Paginator::new(ListFilter::default(), 2));

    let (first, query) = futures::join!(
        list.load(),
        async { backend.respond(listing(1, 2, false, None)) }
    );
    assert_eq!(first, Some(Completion::Applied));
    assert_eq!(query.gender, None);

    // page 2 is in flight when the gender filter changes
    let female = ListFilter::gender(Some(Gender::Female));
    let (stale, query) = futures::join!(
        list.on_sentinel(1.0),
        async {
            assert!(list.set_filter(female.clone()));
            backend.respond(listing(2, 2, false, None))
        }
    );
    assert_eq!(query.page, Some(2));
    assert_eq!(stale, Some(Completion::Stale));
    assert_eq!(list.status(), Status::Idle);
    assert!(list.with(Paginator::is_empty));

    let (fresh, query) = futures::join!(
        list.load(),
        async { backend.respond(listing(1, 2, true, Some(Gender::Female))) }
    );
    assert_eq!(fresh, Some(Completion::Applied));
    assert_eq!(query.page, Some(1));
    assert_eq!(query.gender, Some(Gender::Female));
    assert!(list.with(|p| p.names().all(|n| n.gender == Some(Gender::Female))));
    assert_eq!(list.with(Paginator::len), 2);
    Ok(())
}

#[async_std::test]
async fn concurrent_triggers_coalesce() -> anyhow::Result<()> {
    let backend = GatedBackend::default();
    let list = PaginatedList::new(backend.clone(), Paginator::new(ListFilter::default(), 2));
    futures::join!(
        list.load(),
        async { backend.respond(listing(1, 2, false, None)) }
    );

    let (a, b, c, query) = futures::join!(
        list.on_sentinel(1.0),
        list.on_sentinel(1.0),
        list.on_sentinel(0.5),
        async {
            let query = backend.respond(listing(2, 2, true, None));
            assert!(backend.pending.lock().is_empty());
            query
        }
    );
    assert_eq!(query.page, Some(2));
    assert_eq!(a, Some(Completion::Applied));
    assert_eq!(b, None);
    assert_eq!(c, None);
    assert_eq!(list.with(Paginator::len), 4);
    Ok(())
}

//! Incremental loading of the catalog listing.
//!
//! [`Paginator`] is the synchronous state machine; fetching is split into
//! issuing a [`PageRequest`] and completing it, so the network round-trip
//! happens outside of any borrow of the state.  [`PaginatedList`] drives
//! it against a [`NameBackend`](namecore::platform::NameBackend).

use namecore::{
    error::ApiError,
    name::{
        Gender,
        Name,
        NameListing,
    },
    query::{
        ListQuery,
        DEFAULT_PAGE_SIZE,
    },
};

mod shared;

pub use shared::PaginatedList;

/// Minimum visible fraction of the sentinel that triggers the next page.
pub const SENTINEL_THRESHOLD: f64 = 0.1;

/// The server-side filter the accumulated pages were fetched under.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListFilter {
    pub gender: Option<Gender>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Idle,
    Loading,
    Loaded,
    LoadingMore,
    Error(ApiError),
}

/// A fetch issued by a [`Paginator`], tagged with the state it was issued
/// under.
#[derive(Clone, Debug, PartialEq)]
pub struct PageRequest {
    epoch: u64,
    filter: ListFilter,
    page: u32,
    page_size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The filter changed while the request was in flight; the result was
    /// dropped.
    Stale,
}

#[derive(Clone, Debug)]
pub struct Paginator {
    filter: ListFilter,
    page_size: u32,
    pages: Vec<NameListing>,
    status: Status,
    epoch: u64,
}

impl ListFilter {
    pub fn gender(gender: Option<Gender>) -> Self {
        Self {
            gender,
            search: None,
        }
    }
}

impl PageRequest {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: Some(self.page),
            page_size: Some(self.page_size),
            search: self.filter.search.clone(),
            gender: self.filter.gender,
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(ListFilter::default(), DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(filter: ListFilter, page_size: u32) -> Self {
        Self {
            filter,
            page_size,
            pages: Vec::new(),
            status: Status::Idle,
            epoch: 0,
        }
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn pages(&self) -> &[NameListing] {
        &self.pages
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.status, Status::Loading | Status::LoadingMore)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            Status::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the most recently loaded page reports a successor.
    pub fn has_more(&self) -> bool {
        self.pages.last().is_some_and(NameListing::has_more)
    }

    pub fn total_rows(&self) -> Option<u64> {
        self.pages.last().map(|p| p.page_info.total_rows)
    }

    /// All loaded names, pages concatenated in page order.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.pages.iter().flat_map(|p| p.list.iter())
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|p| p.list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn request(&self, page: u32) -> PageRequest {
        PageRequest {
            epoch: self.epoch,
            filter: self.filter.clone(),
            page,
            page_size: self.page_size,
        }
    }

    /// Issues the next fetch, if one is due.
    ///
    /// The first page is requested from `Idle`; further pages only from
    /// `Loaded` while the last page has a successor.  Nothing is issued
    /// while a fetch is in flight or after an error.
    pub fn begin(&mut self) -> Option<PageRequest> {
        match self.status {
            Status::Idle => {
                self.status = Status::Loading;
                Some(self.request(1))
            }
            Status::Loaded => {
                let next = self.pages.last()?.next_page()?;
                self.status = Status::LoadingMore;
                Some(self.request(next))
            }
            _ => None,
        }
    }

    /// Reacts to the end-of-list sentinel becoming `visible_ratio` visible.
    pub fn on_sentinel(&mut self, visible_ratio: f64) -> Option<PageRequest> {
        if visible_ratio < SENTINEL_THRESHOLD || self.status != Status::Loaded {
            return None;
        }
        self.begin()
    }

    /// Applies the outcome of `request`, unless it was issued under a
    /// state that has since been reset.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<NameListing, ApiError>,
    ) -> Completion {
        if request.epoch != self.epoch
            || request.filter != self.filter
            || !self.is_fetching()
        {
            log::debug!(
                "discarding stale page {} for {:?}",
                request.page,
                request.filter,
            );
            return Completion::Stale;
        }
        match result {
            Ok(listing) => {
                log::debug!(
                    "loaded page {} ({} names, last: {})",
                    listing.page_info.page,
                    listing.list.len(),
                    listing.page_info.is_last_page,
                );
                self.pages.push(listing);
                self.status = Status::Loaded;
            }
            Err(e) => {
                log::debug!("page {} failed: {e}", request.page);
                self.status = Status::Error(e);
            }
        }
        Completion::Applied
    }

    /// Switches to `filter`, discarding everything loaded so far; returns
    /// whether anything changed.
    pub fn set_filter(&mut self, filter: ListFilter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.reset();
        true
    }

    /// Back to `Idle` with no pages; in-flight requests become stale.
    pub fn reset(&mut self) {
        self.pages.clear();
        self.status = Status::Idle;
        self.epoch += 1;
    }

    /// Leaves the error state and reissues the failed fetch.
    pub fn retry(&mut self) -> Option<PageRequest> {
        if !matches!(self.status, Status::Error(_)) {
            return None;
        }
        self.status = if self.pages.is_empty() {
            Status::Idle
        } else {
            Status::Loaded
        };
        self.begin()
    }
}

use async_trait::async_trait;
use crate::{
    error::ApiError,
    name::{
        Gender,
        Name,
        NameListing,
    },
    query::ListQuery,
    statistics::{
        PopularName,
        StatisticsSummary,
        TrendingName,
    },
};

/// Read-only access to the remote name catalog.
///
/// Every method is a pure read; implementations must not retry or cache.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait NameBackend {
    async fn list_names(
        &self,
        query: &ListQuery,
    ) -> Result<NameListing, ApiError>;
    async fn get_name(
        &self,
        id: i64,
    ) -> Result<Name, ApiError>;
    /// Results are ranked by the server; callers must not pass an empty
    /// query.
    async fn search_names(
        &self,
        query: &str,
        limit: Option<u32>,
        gender: Option<Gender>,
    ) -> Result<Vec<Name>, ApiError>;
    /// Position 0 of the result is rank 1.
    async fn get_popular_names(
        &self,
        year: Option<i32>,
        gender: Option<Gender>,
        limit: Option<u32>,
    ) -> Result<Vec<PopularName>, ApiError>;
    async fn get_trending_names(
        &self,
        compare_years: Option<u32>,
        gender: Option<Gender>,
        limit: Option<u32>,
    ) -> Result<Vec<TrendingName>, ApiError>;
    async fn get_statistics_summary(
        &self,
    ) -> Result<StatisticsSummary, ApiError>;
}

use async_trait::async_trait;
use mockall::mock;
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

mock! {
    pub Backend {}

    #[async_trait]
    impl NameBackend for Backend {
        async fn list_names(
            &self,
            query: &ListQuery,
        ) -> Result<NameListing, ApiError>;
        async fn get_name(
            &self,
            id: i64,
        ) -> Result<Name, ApiError>;
        async fn search_names(
            &self,
            query: &str,
            limit: Option<u32>,
            gender: Option<Gender>,
        ) -> Result<Vec<Name>, ApiError>;
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
}

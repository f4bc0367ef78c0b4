use async_trait::async_trait;
use namecore::{
    error::ApiError,
    name::{
        Gender,
        Name,
        NameListing,
    },
    platform::NameBackend,
    query::{
        to_query_string,
        ListQuery,
        PopularQuery,
        SearchQuery,
        TrendingQuery,
    },
    statistics::{
        PopularName,
        PopularNames,
        StatisticsSummary,
        TrendingName,
        TrendingNames,
    },
};
use reqwest::Url;
use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::error::{
    from_reqwest,
    from_status,
};

#[derive(Default)]
pub struct Builder {
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
}

/// HTTP implementation of [`NameBackend`] against the remote catalog API.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    http_client: reqwest::Client,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, val: impl Into<String>) -> Self {
        self.base_url = Some(val.into());
        self
    }

    pub fn http_client(mut self, val: reqwest::Client) -> Self {
        self.http_client = Some(val);
        self
    }

    pub fn build(self) -> Result<Client, ApiError> {
        let raw = self.base_url
            .ok_or_else(|| ApiError::InvalidBaseUrl("no base url provided".to_string()))?;
        let base_url = Url::parse(&raw)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{raw}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(raw));
        }
        Ok(Client {
            base_url,
            http_client: self.http_client.unwrap_or_default(),
        })
    }
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Builder::new()
            .base_url(base_url)
            .build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins the path segments onto the base url, percent-encoding each
    /// segment individually, and appends only the parameters present.
    pub(crate) fn endpoint<Q: Serialize>(
        &self,
        segments: &[&str],
        query: Option<&Q>,
    ) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        let query = query
            .map(to_query_string)
            .transpose()
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?
            .unwrap_or_default();
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        Ok(url)
    }

    async fn request_get_json<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, ApiError> {
        log::trace!("request_get_json: {url}");
        let response = self.http_client.get(url)
            .send()
            .await
            .map_err(from_reqwest)?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("request failed with status {status}");
            return Err(from_status(status));
        }
        let body = response.text()
            .await
            .map_err(from_reqwest)?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl NameBackend for Client {
    async fn list_names(
        &self,
        query: &ListQuery,
    ) -> Result<NameListing, ApiError> {
        let url = self.endpoint(&["api", "names"], Some(query))?;
        self.request_get_json(url).await
    }

    async fn get_name(
        &self,
        id: i64,
    ) -> Result<Name, ApiError> {
        let id = id.to_string();
        let url = self.endpoint::<()>(&["api", "names", &id], None)?;
        self.request_get_json(url).await
    }

    async fn search_names(
        &self,
        query: &str,
        limit: Option<u32>,
        gender: Option<Gender>,
    ) -> Result<Vec<Name>, ApiError> {
        let url = self.endpoint(
            &["api", "names", "search", query],
            Some(&SearchQuery { limit, gender }),
        )?;
        self.request_get_json(url).await
    }

    async fn get_popular_names(
        &self,
        year: Option<i32>,
        gender: Option<Gender>,
        limit: Option<u32>,
    ) -> Result<Vec<PopularName>, ApiError> {
        let url = self.endpoint(
            &["api", "names", "statistics", "popular"],
            Some(&PopularQuery { year, gender, limit }),
        )?;
        Ok(self.request_get_json::<PopularNames>(url).await?.names)
    }

    async fn get_trending_names(
        &self,
        compare_years: Option<u32>,
        gender: Option<Gender>,
        limit: Option<u32>,
    ) -> Result<Vec<TrendingName>, ApiError> {
        let url = self.endpoint(
            &["api", "names", "statistics", "trending"],
            Some(&TrendingQuery { compare_years, gender, limit }),
        )?;
        Ok(self.request_get_json::<TrendingNames>(url).await?.names)
    }

    async fn get_statistics_summary(
        &self,
    ) -> Result<StatisticsSummary, ApiError> {
        let url = self.endpoint::<()>(&["api", "names", "statistics", "summary"], None)?;
        self.request_get_json(url).await
    }
}

//! Typed query parameters for the catalog endpoints.
//!
//! Only parameters that are present are serialized; the server applies
//! its own defaults for anything that is absent (e.g. an absent `gender`
//! means all genders), which differs from sending an empty value.

use serde::Serialize;
use crate::name::Gender;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// Parameters for `GET /api/names`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// Parameters for `GET /api/names/search/{query}`; the term itself is a
/// path segment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// Parameters for `GET /api/names/statistics/popular`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PopularQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Parameters for `GET /api/names/statistics/trending`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn page(page: u32, page_size: u32, gender: Option<Gender>) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            search: None,
            gender,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Encodes the query as an `application/x-www-form-urlencoded` string,
/// which is empty when no parameter is present.
pub fn to_query_string<Q: Serialize>(query: &Q) -> Result<String, serde_urlencoded::ser::Error> {
    serde_urlencoded::to_string(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query() -> anyhow::Result<()> {
        assert_eq!(to_query_string(&ListQuery::default())?, "");
        assert_eq!(
            to_query_string(&ListQuery::page(2, 20, None))?,
            "page=2&pageSize=20",
        );
        assert_eq!(
            to_query_string(&ListQuery::page(1, 20, Some(Gender::Female))
                .with_search("an na"))?,
            "page=1&pageSize=20&search=an+na&gender=F",
        );
        Ok(())
    }

    #[test]
    fn test_statistics_query() -> anyhow::Result<()> {
        assert_eq!(
            to_query_string(&PopularQuery {
                year: Some(2023),
                gender: Some(Gender::Female),
                limit: Some(10),
            })?,
            "year=2023&gender=F&limit=10",
        );
        assert_eq!(
            to_query_string(&PopularQuery {
                limit: Some(10),
                ..Default::default()
            })?,
            "limit=10",
        );
        assert_eq!(
            to_query_string(&TrendingQuery {
                compare_years: Some(5),
                gender: Some(Gender::Male),
                limit: None,
            })?,
            "compareYears=5&gender=M",
        );
        assert_eq!(to_query_string(&SearchQuery::default())?, "");
        Ok(())
    }
}

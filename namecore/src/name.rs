use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

/// A single entry of the catalog.
///
/// Only `id`, `name` and `gender` are interpreted by the client; every
/// other section is optional and passed through to the presentation
/// layer as-is.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patron_saints: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_statistics: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub famous_bearers: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linguistic: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diminutives: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psychology: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerology: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop_culture: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practical: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Value>,
}

/// Pagination metadata of a [`NameListing`]; pages are 1-indexed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_rows: u64,
    pub page: u32,
    pub page_size: u32,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

/// The page envelope returned by the catalog listing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameListing {
    pub list: Vec<Name>,
    pub page_info: PageInfo,
}

mod impls;

pub use impls::ParseGenderError;

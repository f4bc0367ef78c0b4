use std::{
    fmt,
    str::FromStr,
};
use thiserror::Error;
use crate::name::*;

#[derive(Debug, Error, PartialEq)]
#[error("unknown gender `{0}`; expected one of F, M, female, male")]
pub struct ParseGenderError(pub String);

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Female => "F",
            Gender::Male => "M",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "female" => Ok(Gender::Female),
            "m" | "male" => Ok(Gender::Male),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

impl Name {
    /// Whether any of the descriptive sections beyond the headline fields
    /// were supplied.
    pub fn has_details(&self) -> bool {
        self.brief_summary.is_some()
            || self.origin.is_some()
            || self.meaning.is_some()
            || self.etymology.is_some()
            || self.summary.is_some()
    }
}

impl NameListing {
    /// The page to request after this one, if any.
    pub fn next_page(&self) -> Option<u32> {
        if self.page_info.is_last_page {
            return None;
        }
        self.page_info.page.checked_add(1)
    }

    pub fn has_more(&self) -> bool {
        !self.page_info.is_last_page
    }
}

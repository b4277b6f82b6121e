use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

use crate::core::parsing::{parse_experience_years, parse_response_time_hours};

/// Errors raised when turning user-facing labels into closed enumerations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown availability: {0}")]
    UnknownAvailability(String),

    #[error("Unknown experience level: {0}")]
    UnknownExperienceLevel(String),
}

/// Lowercases a label and strips separators so "Full-time", "full time"
/// and "FULL_TIME" compare equal.
pub(crate) fn normalize_label(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Catalog identifier: either numeric or free text
///
/// Numeric ids order before text ids; within a kind the natural order applies.
/// Text in canonical decimal form is stored as numeric, so `"2"` and `2` are the
/// same id. Any other spelling stays text and keeps its exact form: `"007"` is
/// not `7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ProfileId {
    Numeric(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProfileId {
    Numeric(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for ProfileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawProfileId::deserialize(deserializer)? {
            RawProfileId::Numeric(id) => ProfileId::Numeric(id),
            RawProfileId::Text(id) => ProfileId::from(id.as_str()),
        })
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Numeric(id) => write!(f, "{}", id),
            ProfileId::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ProfileId {
    fn from(value: u64) -> Self {
        ProfileId::Numeric(value)
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        match value.parse::<u64>() {
            Ok(id) if id.to_string() == value => ProfileId::Numeric(id),
            _ => ProfileId::Text(value.to_string()),
        }
    }
}

/// When a freelancer can start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Availability {
    Immediate,
    FullTime,
    PartTime,
    Contract,
}

impl Availability {
    pub const ALL: [Availability; 4] = [
        Availability::Immediate,
        Availability::FullTime,
        Availability::PartTime,
        Availability::Contract,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Availability::Immediate => "Immediate",
            Availability::FullTime => "Full-time",
            Availability::PartTime => "Part-time",
            Availability::Contract => "Contract",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Availability {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "immediate" => Ok(Availability::Immediate),
            "fulltime" => Ok(Availability::FullTime),
            "parttime" => Ok(Availability::PartTime),
            "contract" => Ok(Availability::Contract),
            _ => Err(ParseError::UnknownAvailability(s.to_string())),
        }
    }
}

impl TryFrom<String> for Availability {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Availability> for &'static str {
    fn from(value: Availability) -> Self {
        value.label()
    }
}

/// Freelancer profile as supplied by the catalog
///
/// `experience` and `response_time` keep the catalog's free text; use
/// [`Profile::experience_years`] and [`Profile::response_time_hours`] for
/// the numeric values filtering and sorting work with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub location: String,
    #[validate(range(min = 0.0))]
    pub hourly_rate: f64,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub completed_jobs: u32,
    #[validate(length(min = 1))]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    pub availability: Availability,
    #[serde(default)]
    pub response_time: String,
    #[serde(default)]
    pub verified: bool,
    pub member_since: i32,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Profile {
    /// Years of experience; unparsable text counts as 0
    pub fn experience_years(&self) -> u32 {
        parse_experience_years(&self.experience)
    }

    /// Typical response time in hours; `None` when the text is unparsable
    pub fn response_time_hours(&self) -> Option<f64> {
        parse_response_time_hours(&self.response_time)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// Ordering applied to the filtered result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SortKey {
    #[default]
    Rating,
    Rate,
    Experience,
    Jobs,
    ResponseTime,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Rate => "rate",
            SortKey::Experience => "experience",
            SortKey::Jobs => "jobs",
            SortKey::ResponseTime => "responseTime",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "rating" => Ok(SortKey::Rating),
            "rate" => Ok(SortKey::Rate),
            "experience" => Ok(SortKey::Experience),
            "jobs" => Ok(SortKey::Jobs),
            "responsetime" => Ok(SortKey::ResponseTime),
            _ => Err(ParseError::UnknownSortKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for SortKey {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortKey> for &'static str {
    fn from(value: SortKey) -> Self {
        value.as_str()
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::models::domain::{normalize_label, Availability, ParseError, SortKey};

pub const DEFAULT_MIN_RATE: f64 = 20.0;
pub const DEFAULT_MAX_RATE: f64 = 200.0;
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Inclusive hourly-rate bounds
///
/// `min > max` is accepted and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
}

impl RateRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.min && rate <= self.max
    }
}

impl Default for RateRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_RATE,
            max: DEFAULT_MAX_RATE,
        }
    }
}

/// Availability constraint: everything, or one specific value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityFilter {
    #[default]
    All,
    Only(Availability),
}

impl AvailabilityFilter {
    #[inline]
    pub fn accepts(self, availability: Availability) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Only(wanted) => wanted == availability,
        }
    }
}

impl FromStr for AvailabilityFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalize_label(s) == "all" {
            return Ok(AvailabilityFilter::All);
        }
        s.parse().map(AvailabilityFilter::Only)
    }
}

/// Experience band derived from parsed years
///
/// Bands are contiguous: entry is under 2 years, mid is 2 up to 5,
/// senior is 5 and above.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    All,
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// The band a given number of years falls into (never `All`)
    pub fn for_years(years: u32) -> Self {
        match years {
            0..=1 => ExperienceLevel::Entry,
            2..=4 => ExperienceLevel::Mid,
            _ => ExperienceLevel::Senior,
        }
    }

    #[inline]
    pub fn accepts(self, years: u32) -> bool {
        self == ExperienceLevel::All || self == Self::for_years(years)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::All => "all",
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "all" => Ok(ExperienceLevel::All),
            "entry" => Ok(ExperienceLevel::Entry),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            _ => Err(ParseError::UnknownExperienceLevel(s.to_string())),
        }
    }
}

/// Complete set of user-selected filter constraints
///
/// Replaced wholesale on every interaction; the `with_*` helpers return a
/// new value rather than mutating.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub location_text: String,
    pub selected_skills: BTreeSet<String>,
    pub rate_range: RateRange,
    pub availability: AvailabilityFilter,
    pub experience_level: ExperienceLevel,
}

impl FilterCriteria {
    /// True iff any field differs from its default; whitespace-only text
    /// places no constraint and does not count
    pub fn has_active_filters(&self) -> bool {
        !self.search_text.trim().is_empty()
            || !self.location_text.trim().is_empty()
            || !self.selected_skills.is_empty()
            || self.rate_range != RateRange::default()
            || self.availability != AvailabilityFilter::All
            || self.experience_level != ExperienceLevel::All
    }

    pub fn with_search_text(self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..self
        }
    }

    pub fn with_location_text(self, text: impl Into<String>) -> Self {
        Self {
            location_text: text.into(),
            ..self
        }
    }

    /// Add the skill if absent, remove it if present
    pub fn with_skill_toggled(mut self, skill: impl Into<String>) -> Self {
        let skill = skill.into();
        if !self.selected_skills.remove(&skill) {
            self.selected_skills.insert(skill);
        }
        self
    }

    pub fn with_rate_range(self, min: f64, max: f64) -> Self {
        Self {
            rate_range: RateRange::new(min, max),
            ..self
        }
    }

    pub fn with_availability(self, availability: AvailabilityFilter) -> Self {
        Self {
            availability,
            ..self
        }
    }

    pub fn with_experience_level(self, experience_level: ExperienceLevel) -> Self {
        Self {
            experience_level,
            ..self
        }
    }
}

/// Fixed page size plus the 1-based page currently requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub page_size: usize,
    pub current_page: usize,
}

impl PaginationState {
    pub fn new(page_size: usize, current_page: usize) -> Self {
        Self {
            page_size,
            current_page: current_page.max(1),
        }
    }

    pub fn first_page(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self::new(self.page_size, page)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

/// Everything a presentation layer holds between interactions
///
/// A new filter submission or a reset sends the user back to page 1;
/// changing the sort key or page does not touch the criteria.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub criteria: FilterCriteria,
    pub sort_key: SortKey,
    pub pagination: PaginationState,
}

impl SearchState {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: PaginationState::new(page_size, 1),
            ..Self::default()
        }
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.has_active_filters()
    }

    /// Default criteria and page 1; sort key and page size are kept
    pub fn cleared(&self) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort_key: self.sort_key,
            pagination: self.pagination.first_page(),
        }
    }

    pub fn with_criteria(&self, criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            sort_key: self.sort_key,
            pagination: self.pagination.first_page(),
        }
    }

    pub fn with_sort_key(&self, sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            pagination: self.pagination.with_page(page),
            ..self.clone()
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::domain::Profile;

/// Profile as rendered in a result list, with the saved flag merged in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub is_saved: bool,
}

/// Number of filtered profiles listing a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFacet {
    pub skill: String,
    pub count: usize,
}

/// Summary of the whole filtered set, independent of the current page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultStats {
    pub matched: usize,
    pub average_rating: Option<f64>,
    pub average_hourly_rate: Option<f64>,
    pub min_hourly_rate: Option<f64>,
    pub max_hourly_rate: Option<f64>,
    pub verified_count: usize,
    pub available_now: usize,
    pub top_skills: Vec<SkillFacet>,
}

/// Response of a discovery query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub items: Vec<ProfileView>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub stats: ResultStats,
}

impl QueryResult {
    /// Number of profiles that passed the filters, across all pages
    pub fn result_count(&self) -> usize {
        self.total_count
    }
}

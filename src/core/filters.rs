use crate::models::{FilterCriteria, Profile};

/// Case-insensitive substring test; `needle` must already be lowercase
#[inline]
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Check the free-text search against name, title, tagline and skills
#[inline]
pub fn matches_search_text(profile: &Profile, search_text: &str) -> bool {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    contains_folded(&profile.name, &needle)
        || contains_folded(&profile.title, &needle)
        || contains_folded(&profile.tagline, &needle)
        || profile.skills.iter().any(|skill| contains_folded(skill, &needle))
}

/// Check the location text against the profile's location
#[inline]
pub fn matches_location(profile: &Profile, location_text: &str) -> bool {
    let needle = location_text.trim().to_lowercase();
    needle.is_empty() || contains_folded(&profile.location, &needle)
}

/// Decide whether one profile satisfies every active constraint
///
/// Empty text fields and an empty skill selection place no constraint.
/// Never fails: a criteria value that cannot match anything (such as an
/// inverted rate range) just rejects every profile.
#[inline]
pub fn matches(profile: &Profile, criteria: &FilterCriteria) -> bool {
    if !matches_search_text(profile, &criteria.search_text) {
        return false;
    }

    if !matches_location(profile, &criteria.location_text) {
        return false;
    }

    // At least one shared skill
    if !criteria.selected_skills.is_empty()
        && !profile
            .skills
            .iter()
            .any(|skill| criteria.selected_skills.contains(skill))
    {
        return false;
    }

    if !criteria.rate_range.contains(profile.hourly_rate) {
        return false;
    }

    if !criteria.availability.accepts(profile.availability) {
        return false;
    }

    criteria.experience_level.accepts(profile.experience_years())
}

/// Keep the profiles that satisfy `criteria`, preserving catalog order
pub fn filter_profiles<'a>(catalog: &'a [Profile], criteria: &FilterCriteria) -> Vec<&'a Profile> {
    catalog
        .iter()
        .filter(|profile| matches(profile, criteria))
        .collect()
}

use std::cmp::Ordering;

use crate::models::{Profile, SortKey};

/// Ascending comparison where `None` sorts after every value
#[inline]
fn compare_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order two profiles by `sort_key` alone
///
/// | key          | direction                         |
/// |--------------|-----------------------------------|
/// | rating       | descending                        |
/// | rate         | ascending                         |
/// | experience   | descending                        |
/// | jobs         | descending                        |
/// | responseTime | ascending, unparsable values last |
#[inline]
pub fn compare_by_key(a: &Profile, b: &Profile, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Rate => a.hourly_rate.total_cmp(&b.hourly_rate),
        SortKey::Experience => b.experience_years().cmp(&a.experience_years()),
        SortKey::Jobs => b.completed_jobs.cmp(&a.completed_jobs),
        SortKey::ResponseTime => {
            compare_missing_last(a.response_time_hours(), b.response_time_hours())
        }
    }
}

/// Total order used for result lists: the sort key, then id ascending
#[inline]
pub fn compare(a: &Profile, b: &Profile, sort_key: SortKey) -> Ordering {
    compare_by_key(a, b, sort_key).then_with(|| a.id.cmp(&b.id))
}

/// Sort a filtered list in place
pub fn sort_profiles(profiles: &mut [&Profile], sort_key: SortKey) {
    profiles.sort_by(|a, b| compare(a, b, sort_key));
}

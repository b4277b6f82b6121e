use std::collections::BTreeMap;

use crate::models::{Availability, Profile, ResultStats, SkillFacet};

/// Count skills across `profiles`, most common first, then by name
pub fn skill_facets(profiles: &[&Profile], limit: usize) -> Vec<SkillFacet> {
    let mut counts = BTreeMap::<&str, usize>::new();
    for profile in profiles {
        for skill in &profile.skills {
            *counts.entry(skill.as_str()).or_default() += 1;
        }
    }

    let mut facets: Vec<SkillFacet> = counts
        .into_iter()
        .map(|(skill, count)| SkillFacet {
            skill: skill.to_string(),
            count,
        })
        .collect();

    // BTreeMap already yields names in order, so a stable sort on count suffices
    facets.sort_by(|a, b| b.count.cmp(&a.count));
    facets.truncate(limit);
    facets
}

/// Aggregate figures over the filtered set
pub fn summarize(profiles: &[&Profile], facet_limit: usize) -> ResultStats {
    let matched = profiles.len();
    if matched == 0 {
        return ResultStats::default();
    }

    let count = matched as f64;
    let rating_sum: f64 = profiles.iter().map(|p| p.rating).sum();
    let rate_sum: f64 = profiles.iter().map(|p| p.hourly_rate).sum();

    let min_rate = profiles
        .iter()
        .map(|p| p.hourly_rate)
        .min_by(f64::total_cmp);
    let max_rate = profiles
        .iter()
        .map(|p| p.hourly_rate)
        .max_by(f64::total_cmp);

    ResultStats {
        matched,
        average_rating: Some(rating_sum / count),
        average_hourly_rate: Some(rate_sum / count),
        min_hourly_rate: min_rate,
        max_hourly_rate: max_rate,
        verified_count: profiles.iter().filter(|p| p.verified).count(),
        available_now: profiles
            .iter()
            .filter(|p| p.availability == Availability::Immediate)
            .count(),
        top_skills: skill_facets(profiles, facet_limit),
    }
}

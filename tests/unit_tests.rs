// Unit tests for Talent Discovery

use std::cmp::Ordering;
use talent_discovery::core::{
    filters::{matches, matches_search_text},
    pagination::paginate,
    parsing::{parse_experience_years, parse_response_time_hours},
    sorting::compare,
};
use talent_discovery::models::{
    Availability, AvailabilityFilter, ExperienceLevel, FilterCriteria, Profile, ProfileId, SortKey,
};

fn create_profile(id: u64, experience: &str, response_time: &str) -> Profile {
    Profile {
        id: ProfileId::Numeric(id),
        name: "Test Freelancer".to_string(),
        title: "Backend Engineer".to_string(),
        tagline: "APIs and data pipelines".to_string(),
        location: "Berlin, Germany".to_string(),
        hourly_rate: 90.0,
        rating: 4.8,
        review_count: 20,
        completed_jobs: 31,
        skills: vec!["Go".to_string(), "PostgreSQL".to_string()],
        experience: experience.to_string(),
        availability: Availability::PartTime,
        response_time: response_time.to_string(),
        verified: true,
        member_since: 2019,
        avatar_url: None,
        languages: vec!["German".to_string()],
    }
}

#[test]
fn test_profile_uses_shared_parsing() {
    let profile = create_profile(1, "7 years", "< 5 hours");

    assert_eq!(profile.experience_years(), parse_experience_years(&profile.experience));
    assert_eq!(profile.response_time_hours(), parse_response_time_hours(&profile.response_time));
    assert_eq!(profile.experience_years(), 7);
    assert_eq!(profile.response_time_hours(), Some(5.0));
}

#[test]
fn test_unparsable_experience_is_entry_level() {
    let profile = create_profile(1, "lots", "< 5 hours");
    assert_eq!(profile.experience_years(), 0);

    let entry = FilterCriteria::default().with_experience_level(ExperienceLevel::Entry);
    assert!(matches(&profile, &entry));
}

#[test]
fn test_search_is_case_insensitive() {
    let profile = create_profile(1, "7 years", "< 5 hours");

    assert!(matches_search_text(&profile, "BACKEND"));
    assert!(matches_search_text(&profile, "postgres"));
    assert!(matches_search_text(&profile, "  pipelines  "));
    assert!(!matches_search_text(&profile, "frontend"));
}

#[test]
fn test_all_rules_must_hold() {
    let profile = create_profile(1, "7 years", "< 5 hours");

    let passing = FilterCriteria::default()
        .with_search_text("engineer")
        .with_location_text("germany")
        .with_skill_toggled("Go")
        .with_rate_range(50.0, 100.0)
        .with_availability(AvailabilityFilter::Only(Availability::PartTime))
        .with_experience_level(ExperienceLevel::Senior);
    assert!(matches(&profile, &passing));

    // Changing any single rule rejects the profile
    assert!(!matches(&profile, &passing.clone().with_location_text("Paris")));
    assert!(!matches(&profile, &passing.clone().with_rate_range(95.0, 100.0)));
    assert!(!matches(&profile, &passing.clone().with_experience_level(ExperienceLevel::Mid)));
    assert!(!matches(
        &profile,
        &passing.with_availability(AvailabilityFilter::Only(Availability::Immediate))
    ));
}

#[test]
fn test_response_time_sort_with_unparsable() {
    let fast = create_profile(2, "3 years", "< 1 hour");
    let unknown = create_profile(1, "3 years", "whenever");

    assert_eq!(compare(&fast, &unknown, SortKey::ResponseTime), Ordering::Less);
    assert_eq!(compare(&unknown, &fast, SortKey::ResponseTime), Ordering::Greater);
}

#[test]
fn test_compare_is_antisymmetric() {
    let a = create_profile(1, "3 years", "< 1 hour");
    let b = create_profile(2, "9 years", "< 8 hours");

    for key in [
        SortKey::Rating,
        SortKey::Rate,
        SortKey::Experience,
        SortKey::Jobs,
        SortKey::ResponseTime,
    ] {
        assert_eq!(compare(&a, &b, key), compare(&b, &a, key).reverse());
        assert_eq!(compare(&a, &a, key), Ordering::Equal);
    }
}

#[test]
fn test_paginate_reports_metadata() {
    let list: Vec<u32> = (1..=9).collect();
    let page = paginate(&list, 4, 2);

    assert_eq!(page.items, vec![5, 6, 7, 8]);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_count, 9);
}

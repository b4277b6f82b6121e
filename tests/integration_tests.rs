// Integration tests for Talent Discovery, run against the reference catalog

use talent_discovery::core::filters::filter_profiles;
use talent_discovery::models::{
    Availability, AvailabilityFilter, ExperienceLevel, FilterCriteria, PaginationState, ProfileId,
    QueryResult, SearchState, SortKey,
};
use talent_discovery::{BookmarkSet, Catalog, DiscoveryEngine};

fn reference_catalog() -> Catalog {
    Catalog::from_json_str(include_str!("../data/catalog.json")).unwrap()
}

fn ids(result: &QueryResult) -> Vec<ProfileId> {
    result.items.iter().map(|v| v.profile.id.clone()).collect()
}

fn numeric(ids: &[u64]) -> Vec<ProfileId> {
    ids.iter().copied().map(ProfileId::Numeric).collect()
}

#[test]
fn test_skill_filter_sorted_by_rating() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();
    let criteria = FilterCriteria::default().with_skill_toggled("React");

    let result = engine.query(
        catalog.profiles(),
        &criteria,
        SortKey::Rating,
        PaginationState::new(8, 1),
        &BookmarkSet::new(),
    );

    assert!(result.items.iter().all(|v| v.profile.has_skill("React")));
    // Sarah (4.9) before Sofia (4.85); "React Native" is a different skill
    assert_eq!(ids(&result), numeric(&[1, 7]));
}

#[test]
fn test_rate_sort_first_page() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();

    let result = engine.query(
        catalog.profiles(),
        &FilterCriteria::default(),
        SortKey::Rate,
        PaginationState::new(4, 1),
        &BookmarkSet::new(),
    );

    assert_eq!(result.total_pages, 2);
    assert_eq!(result.total_count, 8);
    assert_eq!(ids(&result), numeric(&[6, 7, 2, 4]));

    let rates: Vec<f64> = result.items.iter().map(|v| v.profile.hourly_rate).collect();
    assert_eq!(rates, vec![55.0, 70.0, 75.0, 80.0]);
}

#[test]
fn test_senior_boundary() {
    let catalog = reference_catalog();
    let senior = FilterCriteria::default().with_experience_level(ExperienceLevel::Senior);
    let filtered = filter_profiles(catalog.profiles(), &senior);

    // David Kim has exactly 5 years, James Wilson has 4
    assert!(filtered.iter().any(|p| p.id == ProfileId::Numeric(4)));
    assert!(!filtered.iter().any(|p| p.id == ProfileId::Numeric(6)));
}

#[test]
fn test_out_of_range_page() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();
    let criteria = FilterCriteria::default().with_rate_range(20.0, 75.0);

    let result = engine.query(
        catalog.profiles(),
        &criteria,
        SortKey::Rating,
        PaginationState::new(8, 99),
        &BookmarkSet::new(),
    );

    assert_eq!(result.total_count, 3);
    assert!(result.items.is_empty());
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.page, 99);
}

#[test]
fn test_bookmark_toggle_marks_saved() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();
    let state = SearchState::default();
    let mut bookmarks = BookmarkSet::new();

    let before = engine.query_state(catalog.profiles(), &state, &bookmarks);
    bookmarks.toggle(ProfileId::Numeric(2));
    let after = engine.query_state(catalog.profiles(), &state, &bookmarks);

    let saved: Vec<_> = after
        .items
        .iter()
        .filter(|v| v.is_saved)
        .map(|v| v.profile.id.clone())
        .collect();
    assert_eq!(saved, numeric(&[2]));

    // Toggling changes nothing but the flag
    assert_eq!(before.result_count(), after.result_count());
    assert_eq!(before.total_pages, after.total_pages);
    assert_eq!(ids(&before), ids(&after));
    assert_eq!(before.stats, after.stats);
}

#[test]
fn test_clear_resets_state() {
    let state = SearchState::new(8)
        .with_criteria(FilterCriteria::default())
        .with_page(3)
        .cleared();

    assert!(!state.has_active_filters());
    assert_eq!(state.pagination.current_page, 1);
}

#[test]
fn test_query_is_idempotent() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();
    let bookmarks: BookmarkSet = [ProfileId::Numeric(3), ProfileId::Numeric(5)]
        .into_iter()
        .collect();
    let state = SearchState::new(3)
        .with_criteria(FilterCriteria::default().with_rate_range(60.0, 120.0))
        .with_sort_key(SortKey::ResponseTime);

    let first = engine.query_state(catalog.profiles(), &state, &bookmarks);
    let second = engine.query_state(catalog.profiles(), &state, &bookmarks);

    assert_eq!(first, second);
}

#[test]
fn test_filter_monotonicity() {
    let catalog = reference_catalog();
    let loose = FilterCriteria::default().with_search_text("developer");
    let strict = loose.clone().with_location_text("CA");

    let loose_ids: Vec<_> = filter_profiles(catalog.profiles(), &loose)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    let strict_ids: Vec<_> = filter_profiles(catalog.profiles(), &strict)
        .iter()
        .map(|p| p.id.clone())
        .collect();

    assert!(strict_ids.len() < loose_ids.len());
    assert!(strict_ids.iter().all(|id| loose_ids.contains(id)));

    let narrowed = FilterCriteria::default()
        .with_skill_toggled("React")
        .with_experience_level(ExperienceLevel::Senior);
    let widened = FilterCriteria::default().with_skill_toggled("React");
    let narrowed_count = filter_profiles(catalog.profiles(), &narrowed).len();
    let widened_count = filter_profiles(catalog.profiles(), &widened).len();
    assert!(narrowed_count <= widened_count);
}

#[test]
fn test_rating_sort_correctness() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();

    let result = engine.query(
        catalog.profiles(),
        &FilterCriteria::default(),
        SortKey::Rating,
        PaginationState::new(8, 1),
        &BookmarkSet::new(),
    );

    for pair in result.items.windows(2) {
        assert!(
            pair[0].profile.rating >= pair[1].profile.rating,
            "Results not sorted by rating"
        );
    }
    assert_eq!(result.items[0].profile.id, ProfileId::Numeric(3));
}

#[test]
fn test_pagination_coverage() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();
    let bookmarks = BookmarkSet::new();
    let state = SearchState::new(3).with_sort_key(SortKey::Jobs);

    let everything = SearchState::new(100).with_sort_key(SortKey::Jobs);

    let full = engine.query_state(catalog.profiles(), &everything, &bookmarks);
    let first = engine.query_state(catalog.profiles(), &state, &bookmarks);

    let joined: Vec<ProfileId> = (1..=first.total_pages)
        .flat_map(|page| {
            let state = state.with_page(page);
            ids(&engine.query_state(catalog.profiles(), &state, &bookmarks))
        })
        .collect();

    assert_eq!(first.total_pages, 3);
    assert_eq!(joined, ids(&full));
}

#[test]
fn test_default_neutrality() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();
    let state = SearchState::new(catalog.len());

    let result = engine.query_state(catalog.profiles(), &state, &BookmarkSet::new());

    assert!(!state.has_active_filters());
    assert_eq!(result.total_count, catalog.len());
    assert_eq!(result.items.len(), catalog.len());
}

#[test]
fn test_response_time_sort_puts_unparsable_last() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();

    let result = engine.query(
        catalog.profiles(),
        &FilterCriteria::default(),
        SortKey::ResponseTime,
        PaginationState::new(8, 1),
        &BookmarkSet::new(),
    );

    // Elena and Aisha tie at "< 1 hour"; id breaks the tie. Alex's "Varies" is last.
    let order = ids(&result);
    assert_eq!(&order[..2], &numeric(&[3, 5])[..]);
    assert_eq!(order.last(), Some(&ProfileId::Numeric(8)));
}

#[test]
fn test_stats_over_filtered_set() {
    let engine = DiscoveryEngine::default();
    let catalog = reference_catalog();
    let criteria = FilterCriteria::default()
        .with_availability(AvailabilityFilter::Only(Availability::Immediate));

    let result = engine.query(
        catalog.profiles(),
        &criteria,
        SortKey::Rating,
        PaginationState::new(1, 1),
        &BookmarkSet::new(),
    );

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.stats.matched, 2);
    assert_eq!(result.stats.available_now, 2);
    assert_eq!(result.stats.verified_count, 2);
    assert_eq!(result.stats.min_hourly_rate, Some(85.0));
    assert_eq!(result.stats.max_hourly_rate, Some(110.0));
    assert_eq!(result.stats.average_hourly_rate, Some(97.5));
}

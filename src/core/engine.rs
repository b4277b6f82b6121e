use crate::core::{
    filters::filter_profiles, pagination::paginate, sorting::sort_profiles, stats::summarize,
};
use crate::models::{
    FilterCriteria, PaginationState, Profile, ProfileView, QueryResult, SearchState, SortKey,
};
use crate::services::BookmarkSet;

pub const DEFAULT_FACET_LIMIT: usize = 10;

/// Tunables that do not change between queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum number of skill facets reported in the stats
    pub facet_limit: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            facet_limit: DEFAULT_FACET_LIMIT,
        }
    }
}

/// Single entry point for the presentation layer
///
/// # Pipeline
/// 1. Filter the catalog with the criteria predicate
/// 2. Sort the filtered set by the sort key (id breaks ties)
/// 3. Slice the sorted set into the requested page
/// 4. Merge bookmark flags into the page items
///
/// Every call is a pure function of its inputs: identical arguments always
/// give an identical result and the catalog is never modified.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryEngine {
    options: EngineOptions,
}

impl DiscoveryEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Run the filter, sort, paginate and bookmark pipeline
    ///
    /// # Arguments
    /// * `catalog` - All candidate profiles
    /// * `criteria` - Active filter constraints
    /// * `sort_key` - Ordering for the filtered set
    /// * `pagination` - Page size and requested page
    /// * `bookmarks` - Saved ids, used only for the `is_saved` flag
    pub fn query(
        &self,
        catalog: &[Profile],
        criteria: &FilterCriteria,
        sort_key: SortKey,
        pagination: PaginationState,
        bookmarks: &BookmarkSet,
    ) -> QueryResult {
        // Stage 1: filter
        let mut filtered = filter_profiles(catalog, criteria);

        tracing::debug!(
            "Filtered {} of {} profiles (active filters: {})",
            filtered.len(),
            catalog.len(),
            criteria.has_active_filters()
        );

        // Stage 2: sort the filtered set only
        sort_profiles(&mut filtered, sort_key);

        let stats = summarize(&filtered, self.options.facet_limit);

        // Stage 3: paginate the sorted set only
        let page = paginate(&filtered, pagination.page_size, pagination.current_page);

        if page.items.is_empty() && page.total_count > 0 {
            tracing::debug!(
                "Page {} is past the end ({} pages)",
                page.page,
                page.total_pages
            );
        }

        // Stage 4: bookmark overlay
        let page = page.map(|profile| ProfileView {
            profile: profile.clone(),
            is_saved: bookmarks.is_saved(&profile.id),
        });

        QueryResult {
            items: page.items,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            total_count: page.total_count,
            stats,
        }
    }

    /// [`query`](Self::query) driven by a whole [`SearchState`]
    pub fn query_state(
        &self,
        catalog: &[Profile],
        state: &SearchState,
        bookmarks: &BookmarkSet,
    ) -> QueryResult {
        self.query(
            catalog,
            &state.criteria,
            state.sort_key,
            state.pagination,
            bookmarks,
        )
    }
}

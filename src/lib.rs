//! Talent Discovery - profile search engine for a freelance marketplace
//!
//! This library takes a catalog of freelancer profiles and the criteria a
//! user picked, and produces a filtered, sorted, paginated result set with
//! a saved/bookmark overlay.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{DiscoveryEngine, EngineOptions, Page};
pub use models::{
    Availability, AvailabilityFilter, ExperienceLevel, FilterCriteria, PaginationState, Profile,
    ProfileId, ProfileView, QueryResult, SearchState, SortKey,
};
pub use services::{BookmarkSet, Catalog, CatalogError, SharedBookmarks};

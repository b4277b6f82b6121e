// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod pagination;
pub mod parsing;
pub mod sorting;
pub mod stats;

pub use engine::{DiscoveryEngine, EngineOptions};
pub use filters::{filter_profiles, matches};
pub use pagination::{paginate, Page};
pub use parsing::{parse_experience_years, parse_response_time_hours};
pub use sorting::{compare, sort_profiles};
pub use stats::summarize;

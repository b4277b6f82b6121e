// Model exports
pub mod criteria;
pub mod domain;
pub mod responses;

pub use criteria::{
    AvailabilityFilter, ExperienceLevel, FilterCriteria, PaginationState, RateRange, SearchState,
};
pub use domain::{Availability, ParseError, Profile, ProfileId, SortKey};
pub use responses::{ProfileView, QueryResult, ResultStats, SkillFacet};

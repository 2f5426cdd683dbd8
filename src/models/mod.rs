// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetBounds, BudgetPreference, DimensionScores, DimensionWeights, Event, EventMatch,
    EventStatus, EventType, PreferenceLevel, PreferenceProfile, Tag, TagKind,
};
pub use requests::RankSuggestionsRequest;
pub use responses::{ErrorResponse, HealthResponse, RankSuggestionsResponse};

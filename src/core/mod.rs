// Core algorithm exports
pub mod engine;
pub mod keywords;
pub mod paginate;
pub mod scoring;

pub use engine::{RankError, RankedPage, RankingEngine};
pub use paginate::paginate;
pub use scoring::{
    budget_score, combine_scores, event_type_score, food_preference_score, travel_style_score,
    NEUTRAL_SCORE,
};

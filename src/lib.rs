//! Gatherly Rank - Preference-based event ranking service for the Gatherly events app
//!
//! This library computes per-event match scores from a user's stored
//! preference profile (travel styles, food preferences, budget ranges) and
//! returns a ranked, paginated list of event suggestions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{RankError, RankedPage, RankingEngine};
pub use models::{
    DimensionScores, DimensionWeights, Event, EventMatch, PreferenceProfile,
    RankSuggestionsRequest, RankSuggestionsResponse,
};
pub use services::{EventCatalog, MemoryStore, PreferenceStore, StoreError};

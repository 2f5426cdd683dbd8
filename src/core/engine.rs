use crate::core::paginate::paginate;
use crate::core::scoring::{
    budget_score, combine_scores, event_type_score, food_preference_score, travel_style_score,
};
use crate::models::{DimensionScores, DimensionWeights, Event, EventMatch, PreferenceProfile};
use crate::services::{EventCatalog, PreferenceStore, StoreError};
use thiserror::Error;

/// Errors the engine reports to its caller
#[derive(Debug, Error)]
pub enum RankError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dependency unavailable: {0}")]
    DependencyUnavailable(String),
}

/// One page of ranked suggestions plus the full post-filter candidate
/// count (independent of pagination)
#[derive(Debug)]
pub struct RankedPage {
    pub results: Vec<EventMatch>,
    pub total_candidates: usize,
}

/// Ranking orchestrator: loads the profile and candidates, scores every
/// candidate on all four dimensions, combines, sorts, and paginates.
///
/// # Pipeline stages
/// 1. Argument validation (before any loading)
/// 2. Profile load (missing profile degrades to all-neutral)
/// 3. Candidate load
/// 4. Per-candidate dimension scoring and weighted combination
/// 5. Ranking: descending combined score, ties broken by ascending
///    event id so results are reproducible
/// 6. Pagination
#[derive(Debug, Clone)]
pub struct RankingEngine {
    weights: DimensionWeights,
}

impl RankingEngine {
    pub fn new(weights: DimensionWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: DimensionWeights::default(),
        }
    }

    /// Rank event suggestions for a user.
    ///
    /// A user without any stored preferences still gets a fully ranked
    /// list (all dimensions neutral); only bad arguments or an
    /// unavailable store/catalog fail the request.
    pub fn rank(
        &self,
        store: &dyn PreferenceStore,
        catalog: &dyn EventCatalog,
        user_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<RankedPage, RankError> {
        if user_id.trim().is_empty() {
            return Err(RankError::InvalidArgument("userId must not be empty".into()));
        }
        if page < 1 {
            return Err(RankError::InvalidArgument("page must be >= 1".into()));
        }
        if limit < 1 {
            return Err(RankError::InvalidArgument("limit must be >= 1".into()));
        }

        let profile = match store.load_profile(user_id) {
            Ok(profile) => profile,
            Err(StoreError::NotFound(_)) => {
                tracing::debug!("no stored preferences for {}, ranking all-neutral", user_id);
                PreferenceProfile::neutral(user_id)
            }
            Err(e) => return Err(RankError::DependencyUnavailable(e.to_string())),
        };

        let candidates = catalog
            .load_candidates()
            .map_err(|e| RankError::DependencyUnavailable(e.to_string()))?;
        let total_candidates = candidates.len();

        let mut scored: Vec<EventMatch> = candidates
            .into_iter()
            .map(|event| self.score_event(&profile, event))
            .collect();

        scored.sort_by(|a, b| {
            b.combined_score
                .partial_cmp(&a.combined_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.event.id.cmp(&b.event.id))
        });

        Ok(RankedPage {
            results: paginate(scored, page, limit),
            total_candidates,
        })
    }

    /// Score one candidate on all dimensions and assemble the match record
    fn score_event(&self, profile: &PreferenceProfile, event: Event) -> EventMatch {
        let (travel, travel_tags) = travel_style_score(&profile.travel_styles, &event.tags);
        let (food, food_tags) = food_preference_score(&profile.food_preferences, &event.tags);
        let budget = budget_score(
            profile.budget.as_ref(),
            event.event_type,
            event.budget_min,
            event.budget_max,
        );
        let event_type = event_type_score(profile.budget.as_ref(), event.event_type);

        let scores = DimensionScores {
            travel,
            food,
            budget,
            event_type,
        };
        let combined_score = combine_scores(&scores, &self.weights);

        let mut matched_tags = travel_tags;
        matched_tags.extend(food_tags);

        EventMatch {
            event,
            combined_score,
            scores,
            matched_tags,
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

use crate::core::keywords::{matching_food_categories, style_keywords};
use crate::models::{
    BudgetPreference, DimensionScores, DimensionWeights, EventType, PreferenceLevel, Tag, TagKind,
};
use std::collections::HashMap;

/// Score returned for any dimension the user has no recorded signal in.
/// Absence of data never penalizes or favors an event.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Sentinel upper bound when a user recorded only a minimum budget
const OPEN_USER_MAX: f64 = 1_000_000.0;

/// Fallback user range width when the recorded range has zero width
const DEFAULT_RANGE_WIDTH: f64 = 10_000.0;

/// Round to 2 decimal places
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Travel-style dimension score (0-100) with the tags that produced hits.
///
/// For every selected style present in the keyword table, one check is
/// performed; each case-insensitive keyword-substring hit against any tag
/// name counts as one hit. Score = (hits / checks) * 100, clamped to 100.
/// No checks (unrecognized styles only, or an event without tags) yields
/// the neutral score. Raw scores below 50 are damped halfway back toward
/// 50 to soften partial mismatches; scores above 50 are never amplified.
pub fn travel_style_score(styles: &[String], tags: &[Tag]) -> (f64, Vec<Tag>) {
    if styles.is_empty() || tags.is_empty() {
        return (NEUTRAL_SCORE, Vec::new());
    }

    let tag_names: Vec<String> = tags.iter().map(|t| t.name.to_lowercase()).collect();

    let mut checks = 0u32;
    let mut hits = 0u32;
    let mut matched = Vec::new();

    for style in styles {
        let Some(keywords) = style_keywords(style) else {
            continue;
        };
        checks += 1;

        for keyword in keywords {
            for (tag, name) in tags.iter().zip(&tag_names) {
                if name.contains(keyword) {
                    hits += 1;
                    matched.push(tag.clone());
                }
            }
        }
    }

    if checks == 0 {
        return (NEUTRAL_SCORE, matched);
    }

    let mut score = (f64::from(hits) / f64::from(checks) * 100.0).min(100.0);
    if score < NEUTRAL_SCORE {
        score = NEUTRAL_SCORE - (NEUTRAL_SCORE - score) * 0.5;
    }

    (round2(score.clamp(0.0, 100.0)), matched)
}

/// Food-preference dimension score (0-100) with the tags that produced hits.
///
/// Each food-kind tag is mapped onto the food categories whose keyword
/// lists match its name; every category the user recorded a preference for
/// contributes Dislike=10 / Neutral=50 / Love=90, averaged over all
/// matches. Zero matches yields the neutral score regardless of how the
/// user's dislikes and loves are skewed, and a user with no recorded food
/// preferences is neutral without inspecting tags.
pub fn food_preference_score(
    preferences: &HashMap<String, PreferenceLevel>,
    tags: &[Tag],
) -> (f64, Vec<Tag>) {
    if preferences.is_empty() {
        return (NEUTRAL_SCORE, Vec::new());
    }

    let mut total = 0.0;
    let mut matches = 0u32;
    let mut matched = Vec::new();

    for tag in tags.iter().filter(|t| t.kind == TagKind::Food) {
        let name = tag.name.to_lowercase();
        for category in matching_food_categories(&name) {
            if let Some(level) = preferences.get(category) {
                total += level.affinity();
                matches += 1;
                matched.push(tag.clone());
            }
        }
    }

    if matches == 0 {
        return (NEUTRAL_SCORE, matched);
    }

    (round2(total / f64::from(matches)), matched)
}

/// Budget dimension score (0-100).
///
/// Priority order: an unlimited budget scores 100; an event without any
/// bounds, or a user without bounds for the event's duration class, is
/// neutral. Otherwise the effective ranges are compared: disjoint ranges
/// are scored by the gap to the nearer boundary normalized by the user's
/// range width (a gap beyond 50% of the width scores 0), overlapping
/// ranges score 70 plus 0.3 per percent of the event range covered, and
/// an event range nested entirely inside the user's range scores 100.
pub fn budget_score(
    budget: Option<&BudgetPreference>,
    event_type: EventType,
    event_min: Option<i64>,
    event_max: Option<i64>,
) -> f64 {
    if budget.is_some_and(|b| b.unlimited) {
        return 100.0;
    }

    if event_min.is_none() && event_max.is_none() {
        return NEUTRAL_SCORE;
    }

    let bounds = match budget.map(|b| b.bounds_for(event_type)) {
        Some(bounds) if !bounds.is_empty() => bounds,
        _ => return NEUTRAL_SCORE,
    };

    // Effective event range: a missing max defaults to twice the min
    // (floored at 100k), a missing min to zero.
    let event_min = event_min.unwrap_or(0) as f64;
    let event_max = event_max
        .map(|v| v as f64)
        .unwrap_or_else(|| (event_min * 2.0).max(100_000.0));

    let user_min = bounds.min.unwrap_or(0) as f64;
    let user_max = bounds.max.map(|v| v as f64).unwrap_or(OPEN_USER_MAX);

    let overlap_min = user_min.max(event_min);
    let overlap_max = user_max.min(event_max);

    if overlap_min > overlap_max {
        // Disjoint ranges: distance to the nearer boundary, normalized by
        // the user's range width.
        let gap = if user_max < event_min {
            event_min - user_max
        } else {
            user_min - event_max
        };

        let mut width = user_max - user_min;
        if width <= 0.0 {
            width = DEFAULT_RANGE_WIDTH;
        }

        let gap_percent = gap / width * 100.0;
        if gap_percent > 50.0 {
            return 0.0;
        }
        return round2(NEUTRAL_SCORE - gap_percent * 0.6);
    }

    // Degenerate zero-width ranges once overlap is confirmed
    let event_range = event_max - event_min;
    let user_range = user_max - user_min;
    if event_range <= 0.0 || user_range <= 0.0 {
        return 100.0;
    }

    // Event range fully nested inside the user's range
    if event_min >= user_min && event_max <= user_max {
        return 100.0;
    }

    let overlap_percent = (overlap_max - overlap_min) / event_range * 100.0;
    round2(70.0 + overlap_percent * 0.3)
}

/// Event-type affinity score (0-100).
///
/// A recorded budget upper bound for the event's duration class is treated
/// as an implicit interest signal worth 70; anything else is neutral.
#[inline]
pub fn event_type_score(budget: Option<&BudgetPreference>, event_type: EventType) -> f64 {
    match budget.and_then(|b| b.bounds_for(event_type).max) {
        Some(_) => 70.0,
        None => NEUTRAL_SCORE,
    }
}

/// Weighted combination of the dimension scores, rounded to 2 decimals.
/// Inputs are already in [0,100] so no clamping is needed.
#[inline]
pub fn combine_scores(scores: &DimensionScores, weights: &DimensionWeights) -> f64 {
    round2(
        scores.travel * weights.travel
            + scores.food * weights.food
            + scores.budget * weights.budget
            + scores.event_type * weights.event_type,
    )
}

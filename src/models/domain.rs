use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Duration class of an event. Budget preferences are recorded per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Meal,
    DayTrip,
    Overnight,
}

/// Publication state of an event. Only published events are candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Closed,
}

/// Tag categories used by the scorers for weighting and keyword matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Interest,
    Activity,
    Location,
    Food,
    Category,
    Transport,
    Accommodation,
}

/// A tag attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub kind: TagKind,
}

/// An event candidate, an immutable snapshot for the duration of one
/// ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "eventType")]
    pub event_type: EventType,
    pub status: EventStatus,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(rename = "budgetMin", default)]
    pub budget_min: Option<i64>,
    #[serde(rename = "budgetMax", default)]
    pub budget_max: Option<i64>,
    #[serde(rename = "memberCount", default)]
    pub member_count: u32,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// How strongly a user feels about a food category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceLevel {
    Dislike,
    Neutral,
    Love,
}

impl PreferenceLevel {
    /// Per-match contribution to the food dimension score
    pub fn affinity(self) -> f64 {
        match self {
            PreferenceLevel::Dislike => 10.0,
            PreferenceLevel::Neutral => 50.0,
            PreferenceLevel::Love => 90.0,
        }
    }
}

/// Optional spending bounds. A missing bound means open on that side.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BudgetBounds {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

impl BudgetBounds {
    /// True when neither bound is recorded
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// A user's budget preferences, recorded per event duration class
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetPreference {
    #[serde(default)]
    pub unlimited: bool,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub meal: BudgetBounds,
    #[serde(rename = "dayTrip", default)]
    pub day_trip: BudgetBounds,
    #[serde(default)]
    pub overnight: BudgetBounds,
}

impl BudgetPreference {
    /// Bounds recorded for the given duration class
    pub fn bounds_for(&self, event_type: EventType) -> &BudgetBounds {
        match event_type {
            EventType::Meal => &self.meal,
            EventType::DayTrip => &self.day_trip,
            EventType::Overnight => &self.overnight,
        }
    }
}

/// A user's stored preference profile, loaded fresh per ranking request
/// and never mutated by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "travelStyles", default)]
    pub travel_styles: Vec<String>,
    #[serde(rename = "foodPreferences", default)]
    pub food_preferences: HashMap<String, PreferenceLevel>,
    #[serde(default)]
    pub budget: Option<BudgetPreference>,
}

impl PreferenceProfile {
    /// Profile with no recorded signal in any dimension. Used when the
    /// store has no rows for a user, so new users still get a fully
    /// ranked list instead of an error.
    pub fn neutral(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            travel_styles: Vec::new(),
            food_preferences: HashMap::new(),
            budget: None,
        }
    }
}

/// Per-dimension score breakdown for one event, each in [0, 100]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DimensionScores {
    pub travel: f64,
    pub food: f64,
    pub budget: f64,
    #[serde(rename = "eventType")]
    pub event_type: f64,
}

/// Fixed dimension weights for the combined score
#[derive(Debug, Clone, Copy)]
pub struct DimensionWeights {
    pub travel: f64,
    pub food: f64,
    pub budget: f64,
    pub event_type: f64,
}

impl DimensionWeights {
    pub fn sum(&self) -> f64 {
        self.travel + self.food + self.budget + self.event_type
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            travel: 0.30,
            food: 0.30,
            budget: 0.30,
            event_type: 0.10,
        }
    }
}

/// One scored candidate: the event, its combined score, the per-dimension
/// breakdown, and the tags that produced hits (discovery order, travel
/// hits first, then food hits, not deduplicated)
#[derive(Debug, Clone, Serialize)]
pub struct EventMatch {
    pub event: Event,
    #[serde(rename = "combinedScore")]
    pub combined_score: f64,
    pub scores: DimensionScores,
    #[serde(rename = "matchedTags")]
    pub matched_tags: Vec<Tag>,
}

use crate::models::{Event, EventStatus, PreferenceProfile};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors surfaced by the preference store and event catalog
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("invalid store data: {0}")]
    InvalidData(String),
}

/// Read-only access to stored preference profiles
pub trait PreferenceStore: Send + Sync {
    /// Load the profile for a user. Returns `NotFound` when no preference
    /// rows exist for any dimension; callers treat that as all-neutral.
    fn load_profile(&self, user_id: &str) -> Result<PreferenceProfile, StoreError>;
}

/// Read-only access to the event catalog
pub trait EventCatalog: Send + Sync {
    /// Load the published candidate events
    fn load_candidates(&self) -> Result<Vec<Event>, StoreError>;
}

/// In-memory store backing both interfaces.
///
/// Persistence is owned by the surrounding system; this service only ever
/// sees typed records, so the store is seeded once at startup (from JSON
/// files in practice) and read concurrently without locking.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: HashMap<String, PreferenceProfile>,
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct SeedData {
    #[serde(default)]
    profiles: Vec<PreferenceProfile>,
    #[serde(default)]
    events: Vec<Event>,
}

impl MemoryStore {
    pub fn new(profiles: Vec<PreferenceProfile>, events: Vec<Event>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|p| (p.user_id.clone(), p))
                .collect(),
            events,
        }
    }

    /// Seed the store from a JSON file of `{ "profiles": [...], "events": [...] }`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.as_ref().display(), e)))?;
        let seed: SeedData =
            serde_json::from_str(&raw).map_err(|e| StoreError::InvalidData(e.to_string()))?;
        Ok(Self::new(seed.profiles, seed.events))
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl PreferenceStore for MemoryStore {
    fn load_profile(&self, user_id: &str) -> Result<PreferenceProfile, StoreError> {
        self.profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("no preferences for user {}", user_id)))
    }
}

impl EventCatalog for MemoryStore {
    fn load_candidates(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.status == EventStatus::Published)
            .cloned()
            .collect())
    }
}

// Integration tests for Gatherly Rank

use gatherly_rank::core::{RankError, RankingEngine};
use gatherly_rank::models::{
    BudgetBounds, BudgetPreference, Event, EventStatus, EventType, PreferenceLevel,
    PreferenceProfile, Tag, TagKind,
};
use gatherly_rank::services::{EventCatalog, MemoryStore, StoreError};
use std::collections::HashMap;
use uuid::Uuid;

fn tag(name: &str, kind: TagKind) -> Tag {
    Tag {
        id: Uuid::new_v4(),
        name: name.to_string(),
        kind,
    }
}

fn event(id: u128, title: &str, event_type: EventType, tags: Vec<Tag>) -> Event {
    Event {
        id: Uuid::from_u128(id),
        title: title.to_string(),
        event_type,
        status: EventStatus::Published,
        tags,
        budget_min: None,
        budget_max: None,
        member_count: 10,
        created_at: Some(chrono::Utc::now()),
    }
}

fn foodie_profile() -> PreferenceProfile {
    PreferenceProfile {
        user_id: "user_1".to_string(),
        travel_styles: vec!["foodie".to_string(), "healing".to_string()],
        food_preferences: HashMap::from([
            ("japanese".to_string(), PreferenceLevel::Love),
            ("spicy".to_string(), PreferenceLevel::Dislike),
        ]),
        budget: Some(BudgetPreference {
            unlimited: false,
            currency: "USD".to_string(),
            meal: BudgetBounds {
                min: Some(50),
                max: Some(150),
            },
            ..Default::default()
        }),
    }
}

fn catalog_events() -> Vec<Event> {
    let mut sushi = event(
        1,
        "Omakase Sushi Night",
        EventType::Meal,
        vec![
            tag("Sushi Tasting", TagKind::Food),
            tag("Gourmet", TagKind::Interest),
        ],
    );
    sushi.budget_min = Some(60);
    sushi.budget_max = Some(120);

    let mut chili = event(
        2,
        "Chili Eating Contest",
        EventType::Meal,
        vec![tag("Spicy Chili Showdown", TagKind::Food)],
    );
    chili.budget_min = Some(400);
    chili.budget_max = Some(500);

    let hike = event(
        3,
        "Mountain Hike",
        EventType::DayTrip,
        vec![tag("Hiking Trail", TagKind::Activity)],
    );

    vec![sushi, chili, hike]
}

#[test]
fn test_end_to_end_ranking() {
    let store = MemoryStore::new(vec![foodie_profile()], catalog_events());
    let engine = RankingEngine::with_default_weights();

    let page = engine.rank(&store, &store, "user_1", 1, 10).unwrap();

    assert_eq!(page.total_candidates, 3);
    assert_eq!(page.results.len(), 3);

    // Loved food + nested budget puts the sushi night on top; the disliked,
    // over-budget chili contest must rank below the neutral hike.
    assert_eq!(page.results[0].event.title, "Omakase Sushi Night");
    assert_eq!(page.results[2].event.title, "Chili Eating Contest");

    // Output is sorted non-increasing by combined score
    for pair in page.results.windows(2) {
        assert!(pair[0].combined_score >= pair[1].combined_score);
    }

    // Evidence tags come from the dimensions that actually hit
    let top = &page.results[0];
    assert!(top.matched_tags.iter().any(|t| t.name == "Sushi Tasting"));
    assert_eq!(top.scores.budget, 100.0);
}

#[test]
fn test_pagination_covers_every_event_once() {
    let store = MemoryStore::new(vec![foodie_profile()], catalog_events());
    let engine = RankingEngine::with_default_weights();

    let mut seen = Vec::new();
    for page_no in 1..=3 {
        let page = engine.rank(&store, &store, "user_1", page_no, 1).unwrap();
        assert_eq!(page.total_candidates, 3);
        seen.extend(page.results.into_iter().map(|m| m.event.id));
    }

    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 3);

    // Past the end: empty page, correct total
    let beyond = engine.rank(&store, &store, "user_1", 4, 1).unwrap();
    assert!(beyond.results.is_empty());
    assert_eq!(beyond.total_candidates, 3);
}

#[test]
fn test_unknown_user_gets_all_neutral_ranking() {
    let store = MemoryStore::new(vec![], catalog_events());
    let engine = RankingEngine::with_default_weights();

    let page = engine.rank(&store, &store, "newcomer", 1, 10).unwrap();
    assert_eq!(page.results.len(), 3);
    for result in &page.results {
        assert_eq!(result.combined_score, 50.0);
        assert!(result.matched_tags.is_empty());
    }
}

#[test]
fn test_invalid_arguments_fail_before_loading() {
    struct PanickyCatalog;
    impl EventCatalog for PanickyCatalog {
        fn load_candidates(&self) -> Result<Vec<Event>, StoreError> {
            panic!("catalog must not be touched for invalid arguments");
        }
    }

    let store = MemoryStore::default();
    let engine = RankingEngine::with_default_weights();

    for (user, page, limit) in [("", 1, 10), ("  ", 1, 10), ("user_1", 0, 10), ("user_1", 1, 0)] {
        let err = engine
            .rank(&store, &PanickyCatalog, user, page, limit)
            .unwrap_err();
        assert!(matches!(err, RankError::InvalidArgument(_)));
    }
}

#[test]
fn test_unavailable_catalog_is_reported() {
    struct DownCatalog;
    impl EventCatalog for DownCatalog {
        fn load_candidates(&self) -> Result<Vec<Event>, StoreError> {
            Err(StoreError::Unavailable("catalog offline".to_string()))
        }
    }

    let store = MemoryStore::new(vec![foodie_profile()], vec![]);
    let engine = RankingEngine::with_default_weights();

    let err = engine
        .rank(&store, &DownCatalog, "user_1", 1, 10)
        .unwrap_err();
    assert!(matches!(err, RankError::DependencyUnavailable(_)));
}

#[test]
fn test_draft_and_closed_events_are_not_candidates() {
    let mut draft = event(4, "Unfinished Plan", EventType::Meal, vec![]);
    draft.status = EventStatus::Draft;
    let mut closed = event(5, "Last Month's Trip", EventType::DayTrip, vec![]);
    closed.status = EventStatus::Closed;

    let mut events = catalog_events();
    events.push(draft);
    events.push(closed);

    let store = MemoryStore::new(vec![foodie_profile()], events);
    let engine = RankingEngine::with_default_weights();

    let page = engine.rank(&store, &store, "user_1", 1, 10).unwrap();
    assert_eq!(page.total_candidates, 3);
    assert!(page
        .results
        .iter()
        .all(|m| m.event.status == EventStatus::Published));
}

// Criterion benchmarks for Gatherly Rank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gatherly_rank::core::{budget_score, travel_style_score, RankingEngine};
use gatherly_rank::models::{
    BudgetBounds, BudgetPreference, Event, EventStatus, EventType, PreferenceLevel,
    PreferenceProfile, Tag, TagKind,
};
use gatherly_rank::services::MemoryStore;
use std::collections::HashMap;
use uuid::Uuid;

fn create_event(id: usize) -> Event {
    let kinds = [TagKind::Interest, TagKind::Activity, TagKind::Food, TagKind::Location];
    let names = ["Hiking Trail", "Sushi Tasting", "Night Market", "Spa Retreat", "Museum Walk"];

    let tags = (0..(id % 4) + 1)
        .map(|i| Tag {
            id: Uuid::new_v4(),
            name: names[(id + i) % names.len()].to_string(),
            kind: kinds[(id + i) % kinds.len()],
        })
        .collect();

    Event {
        id: Uuid::new_v4(),
        title: format!("Event {}", id),
        event_type: match id % 3 {
            0 => EventType::Meal,
            1 => EventType::DayTrip,
            _ => EventType::Overnight,
        },
        status: EventStatus::Published,
        tags,
        budget_min: Some((id as i64 % 10) * 50),
        budget_max: Some((id as i64 % 10) * 50 + 200),
        member_count: (id % 30) as u32,
        created_at: Some(chrono::Utc::now()),
    }
}

fn create_profile() -> PreferenceProfile {
    PreferenceProfile {
        user_id: "current_user".to_string(),
        travel_styles: vec!["healing".to_string(), "foodie".to_string()],
        food_preferences: HashMap::from([
            ("japanese".to_string(), PreferenceLevel::Love),
            ("spicy".to_string(), PreferenceLevel::Dislike),
        ]),
        budget: Some(BudgetPreference {
            unlimited: false,
            currency: "USD".to_string(),
            meal: BudgetBounds {
                min: Some(50),
                max: Some(250),
            },
            ..Default::default()
        }),
    }
}

fn bench_travel_scorer(c: &mut Criterion) {
    let profile = create_profile();
    let event = create_event(1);

    c.bench_function("travel_style_score", |b| {
        b.iter(|| travel_style_score(black_box(&profile.travel_styles), black_box(&event.tags)));
    });
}

fn bench_budget_scorer(c: &mut Criterion) {
    let profile = create_profile();

    c.bench_function("budget_score", |b| {
        b.iter(|| {
            budget_score(
                black_box(profile.budget.as_ref()),
                black_box(EventType::Meal),
                black_box(Some(100)),
                black_box(Some(300)),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let engine = RankingEngine::with_default_weights();
    let profile = create_profile();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let events: Vec<Event> = (0..*candidate_count).map(create_event).collect();
        let store = MemoryStore::new(vec![profile.clone()], events);

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    engine
                        .rank(
                            black_box(&store),
                            black_box(&store),
                            black_box("current_user"),
                            1,
                            20,
                        )
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_travel_scorer, bench_budget_scorer, bench_ranking);
criterion_main!(benches);

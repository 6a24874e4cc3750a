// Rendering and input handling of the quiz screens

use eatnow::quiz::Step;
use eatnow::recommend::{Lookup, Recommendation, RecommendationResponse};
use eatnow::ui::AppState;

use crate::common::helpers::{render_text, walk_to_results};

#[test]
fn test_landing_screen() {
    let mut state = AppState::new();
    let text = render_text(&mut state, 80, 24);
    assert!(text.contains("What Should I Eat Now?"));
    assert!(text.contains("FEED ME"));
    assert!(!text.contains("1/7"));
}

#[test]
fn test_progress_counts_questions() {
    let mut state = AppState::new();
    state.start();
    state.next();
    let text = render_text(&mut state, 80, 24);
    assert_eq!(state.step(), Step::Budget);
    assert!(text.contains("2/7"));
    assert!(text.contains("What's the budget?"));
}

#[test]
fn test_service_result_screen() {
    let mut state = AppState::new();
    walk_to_results(&mut state);
    let (generation, _) = state.begin_lookup().unwrap();

    let response: RecommendationResponse = serde_json::from_str(
        r#"{"best_match": {"id": 3, "name": "Paneer Tikka", "emoji": "🧆",
            "cuisine": "indian", "avg_price": 280, "description": "Smoky grilled cottage cheese",
            "is_vegetarian": true},
            "score": 91.6, "matched_tags": ["indian", "grilled"], "alternatives": [],
            "total_matches": 5}"#,
    )
    .unwrap();
    assert!(state.finish_lookup(Lookup {
        generation,
        recommendation: Recommendation::from(response),
    }));

    let text = render_text(&mut state, 120, 40);
    assert!(text.contains("Paneer Tikka!"));
    assert!(text.contains("92% match"));
    assert!(text.contains("#grilled"));
    assert!(text.contains("Vegetarian"));
    assert!(text.contains("query=Paneer+Tikka"));
    assert!(!text.contains("Couldn't reach the kitchen!"));
}

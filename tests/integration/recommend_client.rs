// HTTP client against a loopback stub service

use eatnow::recommend::{
    ClientConfig, RecommendClient, RecommendError, RecommendationSource, fallback_foods, resolve,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

use crate::common::helpers::sample_answers;
use crate::common::stub_server::serve_once;

const BUTTER_CHICKEN: &str = r#"{
    "best_match": {
        "id": 7, "name": "Butter Chicken", "emoji": "🍗", "cuisine": "indian",
        "tags": ["spicy", "indian", "comfort"], "avg_price": 320,
        "description": "Creamy tomato curry", "spice_level": 3,
        "is_vegetarian": false, "serving_size": "large", "temperature": "hot"
    },
    "score": 82,
    "matched_tags": ["spicy", "indian"],
    "alternatives": [],
    "total_matches": 14
}"#;

fn client(base_url: &str) -> RecommendClient {
    RecommendClient::new(ClientConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[test]
fn test_posts_answers_and_decodes_match() {
    let (base_url, server) = serve_once(200, BUTTER_CHICKEN);
    let rec = resolve(
        &client(&base_url),
        &sample_answers(),
        &mut StdRng::seed_from_u64(1),
    );
    let request = server.join().unwrap();

    assert_eq!(request.request_line, "POST /api/recommend HTTP/1.1");
    assert_eq!(request.header("content-type"), Some("application/json"));
    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent["budget"], "moderate");
    assert_eq!(sent["spice"], 4);
    assert_eq!(sent["social"], "date");
    assert_eq!(sent["vibe"], "stressed");

    assert!(!rec.is_fallback());
    assert_eq!(rec.food.name, "Butter Chicken");
    assert_eq!(rec.score_label().as_deref(), Some("82% match"));
    assert_eq!(rec.shown_tags(), ["spicy", "indian"]);
}

#[test]
fn test_trailing_slash_in_base_url() {
    let (base_url, server) = serve_once(200, BUTTER_CHICKEN);
    let response = client(&format!("{}/", base_url))
        .recommend(&sample_answers())
        .unwrap();
    assert_eq!(server.join().unwrap().request_line, "POST /api/recommend HTTP/1.1");
    assert_eq!(response.total_matches, 14);
}

#[test]
fn test_server_error_falls_back() {
    let (base_url, server) = serve_once(500, r#"{"detail": "boom"}"#);
    let http = client(&base_url);

    assert!(matches!(
        http.recommend(&sample_answers()),
        Err(RecommendError::Status(500))
    ));
    server.join().unwrap();

    let (base_url, server) = serve_once(500, r#"{"detail": "boom"}"#);
    let rec = resolve(
        &client(&base_url),
        &sample_answers(),
        &mut StdRng::seed_from_u64(9),
    );
    server.join().unwrap();

    assert!(rec.is_fallback());
    assert!(fallback_foods().contains(&rec.food));
    assert_eq!(rec.score_label(), None);
    assert!(rec.notice().is_some());
}

#[test]
fn test_malformed_body_is_a_decode_error() {
    let (base_url, server) = serve_once(200, r#"{"unexpected": true}"#);
    let result = client(&base_url).recommend(&sample_answers());
    server.join().unwrap();
    assert!(matches!(result, Err(RecommendError::Decode(_))));
}

#[test]
fn test_health_check() {
    let (base_url, server) = serve_once(
        200,
        r#"{"status": "healthy", "message": "What Should I Eat Now? API is running!", "database": "connected"}"#,
    );
    let health = client(&base_url).health().unwrap();
    let request = server.join().unwrap();

    assert_eq!(request.request_line, "GET /api/health HTTP/1.1");
    assert_eq!(health.status, "healthy");
    assert_eq!(health.database, "connected");
}

//! End-to-end HTTP tests.

mod common;

use common::harness::{TestServerConfig, spawn_test_server};
use common::http_client::{TestClient, TestClientError};

const PASSAGE: &str = "Honeybees communicate the location of flowers with a waggle dance. \
The angle of the dance shows the direction relative to the sun. The length of the waggle \
run tells other bees how far away the food is. Scientists decoded the dance in the 1940s.";

const GOOD_RESPONSE: &str = "Honeybees use a waggle dance to tell other bees where flowers \
are. The angle of the dance gives the direction compared to the sun, and the length of the \
run shows the distance to the food.";

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let health = client.health().await.expect("Health check should succeed");

    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_ready_endpoint_reports_components() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let ready = client.ready().await.expect("Ready check should succeed");

    assert!(ready.is_ok(), "Server should report ready");
    assert_eq!(ready.components.http, "ready");
    assert_eq!(ready.components.embedder, "stub");
    assert_eq!(ready.components.summarizer, "lead");
    assert_eq!(ready.components.grammar, "rules");
}

#[tokio::test]
async fn test_score_summary_returns_breakdown() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let (score, status) = client
        .score_summary(PASSAGE, GOOD_RESPONSE)
        .await
        .expect("Scoring should succeed");

    assert_eq!(status, "scored");
    assert!(!score.reference_summary.is_empty());
    assert!((0.0..=100.0).contains(&score.reference_similarity));
    assert!((0.0..=100.0).contains(&score.context_similarity));
    assert!(score.length_penalty <= 15);
    assert!(score.grammar_penalty <= 20);
    assert!(score.final_score <= 100);
    assert_eq!(score.elapsed_time_s.split('.').nth(1).map(str::len), Some(2));
}

#[tokio::test]
async fn test_related_response_beats_unrelated_response() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let client = TestClient::new(server.url());

    let unrelated = "Volcanoes form where tectonic plates pull apart or collide. Lava \
cools into new rock over many years, and some islands were built this way from the seabed.";

    let (related, _) = client.score_summary(PASSAGE, GOOD_RESPONSE).await.unwrap();
    let (off_topic, _) = client.score_summary(PASSAGE, unrelated).await.unwrap();

    assert!(related.context_similarity > off_topic.context_similarity);
    assert!(related.final_score >= off_topic.final_score);
}

#[tokio::test]
async fn test_fixed_reference_summary_is_echoed() {
    let reference = "Bees dance to share where food is and how far away.";
    let server = spawn_test_server(TestServerConfig::default().with_reference_summary(reference))
        .await
        .expect("Server should start");
    let client = TestClient::new(server.url());

    let (score, _) = client.score_summary(PASSAGE, GOOD_RESPONSE).await.unwrap();
    assert_eq!(score.reference_summary, reference);
}

#[tokio::test]
async fn test_short_response_gets_length_penalty() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let client = TestClient::new(server.url());

    let (score, _) = client
        .score_summary(PASSAGE, "Bees dance to show where flowers are.")
        .await
        .unwrap();
    assert_eq!(score.length_penalty, 15);
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let client = TestClient::new(server.url());

    let result = client
        .score_raw(serde_json::json!({"student_response": GOOD_RESPONSE}))
        .await;
    match result {
        Err(TestClientError::BadRequest(body)) => assert!(body.contains("context")),
        other => panic!("expected bad request, got {:?}", other.map(|(_, s)| s)),
    }
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");
    let url = server.url();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = TestClient::new(url.clone());
        handles.push(tokio::spawn(async move {
            client.score_summary(PASSAGE, GOOD_RESPONSE).await.unwrap().0
        }));
    }

    let mut scores = Vec::new();
    for handle in handles {
        scores.push(handle.await.unwrap());
    }

    let first = &scores[0];
    for score in &scores[1..] {
        assert_eq!(score.final_score, first.final_score);
        assert_eq!(score.reference_summary, first.reference_summary);
        assert_eq!(score.reference_similarity, first.reference_similarity);
    }
}

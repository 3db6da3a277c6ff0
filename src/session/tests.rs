use std::time::Duration;

use super::*;
use crate::retrieval::{MockBackend, MockReply, RetrievalError};

fn body_with(answers: &[(&str, f64)]) -> String {
    let items: Vec<serde_json::Value> = answers
        .iter()
        .map(|(ans, score)| {
            serde_json::json!({
                "ans": ans,
                "text": format!("context {ans} context"),
                "title": ans,
                "href": format!("/wiki/{ans}"),
                "HNSW_score": score,
                "QA_score": 0.0,
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

fn session(backend: MockBackend) -> QuerySession<MockBackend> {
    QuerySession::new(RetrievalClient::new(backend), RetrievalMode::default())
}

fn displayed_answers<B: AnswerBackend>(session: &QuerySession<B>) -> Vec<String> {
    session
        .displayed()
        .iter()
        .map(|c| c.answer_text.clone())
        .collect()
}

#[tokio::test]
async fn test_blank_submission_is_ignored() {
    let session = session(MockBackend::new());

    assert_eq!(session.submit("").await.unwrap(), SubmitOutcome::Ignored);
    assert_eq!(session.submit("  \n").await.unwrap(), SubmitOutcome::Ignored);

    assert_eq!(session.client().backend().request_count(), 0);
    assert_eq!(session.latest_token(), 0);
}

#[tokio::test]
async fn test_submit_replaces_displayed_list() {
    let backend = MockBackend::new();
    backend.route("first", MockReply::Body(body_with(&[("a", 0.2), ("b", 0.9)])));
    backend.route("second", MockReply::Body(body_with(&[("c", 0.5)])));
    let session = session(backend);

    let outcome = session.submit("first").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Applied { token: 1, count: 2 });
    assert_eq!(displayed_answers(&session), vec!["b", "a"]);

    let outcome = session.submit("second").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Applied { token: 2, count: 1 });
    assert_eq!(displayed_answers(&session), vec!["c"]);
    assert_eq!(session.displayed_token(), 2);
}

#[tokio::test]
async fn test_empty_result_clears_list() {
    let backend = MockBackend::new();
    backend.route("some", MockReply::Body(body_with(&[("a", 0.2)])));
    backend.route("none", MockReply::Body("[]".to_string()));
    let session = session(backend);

    session.submit("some").await.unwrap();
    let outcome = session.submit("none").await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Applied { token: 2, count: 0 });
    assert!(session.displayed().is_empty());
}

#[tokio::test]
async fn test_failure_keeps_previous_list() {
    let backend = MockBackend::new();
    backend.route("good", MockReply::Body(body_with(&[("a", 0.2)])));
    backend.route("bad", MockReply::Status(503));
    let session = session(backend);

    session.submit("good").await.unwrap();
    let err = session.submit("bad").await.unwrap_err();

    assert!(matches!(err, RetrievalError::Status { status: 503, .. }));
    assert_eq!(displayed_answers(&session), vec!["a"]);
    assert_eq!(session.displayed_token(), 1);
    assert_eq!(session.latest_token(), 2);
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let backend = MockBackend::new();
    backend.route_delayed(
        "slow",
        MockReply::Body(body_with(&[("stale", 0.9)])),
        Duration::from_millis(150),
    );
    backend.route("fast", MockReply::Body(body_with(&[("fresh", 0.1)])));
    let session = session(backend);

    let (slow, fast) = tokio::join!(session.submit("slow"), session.submit("fast"));

    assert_eq!(
        slow.unwrap(),
        SubmitOutcome::Superseded {
            token: 1,
            latest: 2
        }
    );
    assert_eq!(fast.unwrap(), SubmitOutcome::Applied { token: 2, count: 1 });
    assert_eq!(displayed_answers(&session), vec!["fresh"]);
}

#[tokio::test]
async fn test_stale_failure_is_not_reported() {
    let backend = MockBackend::new();
    backend.route_delayed("slow", MockReply::Status(500), Duration::from_millis(100));
    backend.route("fast", MockReply::Body(body_with(&[("fresh", 0.1)])));
    let session = session(backend);

    let (slow, fast) = tokio::join!(session.submit("slow"), session.submit("fast"));

    assert!(matches!(slow, Ok(SubmitOutcome::Superseded { token: 1, .. })));
    assert!(fast.unwrap().is_applied());
}

#[tokio::test]
async fn test_select_mode_applies_to_next_request() {
    let session = session(MockBackend::new());
    assert_eq!(session.mode(), RetrievalMode::Hybrid);

    session.submit("q1").await.unwrap();
    session.select_mode(RetrievalMode::FulltextOnly);
    session.submit("q2").await.unwrap();
    session.select_mode(RetrievalMode::VectorOnly);
    session.submit("q3").await.unwrap();

    let codes: Vec<&str> = session
        .client()
        .backend()
        .requests()
        .iter()
        .map(|r| r.mode.code())
        .collect();
    assert_eq!(codes, vec!["VEC_FT", "FT", "VEC"]);
}

#[tokio::test]
async fn test_submission_is_trimmed() {
    let session = session(MockBackend::new());
    session.submit("  who is ada lovelace?\n").await.unwrap();

    let requests = session.client().backend().requests();
    assert_eq!(requests[0].question, "who is ada lovelace?");
}

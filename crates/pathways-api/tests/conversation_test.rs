//! Integration tests for conversation sessions.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use pathways_core::error::DomainError;
use pathways_test_support::{
    ScriptedTextGenerator, SelectiveImageGenerator, StaticImageGenerator, detail_document,
    image_url_for, paths_document, timeline_document,
};
use serde_json::json;
use uuid::Uuid;

async fn submit(app: &axum::Router, session_id: Uuid, text: &str) -> StatusCode {
    let (status, _) = common::post_json(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/input"),
        &json!({ "text": text }),
    )
    .await;
    status
}

#[tokio::test]
async fn test_create_session_returns_201_with_id() {
    let app = common::build_test_app(
        Arc::new(ScriptedTextGenerator::default()),
        Arc::new(StaticImageGenerator),
    );

    let (status, json) = common::post_empty(app.clone(), "/api/v1/sessions").await;

    assert_eq!(status, StatusCode::CREATED);
    let session_id: Uuid = json["session_id"].as_str().unwrap().parse().unwrap();

    let (status, json) = common::get_json(app, &format!("/api/v1/sessions/{session_id}/log")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stage"], 0);
}

#[tokio::test]
async fn test_first_turn_with_one_failed_image_appends_four_entries() {
    // Arrange
    let app = common::build_test_app(
        Arc::new(ScriptedTextGenerator::succeeding(vec![paths_document(&[
            "a design studio",
            "a math lab",
            "an architect's office",
        ])])),
        Arc::new(SelectiveImageGenerator::new().failing_on("a math lab")),
    );
    let session_id = Uuid::new_v4();

    // Act
    assert_eq!(
        submit(&app, session_id, "I like design and math").await,
        StatusCode::NO_CONTENT
    );
    let (status, json) = common::get_json(app, &format!("/api/v1/sessions/{session_id}")).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stage"], 1);
    assert_eq!(json["stage_name"], "paths_offered");

    let log = json["log"].as_array().unwrap();
    assert_eq!(log.len(), 4);
    assert_eq!(log[0], json!({ "role": "user", "text": "I like design and math" }));

    for entry in &log[1..] {
        assert_eq!(entry["role"], "bot");
        assert_eq!(entry["kind"], "path");
    }
    assert_eq!(log[1]["image"]["url"], image_url_for("a design studio"));
    assert!(log[2]["image"].get("url").is_none());
    assert!(log[2]["image"]["error"]["error_message"].is_string());
    assert_eq!(log[2]["what_if"], "What if you became path 2?");
    assert_eq!(log[3]["image"]["url"], image_url_for("an architect's office"));
}

#[tokio::test]
async fn test_detail_turn_appends_user_and_one_bot_entry() {
    // Arrange
    let app = common::build_test_app(
        Arc::new(ScriptedTextGenerator::succeeding(vec![
            paths_document(&["a", "b", "c"]),
            detail_document("The second path needs a design degree."),
        ])),
        Arc::new(StaticImageGenerator),
    );
    let session_id = Uuid::new_v4();
    let uri = format!("/api/v1/sessions/{session_id}");
    submit(&app, session_id, "I like design and math").await;
    common::get_json(app.clone(), &uri).await;

    // Act
    submit(&app, session_id, "Tell me more about the second one").await;
    let (status, json) = common::get_json(app, &uri).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stage"], 2);
    let log = json["log"].as_array().unwrap();
    assert_eq!(log.len(), 6);
    assert_eq!(log[4]["role"], "user");
    assert_eq!(log[4]["text"], "Tell me more about the second one");
    assert_eq!(log[5]["kind"], "detail");
    assert_eq!(log[5]["detail_text"], "The second path needs a design degree.");
    assert!(log[5].get("image").is_none());
}

#[tokio::test]
async fn test_failed_timeline_turn_leaves_log_and_stage_unchanged() {
    // Arrange
    let app = common::build_test_app(
        Arc::new(ScriptedTextGenerator::new(vec![
            Ok(paths_document(&["a"])),
            Ok(detail_document("More.")),
            Err(DomainError::GenerationNetwork("connection reset by peer".into())),
        ])),
        Arc::new(StaticImageGenerator),
    );
    let session_id = Uuid::new_v4();
    let uri = format!("/api/v1/sessions/{session_id}");
    for text in ["I like design", "Tell me more"] {
        submit(&app, session_id, text).await;
        common::get_json(app.clone(), &uri).await;
    }
    let (_, before) = common::get_json(app.clone(), &format!("{uri}/log")).await;

    // Act
    submit(&app, session_id, "Give me a timeline").await;
    let (status, json) = common::get_json(app.clone(), &uri).await;

    // Assert
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"], "generation_failed");
    assert!(!json["message"].as_str().unwrap().contains("connection reset"));

    let (_, after) = common::get_json(app, &format!("{uri}/log")).await;
    assert_eq!(after["stage"], 2);
    assert_eq!(after["log"], before["log"]);
}

#[tokio::test]
async fn test_full_progression_then_open_ended_follow_up() {
    // Arrange
    let app = common::build_test_app(
        Arc::new(ScriptedTextGenerator::succeeding(vec![
            paths_document(&["a", "b"]),
            detail_document("Detail."),
            timeline_document(&["week one", "month two", "year three"]),
            detail_document("Follow-up answer."),
        ])),
        Arc::new(StaticImageGenerator),
    );
    let session_id = Uuid::new_v4();
    let uri = format!("/api/v1/sessions/{session_id}");

    // Act
    let mut last = serde_json::Value::Null;
    for text in ["start", "more", "timeline please", "what about salary?"] {
        submit(&app, session_id, text).await;
        let (status, json) = common::get_json(app.clone(), &uri).await;
        assert_eq!(status, StatusCode::OK);
        last = json;
    }

    // Assert
    assert_eq!(last["stage"], 4);
    assert_eq!(last["stage_name"], "follow_up");
    let log = last["log"].as_array().unwrap();
    // 3 + 2 + 4 + 2 entries.
    assert_eq!(log.len(), 11);
    assert_eq!(log[5]["text"], "timeline please");
    assert_eq!(log[6]["kind"], "timeline");
    assert_eq!(log[6]["step"], "Step 1");
    assert_eq!(log[6]["resources"], json!(["Coursera", "GitHub"]));
    assert_eq!(log[8]["image"]["url"], image_url_for("year three"));
    assert_eq!(log[10]["detail_text"], "Follow-up answer.");
}

#[tokio::test]
async fn test_render_without_pending_input_is_a_read() {
    let app = common::build_test_app(
        Arc::new(ScriptedTextGenerator::succeeding(vec![paths_document(&["a"])])),
        Arc::new(StaticImageGenerator),
    );
    let session_id = Uuid::new_v4();
    let uri = format!("/api/v1/sessions/{session_id}");
    submit(&app, session_id, "start").await;

    let (_, first) = common::get_json(app.clone(), &uri).await;
    let (_, second) = common::get_json(app, &uri).await;

    assert_eq!(first, second);
    assert_eq!(second["stage"], 1);
}

#[tokio::test]
async fn test_empty_input_is_rejected_and_keeps_pending_input() {
    let app = common::build_test_app(
        Arc::new(ScriptedTextGenerator::default()),
        Arc::new(StaticImageGenerator),
    );
    let session_id = Uuid::new_v4();
    submit(&app, session_id, "real question").await;

    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/input"),
        &json!({ "text": "   " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    let (_, view) = common::get_json(app, &format!("/api/v1/sessions/{session_id}/log")).await;
    assert_eq!(view["has_pending_input"], true);
    assert_eq!(view["log"], json!([]));
}

#[tokio::test]
async fn test_reset_clears_session_and_is_idempotent() {
    // Arrange
    let app = common::build_test_app(
        Arc::new(ScriptedTextGenerator::succeeding(vec![
            paths_document(&["a"]),
            paths_document(&["b"]),
        ])),
        Arc::new(StaticImageGenerator),
    );
    let session_id = Uuid::new_v4();
    let uri = format!("/api/v1/sessions/{session_id}");
    submit(&app, session_id, "start").await;
    common::get_json(app.clone(), &uri).await;

    // Act
    for _ in 0..2 {
        let (status, _) = common::post_empty(app.clone(), &format!("{uri}/reset")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    // Assert
    let (_, view) = common::get_json(app.clone(), &format!("{uri}/log")).await;
    assert_eq!(view["stage"], 0);
    assert_eq!(view["log"], json!([]));
    assert_eq!(view["has_pending_input"], false);

    // The next turn starts the script over with alternative paths.
    submit(&app, session_id, "start again").await;
    let (_, view) = common::get_json(app, &uri).await;
    assert_eq!(view["stage"], 1);
    assert_eq!(view["log"][1]["kind"], "path");
}

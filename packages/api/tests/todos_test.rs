//! Todo adapter: envelope unwrapping and the `title`↔`text` translation on
//! the wire.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api::{ApiClient, ApiConfig, Todo, TodoApi, TodoPatch};
use store::MemoryTokens;

fn make_api(base_url: &str) -> TodoApi<MemoryTokens> {
    TodoApi::new(ApiClient::new(&ApiConfig::new(base_url), MemoryTokens::new()))
}

#[tokio::test]
async fn test_list_unwraps_the_envelope_and_maps_title_to_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": 1,
                    "title": "buy milk",
                    "description": "buy milk",
                    "completed": false,
                    "created_at": "2024-03-01T09:00:00Z",
                    "updated_at": "2024-03-01T09:00:00Z"
                },
                { "id": 2, "title": "call home", "completed": true }
            ]
        })))
        .mount(&server)
        .await;

    let todos = make_api(&server.uri()).list().await.unwrap();
    assert_eq!(
        todos,
        vec![
            Todo { id: 1, text: "buy milk".to_string(), completed: false },
            Todo { id: 2, text: "call home".to_string(), completed: true },
        ]
    );
}

#[tokio::test]
async fn test_create_sends_description_mirroring_the_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_json(json!({
            "title": "buy milk",
            "description": "buy milk"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": 10, "title": "buy milk", "completed": false }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let todo = make_api(&server.uri()).create("buy milk").await.unwrap();
    assert_eq!(todo, Todo { id: 10, text: "buy milk".to_string(), completed: false });
}

#[tokio::test]
async fn test_toggle_sends_only_the_completion_flag() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/todos/10"))
        .and(body_json(json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 10, "title": "buy milk", "completed": true }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let todo = make_api(&server.uri()).toggle(10, true).await.unwrap();
    assert!(todo.completed);
}

#[tokio::test]
async fn test_update_with_text_sends_title_and_description() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/todos/10"))
        .and(body_json(json!({
            "completed": false,
            "title": "buy oat milk",
            "description": "buy oat milk"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 10, "title": "buy oat milk", "completed": false }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let todo = make_api(&server.uri())
        .update(10, &TodoPatch::with_text(false, "buy oat milk"))
        .await
        .unwrap();
    assert_eq!(todo.text, "buy oat milk");
}

#[tokio::test]
async fn test_delete_issues_delete_and_ignores_the_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/10"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    make_api(&server.uri()).delete(10).await.unwrap();
}

#[tokio::test]
async fn test_backend_failures_propagate_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let err = make_api(&server.uri()).list().await.unwrap_err();
    assert_eq!(err.to_string(), "boom");
}

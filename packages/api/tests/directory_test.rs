//! User and portfolio-project adapters: passthrough fields under the
//! single-wrap envelope.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api::{ApiClient, ApiConfig, NewUser, PortfolioProject, ProjectApi, UserApi, UserPatch};
use store::MemoryTokens;

fn make_client(base_url: &str) -> ApiClient<MemoryTokens> {
    ApiClient::new(&ApiConfig::new(base_url), MemoryTokens::new())
}

#[tokio::test]
async fn test_user_list_and_get_pass_fields_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 1, "name": "Aiko", "email": "a@b.com", "created_at": "2024-01-01T00:00:00Z" },
                { "id": 2, "name": "Ben", "email": "ben@example.com" }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 2, "name": "Ben", "email": "ben@example.com" }
        })))
        .mount(&server)
        .await;

    let users = UserApi::new(make_client(&server.uri()));

    let list = users.list().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "Aiko");
    assert_eq!(list[0].created_at.as_deref(), Some("2024-01-01T00:00:00Z"));

    let ben = users.get(2).await.unwrap();
    assert_eq!(ben.email, "ben@example.com");
}

#[tokio::test]
async fn test_user_create_sends_only_name_and_email() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({ "name": "Ben", "email": "ben@example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": 3, "name": "Ben", "email": "ben@example.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = UserApi::new(make_client(&server.uri()));
    let created = users
        .create(&NewUser {
            name: "Ben".to_string(),
            email: "ben@example.com".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);
}

#[tokio::test]
async fn test_user_patch_omits_absent_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/3"))
        .and(body_json(json!({ "name": "Benjamin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 3, "name": "Benjamin", "email": "ben@example.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = UserApi::new(make_client(&server.uri()));
    let updated = users
        .update(
            3,
            &UserPatch {
                name: Some("Benjamin".to_string()),
                email: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Benjamin");
}

#[tokio::test]
async fn test_user_delete_discards_the_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    UserApi::new(make_client(&server.uri()))
        .delete(3)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_project_list_passes_fields_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/portfolio-projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "title": "Realtime dashboard",
                "position": "Backend engineer",
                "status": "In progress",
                "description": "Websocket fan-out for metrics",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-02-01T00:00:00Z"
            }]
        })))
        .mount(&server)
        .await;

    let projects = ProjectApi::new(make_client(&server.uri())).list().await.unwrap();
    assert_eq!(
        projects,
        vec![PortfolioProject {
            id: 1,
            title: "Realtime dashboard".to_string(),
            position: "Backend engineer".to_string(),
            status: "In progress".to_string(),
            description: "Websocket fan-out for metrics".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-02-01T00:00:00Z".to_string(),
        }]
    );
}

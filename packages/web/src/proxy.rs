//! Same-origin passthrough for the legacy todo endpoints.
//!
//! The older backend deployment wraps each element of the todo list in its
//! own envelope (`{"data":[{"data":{…}},…]}`). These routes sit in front of
//! it and hand the browser the flat frontend shape, so the in-browser
//! adapter never sees the nested variant. Mutations are forwarded with the
//! same `text` → `title` mapping the direct client path uses.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use api::{ApiConfig, Envelope, NestedEnvelope, NewTodo, Todo, TodoRecord};

#[derive(Clone)]
struct ProxyState {
    http: reqwest::Client,
    backend: String,
}

pub fn router() -> Router {
    let state = ProxyState {
        http: reqwest::Client::new(),
        backend: ApiConfig::from_env().base_url().to_string(),
    };

    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            axum::routing::put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

/// Body accepted from the browser for create and update.
#[derive(Debug, Deserialize)]
struct TodoInput {
    text: Option<String>,
    completed: Option<bool>,
}

/// Update body forwarded upstream; only the provided fields are sent.
#[derive(Debug, Serialize)]
struct UpstreamPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
}

async fn list_todos(State(state): State<ProxyState>) -> Response {
    let result = async {
        let response = state
            .http
            .get(format!("{}/todos", state.backend))
            .send()
            .await?
            .error_for_status()?;
        let nested: NestedEnvelope<TodoRecord> = response.json().await?;
        Ok::<Vec<Todo>, reqwest::Error>(
            nested
                .into_inner()
                .into_iter()
                .map(TodoRecord::into_todo)
                .collect(),
        )
    }
    .await;

    match result {
        Ok(todos) => Json(todos).into_response(),
        Err(err) => upstream_error("Failed to fetch todos", err),
    }
}

async fn create_todo(State(state): State<ProxyState>, Json(input): Json<TodoInput>) -> Response {
    let Some(text) = input.text.filter(|text| !text.trim().is_empty()) else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "text is required" })),
        )
            .into_response();
    };

    let result = async {
        let response = state
            .http
            .post(format!("{}/todos", state.backend))
            .json(&NewTodo::from_text(&text))
            .send()
            .await?
            .error_for_status()?;
        let envelope: Envelope<TodoRecord> = response.json().await?;
        Ok::<Todo, reqwest::Error>(envelope.into_inner().into_todo())
    }
    .await;

    match result {
        Ok(todo) => Json(todo).into_response(),
        Err(err) => upstream_error("Failed to create todo", err),
    }
}

async fn update_todo(
    State(state): State<ProxyState>,
    Path(id): Path<u64>,
    Json(input): Json<TodoInput>,
) -> Response {
    let patch = UpstreamPatch {
        title: input.text,
        completed: input.completed,
    };

    let result = async {
        let response = state
            .http
            .put(format!("{}/todos/{id}", state.backend))
            .json(&patch)
            .send()
            .await?
            .error_for_status()?;
        let envelope: Envelope<TodoRecord> = response.json().await?;
        Ok::<Todo, reqwest::Error>(envelope.into_inner().into_todo())
    }
    .await;

    match result {
        Ok(todo) => Json(todo).into_response(),
        Err(err) => upstream_error("Failed to update todo", err),
    }
}

async fn delete_todo(State(state): State<ProxyState>, Path(id): Path<u64>) -> Response {
    let result = async {
        state
            .http
            .delete(format!("{}/todos/{id}", state.backend))
            .send()
            .await?
            .error_for_status()?;
        Ok::<(), reqwest::Error>(())
    }
    .await;

    match result {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(err) => upstream_error("Failed to delete todo", err),
    }
}

fn upstream_error(message: &str, err: reqwest::Error) -> Response {
    tracing::error!("proxy upstream error: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

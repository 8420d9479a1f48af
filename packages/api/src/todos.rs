use store::TokenStore;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::models::{NewTodo, Todo, TodoPatch, TodoRecord};

/// Client for `/todos`. Owns the `title`↔`text` translation; transport
/// concerns stay in the wrapped [`ApiClient`].
#[derive(Clone)]
pub struct TodoApi<S: TokenStore> {
    client: ApiClient<S>,
}

impl<S: TokenStore> TodoApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    /// List todos. Single-wrap envelope, each row projected to the UI shape.
    pub async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let envelope: Envelope<Vec<TodoRecord>> = self.client.get("/todos").await?;
        Ok(envelope
            .into_inner()
            .into_iter()
            .map(TodoRecord::into_todo)
            .collect())
    }

    pub async fn create(&self, text: &str) -> Result<Todo, ApiError> {
        let envelope: Envelope<TodoRecord> =
            self.client.post("/todos", &NewTodo::from_text(text)).await?;
        Ok(envelope.into_inner().into_todo())
    }

    pub async fn update(&self, id: u64, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let envelope: Envelope<TodoRecord> =
            self.client.put(&format!("/todos/{id}"), patch).await?;
        Ok(envelope.into_inner().into_todo())
    }

    /// [`update`](Self::update) restricted to the completion flag.
    pub async fn toggle(&self, id: u64, completed: bool) -> Result<Todo, ApiError> {
        self.update(id, &TodoPatch::completion(completed)).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/todos/{id}")).await
    }
}

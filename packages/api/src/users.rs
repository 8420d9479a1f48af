use store::TokenStore;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::models::{NewUser, User, UserPatch};

/// Client for `/users`. Field names pass through unchanged; every endpoint
/// uses the single-wrap envelope.
#[derive(Clone)]
pub struct UserApi<S: TokenStore> {
    client: ApiClient<S>,
}

impl<S: TokenStore> UserApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let envelope: Envelope<Vec<User>> = self.client.get("/users").await?;
        Ok(envelope.into_inner())
    }

    pub async fn get(&self, id: u64) -> Result<User, ApiError> {
        let envelope: Envelope<User> = self.client.get(&format!("/users/{id}")).await?;
        Ok(envelope.into_inner())
    }

    pub async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let envelope: Envelope<User> = self.client.post("/users", user).await?;
        Ok(envelope.into_inner())
    }

    pub async fn update(&self, id: u64, patch: &UserPatch) -> Result<User, ApiError> {
        let envelope: Envelope<User> = self.client.put(&format!("/users/{id}"), patch).await?;
        Ok(envelope.into_inner())
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/users/{id}")).await
    }
}

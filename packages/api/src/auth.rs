use store::TokenStore;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::models::{AuthPayload, CurrentUser, LoginCredentials, RegisterCredentials, User};

/// Client for `/auth/*`. Pure transport adapter — token bookkeeping belongs
/// to [`crate::Session`], which drives this.
#[derive(Clone)]
pub struct AuthApi<S: TokenStore> {
    client: ApiClient<S>,
}

impl<S: TokenStore> AuthApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthPayload, ApiError> {
        let envelope: Envelope<AuthPayload> = self.client.post("/auth/login", credentials).await?;
        Ok(envelope.into_inner())
    }

    pub async fn register(
        &self,
        credentials: &RegisterCredentials,
    ) -> Result<AuthPayload, ApiError> {
        let envelope: Envelope<AuthPayload> =
            self.client.post("/auth/register", credentials).await?;
        Ok(envelope.into_inner())
    }

    /// Invalidate the token server-side. The response carries nothing the
    /// client needs.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.post_unit("/auth/logout").await
    }

    /// Resolve the bearer token currently attached by the client to its user.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let envelope: Envelope<CurrentUser> = self.client.get("/auth/user").await?;
        Ok(envelope.into_inner().user)
    }
}

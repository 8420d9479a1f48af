use store::TokenStore;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::models::PortfolioProject;

/// Client for `/portfolio-projects`. Read-only; the backend exposes no
/// mutation endpoints for this resource.
#[derive(Clone)]
pub struct ProjectApi<S: TokenStore> {
    client: ApiClient<S>,
}

impl<S: TokenStore> ProjectApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<PortfolioProject>, ApiError> {
        let envelope: Envelope<Vec<PortfolioProject>> =
            self.client.get("/portfolio-projects").await?;
        Ok(envelope.into_inner())
    }
}

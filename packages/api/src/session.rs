use store::TokenStore;

use crate::auth::AuthApi;
use crate::error::ApiError;
use crate::models::{LoginCredentials, RegisterCredentials, User};

/// Client-side authentication session.
///
/// Owns the current user and token and the rules for moving between
/// authenticated and unauthenticated. The token store is shared with the
/// HTTP client, so every request automatically carries whatever credential
/// this session last persisted.
///
/// Lifecycle: construct empty, [`restore`](Session::restore) once at startup,
/// then [`login`](Session::login)/[`register`](Session::register)/
/// [`logout`](Session::logout) as the user acts. `is_authenticated` is
/// derived from the user/token pair on every read and never stored.
#[derive(Clone)]
pub struct Session<S: TokenStore> {
    auth: AuthApi<S>,
    tokens: S,
    user: Option<User>,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    pub fn new(auth: AuthApi<S>, tokens: S) -> Self {
        Self {
            auth,
            tokens,
            user: None,
            token: None,
        }
    }

    /// Revalidate a persisted token on startup.
    ///
    /// No persisted token means the session simply starts unauthenticated.
    /// A persisted token is checked against `/auth/user`; any failure —
    /// expired token, unreachable backend — clears it and leaves the session
    /// unauthenticated. That failure is swallowed: startup is not a user
    /// action with a form to attach an error to.
    pub async fn restore(&mut self) {
        let Some(token) = self.tokens.get() else {
            return;
        };
        match self.auth.current_user().await {
            Ok(user) => {
                self.user = Some(user);
                self.token = Some(token);
            }
            Err(err) => {
                tracing::debug!("persisted token rejected: {err}");
                self.tokens.clear();
                self.user = None;
                self.token = None;
            }
        }
    }

    /// Exchange credentials for a session. On failure the error propagates
    /// to the caller (rendered as a form error) and state is unchanged.
    pub async fn login(&mut self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        let payload = self.auth.login(credentials).await?;
        self.establish(payload.user, payload.token);
        Ok(())
    }

    /// Symmetric to [`login`](Session::login). Password-confirmation checks
    /// are the caller's job ([`RegisterCredentials::validate`]) — by the time
    /// this runs, the credentials are assumed well-formed.
    pub async fn register(&mut self, credentials: &RegisterCredentials) -> Result<(), ApiError> {
        let payload = self.auth.register(credentials).await?;
        self.establish(payload.user, payload.token);
        Ok(())
    }

    /// End the session. The remote invalidation is best-effort: its failure
    /// is logged and ignored, and the local session is torn down either way.
    pub async fn logout(&mut self) {
        if self.token.is_some() {
            if let Err(err) = self.auth.logout().await {
                tracing::error!("logout request failed: {err}");
            }
        }
        self.tokens.clear();
        self.user = None;
        self.token = None;
    }

    fn establish(&mut self, user: User, token: String) {
        self.tokens.set(&token);
        self.user = Some(user);
        self.token = Some(token);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Derived on every read; never cached where it could diverge.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

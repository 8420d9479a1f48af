//! View-state for the user registry (admin screen).

use api::{ApiError, NewUser, User, UserApi, UserPatch};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::client::make_client;

/// Everything [`use_users`] holds.
#[derive(Clone, Default)]
pub struct UserList {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Handle over the user list state.
#[derive(Clone, Copy)]
pub struct UseUsers {
    state: Signal<UserList>,
}

/// User list state, fetched once the session is authenticated.
pub fn use_users() -> UseUsers {
    let state = use_signal(UserList::default);
    let users = UseUsers { state };
    let auth = use_auth();

    use_effect(move || {
        if auth().is_authenticated() {
            spawn(async move {
                users.fetch_all().await;
            });
        } else {
            users.reset();
        }
    });

    users
}

impl UseUsers {
    pub fn read(&self) -> UserList {
        (self.state)()
    }

    fn reset(mut self) {
        self.state.set(UserList::default());
    }

    pub async fn fetch_all(mut self) {
        let mut next = self.read();
        next.loading = true;
        next.error = None;
        self.state.set(next);

        let result = UserApi::new(make_client()).list().await;

        let mut next = self.read();
        match result {
            Ok(users) => next.users = users,
            Err(err) => next.error = Some(err.to_string()),
        }
        next.loading = false;
        self.state.set(next);
    }

    /// Create a user and append the confirmed record. Re-throws so the form
    /// can keep its input on failure.
    pub async fn create(mut self, user: NewUser) -> Result<User, ApiError> {
        let mut next = self.read();
        next.error = None;
        self.state.set(next);

        let result = UserApi::new(make_client()).create(&user).await;

        let mut next = self.read();
        match &result {
            Ok(created) => next.users.push(created.clone()),
            Err(err) => next.error = Some(err.to_string()),
        }
        self.state.set(next);

        result
    }

    /// Update a user and replace the record in place by id.
    pub async fn update(mut self, id: u64, patch: UserPatch) -> Result<User, ApiError> {
        let mut next = self.read();
        next.error = None;
        self.state.set(next);

        let result = UserApi::new(make_client()).update(id, &patch).await;

        let mut next = self.read();
        match &result {
            Ok(updated) => {
                if let Some(slot) = next.users.iter_mut().find(|user| user.id == id) {
                    *slot = updated.clone();
                }
            }
            Err(err) => next.error = Some(err.to_string()),
        }
        self.state.set(next);

        result
    }

    /// Delete on the server, then drop the record locally.
    pub async fn remove(mut self, id: u64) -> Result<(), ApiError> {
        let mut next = self.read();
        next.error = None;
        self.state.set(next);

        let result = UserApi::new(make_client()).delete(id).await;

        let mut next = self.read();
        match &result {
            Ok(()) => next.users.retain(|user| user.id != id),
            Err(err) => next.error = Some(err.to_string()),
        }
        self.state.set(next);

        result
    }
}

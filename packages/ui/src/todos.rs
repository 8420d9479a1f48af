//! View-state for the todo list.
//!
//! [`use_todos`] hands views a [`UseTodos`] handle over a single signal
//! holding the full list plus its flags. Filtering and counts are derived
//! from the full list on every read — they are never stored where they could
//! drift out of sync. Mutations edit the in-memory list from the server's
//! confirmed response (prepend on create, in-place replace on toggle,
//! filter-out on delete) without a verifying re-fetch; concurrent mutations
//! settle last-write-wins.

use api::{ApiError, Todo, TodoApi};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::client::make_client;

/// Tri-state list filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TodoFilter {
    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Pending => "Pending",
            TodoFilter::Completed => "Completed",
        }
    }

    fn accepts(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Pending => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }
}

/// Counts derived from the full list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TodoStats {
    pub fn count_for(&self, filter: TodoFilter) -> usize {
        match filter {
            TodoFilter::All => self.total,
            TodoFilter::Pending => self.pending,
            TodoFilter::Completed => self.completed,
        }
    }

    pub fn percent_complete(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.completed * 100 / self.total
        }
    }
}

/// Everything [`use_todos`] holds.
#[derive(Clone, Default)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub filter: TodoFilter,
    pub loading: bool,
    pub creating: bool,
    pub error: Option<String>,
}

impl TodoList {
    /// The list as seen through the active filter.
    pub fn filtered(&self) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filter.accepts(todo))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> TodoStats {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|todo| todo.completed).count();
        TodoStats {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// Fold a fetch result in: success replaces the list, failure records the
    /// message and keeps the previous items. Loading drops either way.
    fn apply_fetch(&mut self, result: Result<Vec<Todo>, ApiError>) {
        match result {
            Ok(items) => self.todos = items,
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }
}

/// The completion value a toggle of `id` should send, or `None` when the
/// item is unknown locally (in which case no request is made at all).
fn next_completion(todos: &[Todo], id: u64) -> Option<bool> {
    todos.iter().find(|todo| todo.id == id).map(|todo| !todo.completed)
}

/// Handle over the todo list state; `Copy`, so event handlers can capture it
/// freely.
#[derive(Clone, Copy)]
pub struct UseTodos {
    state: Signal<TodoList>,
}

/// Todo list state, fetched once the session is authenticated.
pub fn use_todos() -> UseTodos {
    let state = use_signal(TodoList::default);
    let todos = UseTodos { state };
    let auth = use_auth();

    // Fetch only with a live session; an unauthenticated fetch would just
    // bounce off a 401. When the session goes away, drop local state too.
    use_effect(move || {
        if auth().is_authenticated() {
            spawn(async move {
                todos.fetch_all().await;
            });
        } else {
            todos.reset();
        }
    });

    todos
}

impl UseTodos {
    pub fn read(&self) -> TodoList {
        (self.state)()
    }

    fn reset(mut self) {
        self.state.set(TodoList::default());
    }

    pub fn set_filter(mut self, filter: TodoFilter) {
        let mut next = self.read();
        next.filter = filter;
        self.state.set(next);
    }

    /// Replace the list from the server. `loading` always drops again,
    /// success or failure, and a failure leaves the previous items in place.
    pub async fn fetch_all(mut self) {
        let mut next = self.read();
        next.loading = true;
        next.error = None;
        self.state.set(next);

        let result = TodoApi::new(make_client()).list().await;

        let mut next = self.read();
        next.apply_fetch(result);
        self.state.set(next);
    }

    /// Create a todo and prepend the confirmed item. The error is recorded
    /// *and* re-thrown so the form can react (keep the draft text).
    pub async fn add(mut self, text: String) -> Result<Todo, ApiError> {
        let mut next = self.read();
        next.creating = true;
        next.error = None;
        self.state.set(next);

        let result = TodoApi::new(make_client()).create(&text).await;

        let mut next = self.read();
        match &result {
            Ok(todo) => next.todos.insert(0, todo.clone()),
            Err(err) => next.error = Some(err.to_string()),
        }
        next.creating = false;
        self.state.set(next);

        result
    }

    /// Flip completion. Unknown ids are a local no-op; the in-memory flip
    /// happens only once the server has confirmed.
    pub async fn toggle(mut self, id: u64) {
        let Some(completed) = next_completion(&self.read().todos, id) else {
            return;
        };

        let mut next = self.read();
        next.error = None;
        self.state.set(next);

        match TodoApi::new(make_client()).toggle(id, completed).await {
            Ok(updated) => {
                let mut next = self.read();
                if let Some(slot) = next.todos.iter_mut().find(|todo| todo.id == id) {
                    *slot = updated;
                }
                self.state.set(next);
            }
            Err(err) => {
                let mut next = self.read();
                next.error = Some(err.to_string());
                self.state.set(next);
            }
        }
    }

    /// Delete on the server, then drop the item locally. On failure the item
    /// stays and the error is surfaced.
    pub async fn remove(mut self, id: u64) {
        let mut next = self.read();
        next.error = None;
        self.state.set(next);

        match TodoApi::new(make_client()).delete(id).await {
            Ok(()) => {
                let mut next = self.read();
                next.todos.retain(|todo| todo.id != id);
                self.state.set(next);
            }
            Err(err) => {
                let mut next = self.read();
                next.error = Some(err.to_string());
                self.state.set(next);
            }
        }
    }
}

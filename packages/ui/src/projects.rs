//! View-state for the portfolio project list: a read-only fetch plus a
//! client-side search query.

use api::{PortfolioProject, ProjectApi};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::client::make_client;

/// Everything [`use_projects`] holds.
#[derive(Clone, Default)]
pub struct ProjectList {
    pub projects: Vec<PortfolioProject>,
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProjectList {
    /// Projects matching the current query; derived on every read.
    pub fn filtered(&self) -> Vec<PortfolioProject> {
        self.projects
            .iter()
            .filter(|project| project.matches(&self.query))
            .cloned()
            .collect()
    }
}

/// Handle over the project list state.
#[derive(Clone, Copy)]
pub struct UseProjects {
    state: Signal<ProjectList>,
}

/// Project list state, fetched once the session is authenticated.
pub fn use_projects() -> UseProjects {
    let state = use_signal(ProjectList::default);
    let projects = UseProjects { state };
    let auth = use_auth();

    use_effect(move || {
        if auth().is_authenticated() {
            spawn(async move {
                projects.fetch_all().await;
            });
        } else {
            projects.reset();
        }
    });

    projects
}

impl UseProjects {
    pub fn read(&self) -> ProjectList {
        (self.state)()
    }

    fn reset(mut self) {
        self.state.set(ProjectList::default());
    }

    pub fn set_query(mut self, query: String) {
        let mut next = self.read();
        next.query = query;
        self.state.set(next);
    }

    pub async fn fetch_all(mut self) {
        let mut next = self.read();
        next.loading = true;
        next.error = None;
        self.state.set(next);

        let result = ProjectApi::new(make_client()).list().await;

        let mut next = self.read();
        match result {
            Ok(projects) => next.projects = projects,
            Err(err) => next.error = Some(err.to_string()),
        }
        next.loading = false;
        self.state.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u64, title: &str, status: &str) -> PortfolioProject {
        PortfolioProject {
            id,
            title: title.to_string(),
            position: "Engineer".to_string(),
            status: status.to_string(),
            description: String::new(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_query_narrows_the_list() {
        let state = ProjectList {
            projects: vec![
                project(1, "Realtime dashboard", "Done"),
                project(2, "Batch importer", "In progress"),
            ],
            query: "dash".to_string(),
            ..ProjectList::default()
        };
        let filtered = state.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let state = ProjectList {
            projects: vec![project(1, "A", "Done"), project(2, "B", "Done")],
            ..ProjectList::default()
        };
        assert_eq!(state.filtered().len(), 2);
    }
}

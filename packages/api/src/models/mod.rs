mod auth;
mod project;
mod todo;
mod user;

pub use auth::{AuthPayload, CurrentUser, LoginCredentials, RegisterCredentials};
pub use project::PortfolioProject;
pub use todo::{NewTodo, Todo, TodoPatch, TodoRecord};
pub use user::{NewUser, User, UserPatch};

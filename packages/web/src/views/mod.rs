mod header;
pub use header::Header;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod todos;
pub use todos::Todos;

mod users;
pub use users::Users;

mod projects;
pub use projects::Projects;

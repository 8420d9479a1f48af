//! Small building blocks the views share.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod feedback;
pub use feedback::{ErrorMessage, Spinner};

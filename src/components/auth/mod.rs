pub mod auth_form;
pub mod logout;

pub use auth_form::{AuthForm, AuthMode};
pub use logout::Logout;

pub mod auth;
pub mod perf;
pub mod session;
pub mod user;

pub use auth::*;
pub use perf::*;
pub use session::*;
pub use user::*;

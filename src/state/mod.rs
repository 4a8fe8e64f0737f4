pub mod notification;
pub mod redirect;

pub use notification::{Notification, NotifyStatus};
pub use redirect::resolve_redirect;

pub mod auth_service;
pub mod perf_service;

pub use auth_service::*;
pub use perf_service::*;

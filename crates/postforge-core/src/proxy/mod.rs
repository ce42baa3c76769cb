//! HTTP surface: shared state, handlers and router for the generate API.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::{build_proxy_router, AppState};

//! HTTP request layer over the model manager and syntax registry

pub mod handler;
pub mod server;

pub use handler::{ApiError, ApiResult};
pub use server::{router, AppState, HttpServer};

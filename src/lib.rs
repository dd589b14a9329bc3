//! hello-docker: a single-endpoint greeting service.
//!
//! `GET /hello` answers with a fixed greeting. The library exposes the router
//! and server pieces so the binary and the integration tests share them.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::{create_router, hello::GREETING};

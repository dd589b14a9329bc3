//! HTTP server module.
//!
//! Binds the configured address and serves the router until SIGTERM or
//! SIGINT, then drains open connections before returning.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};

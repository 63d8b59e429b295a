//! HTTP server module.
//!
//! Serves plain HTTP through `axum-server` and drains in-flight connections
//! on SIGTERM/SIGINT before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};

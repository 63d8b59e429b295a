//! echo-status: an HTTP service answering every request with a JSON status
//! payload (a greeting, a status line and the current UTC time).
//!
//! The library exposes the router so it can be driven in-process by tests;
//! the binary in `main.rs` adds configuration, logging and the server loop.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::{create_router, with_layers};
pub use routes::status::StatusResponse;

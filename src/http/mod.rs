//! HTTP server module.
//!
//! Binds the router to the configured address and drains connections
//! gracefully on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};

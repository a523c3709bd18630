//! Weathercast - weather forecast HTTP endpoint
//!
//! Library exports shared between the binary and integration tests.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::*;

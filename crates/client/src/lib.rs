//! HTTP client for the flight backend.

pub mod config;
pub mod http;
pub mod wire;

pub use config::*;
pub use http::*;

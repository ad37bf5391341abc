//! HTTP front-end for the `ziptemp` service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and resolving configuration
//! - Exposing `GET /{postal_code}` over HTTP
//! - Translating lookup failures into JSON error responses

pub mod cli;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use routes::create_router;
pub use state::AppState;

//! Dooray project API client
//!
//! - **config**: base URL, credential and timeout, resolved once at startup
//! - **api_client**: GET/POST/PUT/DELETE dispatch with auth headers
//! - **envelope**: `{header, result}` unwrapping and list normalization
//! - **models**: outgoing payload and query-string types
//! - **lookup**: task resolution by project code and display number

pub mod api_client;
pub mod config;
pub mod envelope;
pub mod error;
mod lookup;
pub mod models;

#[cfg(test)]
mod lookup_test;

pub use api_client::{DoorayClient, segment};
pub use config::Config;
pub use error::{DoorayError, DoorayResult};
pub use lookup::TaskLookup;

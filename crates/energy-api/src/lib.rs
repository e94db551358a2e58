// File: crates/energy-api/src/lib.rs
// Summary: Library entry point; exports the API client, wire types and errors.

pub mod client;
pub mod error;
pub mod types;

mod analytics;
mod appliances;
mod auth;
mod groups;
mod tariffs;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use types::*;

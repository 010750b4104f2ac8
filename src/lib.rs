pub mod api;
pub mod config;
pub mod error;
pub mod gcp;
pub mod models;
pub mod output;
pub mod prompt;
pub mod services;
pub mod store;
pub mod utils;

pub use error::{ApiError, ZopError};

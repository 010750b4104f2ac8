// Zop API access
pub mod client;
pub mod response;

pub use client::ApiClient;
pub use response::{decode_data, error_from_response, read_api_error, DataEnvelope};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, ZopError};

/// Every Zop API payload is wrapped in `{"data": ...}`
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Read the body and decode the value under `data`.
///
/// Returns the raw decode error message so callers can log it before
/// mapping it onto their own error variant.
pub async fn decode_data<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, String> {
    let bytes = resp.bytes().await.map_err(|e| e.to_string())?;
    serde_json::from_slice::<DataEnvelope<T>>(&bytes)
        .map(|env| env.data)
        .map_err(|e| e.to_string())
}

/// Turn a non-success response into the server's structured error.
///
/// A body without a readable `error` field yields `None`; callers pick
/// their own fallback.
pub async fn read_api_error(resp: reqwest::Response) -> Option<ApiError> {
    let status = resp.status().as_u16();
    let bytes = resp.bytes().await.ok()?;
    let body: ErrorBody = serde_json::from_slice(&bytes).ok()?;
    Some(ApiError::new(status, body.error))
}

/// Structured error when decodable, [`ZopError::Unknown`] otherwise
pub async fn error_from_response(resp: reqwest::Response) -> ZopError {
    match read_api_error(resp).await {
        Some(err) => ZopError::Api(err),
        None => ZopError::Unknown,
    }
}

/// Error types shared by every zop command
use thiserror::Error;

/// Structured error returned by the Zop API in a non-success response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// Message taken from the `error` field of the response body
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ZopError {
    /// The request never reached the Zop API
    #[error("unable to connect to Zop API")]
    ConnectingZopApi,

    /// The options response could not be decoded
    #[error("unable to get deployment options")]
    GettingDeploymentOptions,

    #[error("no options available for selection")]
    NoOptionsFound,

    /// The user left a selection list without choosing anything
    #[error("no {0} selected")]
    NoItemSelected(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("unknown error occurred while processing the request")]
    Unknown,

    /// Two options disagree on the shape of the request document
    #[error("conflicting value in deployment request at '{0}'")]
    DocumentConflict(String),

    #[error("unable to render the list")]
    RenderList,

    #[error("unable to fetch cloud accounts")]
    FetchingCloudAccounts,

    #[error("unable to fetch environments")]
    FetchingEnvironments,

    #[error("unable to add environment")]
    AddingEnvironment,

    /// The gcloud user token could not be refreshed; `gcloud auth login` fixes it
    #[error("invalid or expired token, please login again")]
    InvalidOrExpiredToken,

    #[error("GCP error: {0}")]
    Gcp(String),

    #[error("unable to read local credentials: {0}")]
    CredentialStore(#[from] sqlx::Error),

    #[error("invalid credentials: {0}")]
    Credentials(#[from] serde_json::Error),

    #[error("failed to create HTTP client: {0}")]
    HttpClient(String),
}

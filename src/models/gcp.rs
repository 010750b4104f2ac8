use serde::{Deserialize, Serialize};

/// Row of the gcloud `credentials` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StoredCredential {
    pub account_id: String,
    pub value: Vec<u8>,
}

/// Google service account key file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(default, rename = "type")]
    pub key_type: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub auth_uri: String,
    #[serde(default)]
    pub token_uri: String,
    #[serde(default)]
    pub auth_provider_x509_cert_url: String,
    #[serde(default)]
    pub client_x509_cert_url: String,
    #[serde(default)]
    pub universe_domain: String,
}

/// gcloud user login (refresh token flow)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserCredentials {
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

/// Body of `POST cloud-accounts`
#[derive(Debug, Clone, Serialize)]
pub struct CloudAccountRequest<'a> {
    pub name: &'a str,
    pub provider: &'a str,
    pub credentials: &'a ServiceAccountKey,
}

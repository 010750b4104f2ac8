//! Exchange of local gcloud credentials for service account keys.
//!
//! A stored credential is either already a service account key, in which
//! case it is used as is, or a user login. For a user login a fresh
//! service account is provisioned in every project the user can reach.

pub mod resources;

use base64::prelude::*;
use chrono::Utc;
use serde_json::json;

use crate::config;
use crate::error::ZopError;
use crate::models::{ServiceAccountKey, UserCredentials};
use resources::{Policy, ProjectList, ServiceAccount, ServiceAccountKeyResource, TokenResponse};

/// Roles granted to every provisioned service account
pub const SERVICE_ACCOUNT_ROLES: &[&str] = &[
    "roles/editor",
    "roles/container.admin",
    "roles/resourcemanager.projectIamAdmin",
    "roles/iam.roleAdmin",
    "roles/secretmanager.admin",
    "roles/servicenetworking.networksAdmin",
    "roles/storage.admin",
    "roles/dns.admin",
    "roles/artifactregistry.admin",
    "roles/pubsub.admin",
];

/// Base URLs of the Google APIs in use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcpEndpoints {
    pub token_url: String,
    pub resource_manager_url: String,
    pub iam_url: String,
}

impl GcpEndpoints {
    pub fn from_env() -> Self {
        Self {
            token_url: config::get_gcp_token_url(),
            resource_manager_url: config::get_gcp_resource_manager_url(),
            iam_url: config::get_gcp_iam_url(),
        }
    }

    /// Every API served from one base URL
    pub fn single(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            token_url: base.clone(),
            resource_manager_url: base.clone(),
            iam_url: base,
        }
    }
}

impl Default for GcpEndpoints {
    fn default() -> Self {
        Self {
            token_url: config::DEFAULT_GCP_TOKEN_URL.to_string(),
            resource_manager_url: config::DEFAULT_GCP_RESOURCE_MANAGER_URL.to_string(),
            iam_url: config::DEFAULT_GCP_IAM_URL.to_string(),
        }
    }
}

pub struct GcpClient {
    client: reqwest::Client,
    endpoints: GcpEndpoints,
}

impl GcpClient {
    pub fn new(endpoints: GcpEndpoints) -> Result<Self, ZopError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("zop/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ZopError::HttpClient(e.to_string()))?;
        Ok(Self { client, endpoints })
    }

    /// Service account keys usable for the stored credential `value`
    pub async fn service_accounts(&self, value: &[u8]) -> Result<Vec<ServiceAccountKey>, ZopError> {
        let key: ServiceAccountKey = serde_json::from_slice(value)?;
        if !key.private_key.is_empty() {
            return Ok(vec![key]);
        }
        self.generate_service_accounts(value).await
    }

    async fn generate_service_accounts(&self, value: &[u8]) -> Result<Vec<ServiceAccountKey>, ZopError> {
        let creds: UserCredentials = serde_json::from_slice(value)?;

        let token = self.refresh_access_token(&creds).await.map_err(|e| {
            tracing::error!(%e, "unable to refresh gcloud access token");
            ZopError::InvalidOrExpiredToken
        })?;

        let projects = self.list_projects(&token).await?;
        tracing::debug!("Found {} projects", projects.projects.len());

        let mut keys = Vec::new();
        for project in projects.projects {
            let account_name = format!("zop-dev-{}", Utc::now().timestamp());
            match self.provision(&token, &project.project_id, &account_name).await {
                Ok(key) => keys.push(key),
                Err(e) => {
                    tracing::error!(%e, project = %project.project_id, "skipping project");
                }
            }
        }
        Ok(keys)
    }

    async fn provision(&self, token: &str, project_id: &str, account_name: &str) -> Result<ServiceAccountKey, ZopError> {
        self.check_project_access(token, project_id).await?;

        let account = self.create_service_account(token, project_id, account_name).await?;
        let key = self.create_service_account_key(token, &account).await?;

        let decoded = BASE64_STANDARD
            .decode(key.private_key_data.as_bytes())
            .map_err(|e| ZopError::Gcp(format!("failed to decode key data: {}", e)))?;

        self.assign_roles(token, project_id, &account).await?;

        Ok(serde_json::from_slice(&decoded)?)
    }

    async fn refresh_access_token(&self, creds: &UserCredentials) -> Result<String, ZopError> {
        let url = format!("{}/token", self.endpoints.token_url);
        let form = [
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("refresh_token", creds.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];
        let resp = self.client.post(&url).form(&form).send().await;
        let resp = checked(resp, "failed to refresh token").await?;
        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| ZopError::Gcp(format!("failed to decode token response: {}", e)))?;
        Ok(token.access_token)
    }

    async fn list_projects(&self, token: &str) -> Result<ProjectList, ZopError> {
        let url = format!("{}/v1/projects", self.endpoints.resource_manager_url);
        let resp = self.client.get(&url).bearer_auth(token).send().await;
        let resp = checked(resp, "failed to list projects").await?;
        resp.json()
            .await
            .map_err(|e| ZopError::Gcp(format!("failed to decode projects: {}", e)))
    }

    async fn check_project_access(&self, token: &str, project_id: &str) -> Result<(), ZopError> {
        let url = format!("{}/v1/projects/{}", self.endpoints.resource_manager_url, project_id);
        let resp = self.client.get(&url).bearer_auth(token).send().await;
        checked(resp, &format!("project {} is not accessible", project_id)).await?;
        Ok(())
    }

    async fn create_service_account(
        &self,
        token: &str,
        project_id: &str,
        account_name: &str,
    ) -> Result<ServiceAccount, ZopError> {
        let email = format!("{}@{}.iam.gserviceaccount.com", account_name, project_id);
        let existing = format!(
            "{}/v1/projects/{}/serviceAccounts/{}",
            self.endpoints.iam_url, project_id, email
        );
        if let Ok(resp) = self.client.get(&existing).bearer_auth(token).send().await {
            if resp.status().is_success() {
                return Err(ZopError::Gcp(format!("service account {} already exists", email)));
            }
        }

        let url = format!("{}/v1/projects/{}/serviceAccounts", self.endpoints.iam_url, project_id);
        let body = json!({
            "accountId": account_name,
            "serviceAccount": {
                "displayName": account_name,
                "description": "Service account for ZOP",
            }
        });
        let resp = self.client.post(&url).bearer_auth(token).json(&body).send().await;
        let resp = checked(resp, "failed to create service account").await?;
        resp.json()
            .await
            .map_err(|e| ZopError::Gcp(format!("failed to decode service account: {}", e)))
    }

    async fn create_service_account_key(
        &self,
        token: &str,
        account: &ServiceAccount,
    ) -> Result<ServiceAccountKeyResource, ZopError> {
        let url = format!("{}/v1/{}/keys", self.endpoints.iam_url, account.name);
        let body = json!({"privateKeyType": "TYPE_GOOGLE_CREDENTIALS_FILE"});
        let resp = self.client.post(&url).bearer_auth(token).json(&body).send().await;
        let resp = checked(resp, "failed to create service account key").await?;
        resp.json()
            .await
            .map_err(|e| ZopError::Gcp(format!("failed to decode service account key: {}", e)))
    }

    async fn assign_roles(&self, token: &str, project_id: &str, account: &ServiceAccount) -> Result<(), ZopError> {
        let base = format!("{}/v1/projects/{}", self.endpoints.resource_manager_url, project_id);

        let resp = self
            .client
            .post(format!("{}:getIamPolicy", base))
            .bearer_auth(token)
            .json(&json!({}))
            .send()
            .await;
        let resp = checked(resp, "failed to get IAM policy").await?;
        let mut policy: Policy = resp
            .json()
            .await
            .map_err(|e| ZopError::Gcp(format!("failed to decode IAM policy: {}", e)))?;

        policy.grant(&format!("serviceAccount:{}", account.email), SERVICE_ACCOUNT_ROLES);

        let resp = self
            .client
            .post(format!("{}:setIamPolicy", base))
            .bearer_auth(token)
            .json(&json!({"policy": policy}))
            .send()
            .await;
        checked(resp, "failed to set IAM policy").await?;
        Ok(())
    }
}

/// Map transport failures and non-success statuses onto [`ZopError::Gcp`]
async fn checked(
    resp: Result<reqwest::Response, reqwest::Error>,
    context: &str,
) -> Result<reqwest::Response, ZopError> {
    let resp = resp.map_err(|e| ZopError::Gcp(format!("{}: {}", context, e)))?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_else(|_| "Unknown error".to_string());
    Err(ZopError::Gcp(format!("{}: HTTP {}: {}", context, status, text)))
}

//! Wire types of the Google OAuth2, Cloud Resource Manager and IAM APIs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectList {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    /// `projects/{project}/serviceAccounts/{email}`
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountKeyResource {
    /// Base64 of the key file JSON
    pub private_key_data: String,
}

/// IAM policy; `etag`, `version` and friends ride along in `extra` so the
/// policy round-trips through `setIamPolicy` unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default)]
    pub bindings: Vec<Binding>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binding {
    pub role: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Policy {
    /// Add `member` to each role, creating bindings that do not exist yet
    pub fn grant(&mut self, member: &str, roles: &[&str]) {
        for role in roles {
            match self.bindings.iter_mut().find(|b| b.role == *role) {
                Some(binding) => {
                    if !binding.members.iter().any(|m| m == member) {
                        binding.members.push(member.to_string());
                    }
                }
                None => self.bindings.push(Binding {
                    role: role.to_string(),
                    members: vec![member.to_string()],
                    extra: Map::new(),
                }),
            }
        }
    }
}

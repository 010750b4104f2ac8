use std::env;
use std::path::{Path, PathBuf};

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_GCP_TOKEN_URL: &str = "https://oauth2.googleapis.com";
pub const DEFAULT_GCP_RESOURCE_MANAGER_URL: &str = "https://cloudresourcemanager.googleapis.com";
pub const DEFAULT_GCP_IAM_URL: &str = "https://iam.googleapis.com";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("ZOP_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_gcp_token_url() -> String {
    env_url_or("GCP_TOKEN_URL", DEFAULT_GCP_TOKEN_URL)
}

pub fn get_gcp_resource_manager_url() -> String {
    env_url_or("GCP_RESOURCE_MANAGER_URL", DEFAULT_GCP_RESOURCE_MANAGER_URL)
}

pub fn get_gcp_iam_url() -> String {
    env_url_or("GCP_IAM_URL", DEFAULT_GCP_IAM_URL)
}

/// Location of the gcloud credentials database.
///
/// `GCLOUD_CREDENTIALS_DB` wins; otherwise `~/.config/gcloud/credentials.db`.
pub fn get_gcloud_credentials_path() -> Option<PathBuf> {
    if let Ok(p) = env::var("GCLOUD_CREDENTIALS_DB") {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p.trim()));
        }
    }
    directories_next::BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("gcloud")
            .join("credentials.db")
    })
}

fn env_url_or(key: &str, default: &str) -> String {
    let raw = env::var(key).unwrap_or_default();
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "http://localhost:8000".to_string()
    } else {
        trimmed.to_string()
    }
}

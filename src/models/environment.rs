use serde::{Deserialize, Serialize};

/// An environment of an application (e.g. `dev`, `prod`).
///
/// Older API builds answer with capitalised keys, hence the aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(default, alias = "ID")]
    pub id: i64,
    #[serde(default, alias = "ApplicationID", alias = "applicationID")]
    pub application_id: i64,
    #[serde(default, alias = "Level")]
    pub level: i32,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
}

impl Environment {
    /// Body for `POST environments`
    pub fn new_for(application_id: i64, name: &str, level: i32) -> Self {
        Self {
            id: 0,
            application_id,
            level,
            name: name.to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single server-defined option. Always carries `name` and `type`;
/// everything else is provider specific and passed through untouched.
pub type DeploymentOption = Map<String, Value>;

/// Root entry returned by `cloud-accounts/{id}/deployment-space/options`.
///
/// `type` is the top-level key in the request document and `path` is the
/// first options page to fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentSpace {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of the option tree
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsPage {
    #[serde(default)]
    pub options: Vec<DeploymentOption>,
    #[serde(default)]
    pub next: Option<NextPage>,
    #[serde(default)]
    pub metadata: Option<PageMetadata>,
}

/// How to request the page that follows the current selection
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NextPage {
    #[serde(default)]
    pub name: String,
    pub path: String,
    /// Query parameter name -> key of the selected option holding its value
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageMetadata {
    #[serde(default)]
    pub name: String,
}

/// Read the display label of an option
pub fn option_name(option: &DeploymentOption) -> Option<&str> {
    option.get("name").and_then(Value::as_str)
}

/// Read the dot-separated type path of an option
pub fn option_type(option: &DeploymentOption) -> Option<&str> {
    option
        .get("type")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
}

impl OptionsPage {
    /// Every option carries a string `name` and a non-empty `type`
    pub fn is_well_formed(&self) -> bool {
        self.options
            .iter()
            .all(|o| option_name(o).is_some() && option_type(o).is_some())
    }

    /// Title shown above the option list
    pub fn prompt_title(&self) -> String {
        let name = self
            .metadata
            .as_ref()
            .map(|m| m.name.trim())
            .filter(|n| !n.is_empty())
            .unwrap_or("option");
        format!("Select the {}", name)
    }

    /// What the user was choosing, used when they abort the list
    pub fn selection_kind(&self) -> String {
        self.options
            .first()
            .and_then(option_type)
            .and_then(|t| t.split('.').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("option")
            .to_string()
    }

    /// Label of the progress line printed after `selected` is picked:
    /// the page's metadata name, else the option's full type path
    pub fn selected_label(&self, selected: &DeploymentOption) -> String {
        self.metadata
            .as_ref()
            .map(|m| m.name.trim())
            .filter(|n| !n.is_empty())
            .or_else(|| option_type(selected))
            .unwrap_or("option")
            .to_string()
    }
}

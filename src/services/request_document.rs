use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ZopError;
use crate::models::deployment::option_type;
use crate::models::DeploymentOption;

/// Body of `POST environments/{id}/deploymentspace`, built up one selected
/// option at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestDocument(Map<String, Value>);

impl RequestDocument {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set a top-level entry, replacing what was there
    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Store `option` at the path named by its `type` field.
    ///
    /// `"a.b.c"` lands at `doc["a"]["b"]["c"]`; missing intermediate
    /// objects are created. A non-object value anywhere along the path is
    /// never overwritten: the merge fails with
    /// [`ZopError::DocumentConflict`] instead.
    pub fn merge_option(&mut self, option: &DeploymentOption) -> Result<(), ZopError> {
        let type_path = option_type(option).ok_or(ZopError::GettingDeploymentOptions)?;
        let conflict = || ZopError::DocumentConflict(type_path.to_string());

        let mut keys = type_path.split('.').peekable();
        let mut current = &mut self.0;

        while let Some(key) = keys.next() {
            if keys.peek().is_none() {
                if let Some(existing) = current.get(key) {
                    if !existing.is_object() {
                        return Err(conflict());
                    }
                }
                current.insert(key.to_string(), Value::Object(option.clone()));
                return Ok(());
            }

            current = current
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .ok_or_else(conflict)?;
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cloud account as stored by the Zop API.
///
/// Keys the CLI does not know about are kept in `extra`, and defaulted
/// fields are left out on serialization, so the account is echoed back
/// as received inside a deployment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudAccount {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider_id: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub provider_details: Value,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_account_is_echoed_as_received() {
        let raw = json!({"id": 1, "name": "acc"});
        let acc: CloudAccount = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&acc).unwrap(), raw);
    }

    #[test]
    fn full_account_keeps_every_key() {
        let raw = json!({
            "id": 7,
            "name": "prod",
            "provider": "gcp",
            "providerId": "proj-7",
            "providerDetails": {"projectName": "proj-7"},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "region": "eu-west1"
        });
        let acc: CloudAccount = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(acc.extra["region"], "eu-west1");
        assert_eq!(serde_json::to_value(&acc).unwrap(), raw);
    }
}

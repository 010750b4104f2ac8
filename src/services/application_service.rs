use reqwest::StatusCode;
use serde_json::json;

use crate::api::{decode_data, read_api_error, ApiClient};
use crate::error::{ApiError, ZopError};
use crate::models::{Application, ApplicationEnvironment};
use crate::prompt::{choose, Item, Prompt};

/// Create application `name`, optionally with environments typed in by the
/// user. Levels are assigned in entry order starting at 1.
pub async fn add_application(api: &ApiClient, prompt: &dyn Prompt, name: &str) -> Result<(), ZopError> {
    let mut environments = Vec::new();

    if prompt.confirm("Do you wish to add environments to the application?")? {
        let mut level = 1;
        loop {
            let env_name = prompt.input("Enter environment name")?;
            environments.push(ApplicationEnvironment {
                name: env_name,
                level,
                deployment_space: None,
            });
            level += 1;

            if !prompt.confirm("Do you wish to add more?")? {
                break;
            }
        }
    }

    let body = json!({
        "name": name,
        "environments": environments,
    });
    let resp = api.post_json("applications", &body).await?;
    if resp.status() != StatusCode::CREATED {
        let status = resp.status();
        tracing::error!(%status, "unable to add application");
        return Err(read_api_error(resp)
            .await
            .unwrap_or_else(|| ApiError::new(500, "error in /applications zop-api, invalid response"))
            .into());
    }
    Ok(())
}

pub async fn list_applications(api: &ApiClient) -> Result<Vec<Application>, ZopError> {
    let resp = api.get("applications").await?;
    decode_data(resp).await.map_err(|e| {
        tracing::error!(%e, "unable to decode applications");
        ZopError::Api(ApiError::new(500, "Internal Server Error"))
    })
}

pub async fn select_application(api: &ApiClient, prompt: &dyn Prompt, title: &str) -> Result<Application, ZopError> {
    let apps = list_applications(api).await?;
    let items = apps
        .into_iter()
        .map(|app| Item::new(Some(app.id), app.name.clone(), app))
        .collect();
    choose(prompt, title, items)?.ok_or_else(|| ZopError::NoItemSelected("application".into()))
}

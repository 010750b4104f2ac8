use reqwest::StatusCode;
use yansi::Paint;

use crate::api::{decode_data, read_api_error, ApiClient};
use crate::error::ZopError;
use crate::models::Environment;
use crate::prompt::{choose, Item, Prompt};
use crate::services::application_service::select_application;

pub const ADD_APPLICATION_TITLE: &str = "Select the application where you want to add the environment!";
pub const LIST_APPLICATION_TITLE: &str = "Select the application whose environments you want to list!";
pub const DEPLOY_APPLICATION_TITLE: &str = "Select the application where you want to add the deployment!";
pub const DEPLOY_ENVIRONMENT_TITLE: &str = "Select the environment where you want to add the deployment!";

/// Add environments, one name at a time, to an application the user picks.
/// Returns how many were created.
pub async fn add_environments(api: &ApiClient, prompt: &dyn Prompt) -> Result<usize, ZopError> {
    let app = select_application(api, prompt, ADD_APPLICATION_TITLE).await?;

    println!("Selected application: {}", Paint::new(&app.name).cyan());
    println!("Please provide names of environments to be added...");

    let mut level = 1;
    let mut added = 0;
    loop {
        let name = prompt.input("Enter environment name")?;
        post_environment(api, &Environment::new_for(app.id, &name, level)).await?;
        added += 1;
        level += 1;

        if !prompt.confirm("Do you wish to add more?")? {
            break;
        }
    }

    Ok(added)
}

async fn post_environment(api: &ApiClient, env: &Environment) -> Result<(), ZopError> {
    let resp = api.post_json("environments", env).await?;
    if resp.status() != StatusCode::CREATED {
        let status = resp.status();
        match read_api_error(resp).await {
            Some(err) => tracing::error!(%status, message = %err.message, "unable to add environment"),
            None => tracing::error!(%status, "unable to add environment, could not decode error message"),
        }
        return Err(ZopError::AddingEnvironment);
    }
    Ok(())
}

pub async fn list_environments(api: &ApiClient, application_id: i64) -> Result<Vec<Environment>, ZopError> {
    let resp = api.get(&format!("applications/{}/environments", application_id)).await?;
    if !resp.status().is_success() {
        tracing::error!(status = %resp.status(), "unable to fetch environments");
        return Err(ZopError::FetchingEnvironments);
    }
    decode_data(resp).await.map_err(|e| {
        tracing::error!(%e, "unable to decode environments");
        ZopError::FetchingEnvironments
    })
}

/// Pick an application, then one of its environments
pub async fn select_environment(api: &ApiClient, prompt: &dyn Prompt) -> Result<Environment, ZopError> {
    let app = select_application(api, prompt, DEPLOY_APPLICATION_TITLE).await?;
    let envs = list_environments(api, app.id).await?;
    let items = envs
        .into_iter()
        .map(|env| Item::new(Some(env.id), env.name.clone(), env))
        .collect();
    choose(prompt, DEPLOY_ENVIRONMENT_TITLE, items)?.ok_or_else(|| ZopError::NoItemSelected("environment".into()))
}

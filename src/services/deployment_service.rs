//! Deployment space wizard.
//!
//! The API describes a deployment space as a chain of option pages. Each
//! page lists choices and may point at a next page whose query parameters
//! are taken from the choice just made. The wizard walks that chain with
//! the user, folds every choice into a [`RequestDocument`] and submits it
//! to the chosen environment.

use reqwest::StatusCode;
use serde_json::Value;
use yansi::Paint;

use crate::api::{decode_data, error_from_response, ApiClient};
use crate::error::ZopError;
use crate::models::deployment::option_name;
use crate::models::{CloudAccount, DeploymentOption, DeploymentSpace, Environment, NextPage, OptionsPage};
use crate::prompt::{choose, Item, Prompt};
use crate::services::cloud_service::select_account;
use crate::services::environment_service::select_environment;
use crate::services::request_document::RequestDocument;
use crate::utils::{build_options_query, value_to_plain_string};

pub const DEPLOYMENT_SPACE_TITLE: &str = "Select the deployment space where you want to add the deployment!";

pub struct DeploymentWizard<'a> {
    api: &'a ApiClient,
    prompt: &'a dyn Prompt,
}

impl<'a> DeploymentWizard<'a> {
    pub fn new(api: &'a ApiClient, prompt: &'a dyn Prompt) -> Self {
        Self { api, prompt }
    }

    /// Pick a cloud account and an environment, then run the wizard
    pub async fn add(&self) -> Result<(), ZopError> {
        let account = select_account(self.api, self.prompt).await?;
        println!("Selected cloud account: {}", Paint::new(&account.name).cyan());

        let env = select_environment(self.api, self.prompt).await?;
        println!("Selected environment: {}", Paint::new(&env.name).cyan());

        self.run(&account, &env).await
    }

    /// Walk the option tree of `account` and attach the result to `environment`
    pub async fn run(&self, account: &CloudAccount, environment: &Environment) -> Result<(), ZopError> {
        let space = self.select_deployment_space(account.id).await?;
        println!("Selected deployment space: {}", Paint::new(&space.name).cyan());

        let mut request = RequestDocument::new();
        request.insert("cloudAccount", to_value(account)?);
        request.insert(&space.kind, to_value(&space)?);

        self.resolve_options(&mut request, &space.path).await?;

        self.submit(environment.id, &request).await
    }

    async fn select_deployment_space(&self, account_id: i64) -> Result<DeploymentSpace, ZopError> {
        let resp = self
            .api
            .get(&format!("cloud-accounts/{}/deployment-space/options", account_id))
            .await?;
        let spaces: Vec<DeploymentSpace> = decode_data(resp).await.map_err(|e| {
            tracing::error!(%e, "error fetching deployment space options");
            ZopError::GettingDeploymentOptions
        })?;

        let items = spaces
            .into_iter()
            .map(|s| Item::new(None, s.name.clone(), s))
            .collect();
        choose(self.prompt, DEPLOYMENT_SPACE_TITLE, items)?
            .ok_or_else(|| ZopError::NoItemSelected("deployment space".into()))
    }

    /// Fetch, prompt and merge page after page until one has no `next`
    async fn resolve_options(&self, request: &mut RequestDocument, first_path: &str) -> Result<(), ZopError> {
        let mut path = first_path.to_string();
        loop {
            let page = self.fetch_page(&path).await?;
            let selected = self.select_option(&page)?;
            request.merge_option(&selected)?;

            match &page.next {
                None => return Ok(()),
                Some(next) => path = next_page_path(next, &selected),
            }
        }
    }

    async fn fetch_page(&self, path: &str) -> Result<OptionsPage, ZopError> {
        let resp = self.api.get(path).await?;
        let page: Option<OptionsPage> = decode_data(resp).await.map_err(|e| {
            tracing::error!(%e, %path, "error fetching deployment options");
            ZopError::GettingDeploymentOptions
        })?;
        let page = page.ok_or_else(|| {
            tracing::error!(%path, "deployment options response carried no data");
            ZopError::GettingDeploymentOptions
        })?;

        if page.options.is_empty() {
            return Err(ZopError::NoOptionsFound);
        }
        if !page.is_well_formed() {
            tracing::error!(%path, "deployment option without name or type");
            return Err(ZopError::GettingDeploymentOptions);
        }
        Ok(page)
    }

    fn select_option(&self, page: &OptionsPage) -> Result<DeploymentOption, ZopError> {
        let items = page
            .options
            .iter()
            .map(|opt| Item::new(None, option_name(opt).unwrap_or_default(), opt))
            .collect();
        let selected = choose(self.prompt, &page.prompt_title(), items)?
            .ok_or_else(|| ZopError::NoItemSelected(page.selection_kind()))?;

        println!(
            "Selected {}: {}",
            page.selected_label(selected),
            Paint::new(option_name(selected).unwrap_or_default()).cyan()
        );
        Ok(selected.clone())
    }

    async fn submit(&self, environment_id: i64, request: &RequestDocument) -> Result<(), ZopError> {
        let resp = self
            .api
            .post_json(&format!("environments/{}/deploymentspace", environment_id), request)
            .await?;
        if resp.status() == StatusCode::CREATED {
            return Ok(());
        }
        tracing::error!(status = %resp.status(), "deployment space was not created");
        Err(error_from_response(resp).await)
    }
}

/// Path of the next page with the selected option's values as query.
///
/// `next.params` maps query parameter names to keys of `selected`; a key
/// missing from the option sends an empty value.
pub fn next_page_path(next: &NextPage, selected: &DeploymentOption) -> String {
    let pairs: Vec<(String, String)> = next
        .params
        .iter()
        .map(|(name, key)| {
            let value = match selected.get(key) {
                Some(v) => value_to_plain_string(v),
                None => {
                    tracing::warn!(param = %name, %key, "selected option has no value for parameter");
                    String::new()
                }
            };
            (name.clone(), value)
        })
        .collect();
    format!("{}{}", next.path, build_options_query(&pairs))
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, ZopError> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!(%e, "unable to serialize deployment request");
        ZopError::Unknown
    })
}

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;

use crate::api::{decode_data, ApiClient};
use crate::error::{ApiError, ZopError};
use crate::gcp::GcpClient;
use crate::models::{CloudAccount, CloudAccountRequest};
use crate::prompt::{choose, Item, Prompt};
use crate::store::CredentialStore;

pub const ACCOUNT_LIST_TITLE: &str = "Select the cloud account where you want to add the deployment!";

/// All cloud accounts registered with the Zop API
pub async fn list_accounts(api: &ApiClient) -> Result<Vec<CloudAccount>, ZopError> {
    let resp = api.get("cloud-accounts").await?;
    decode_data(resp).await.map_err(|e| {
        tracing::error!(%e, "unable to decode cloud accounts");
        ZopError::FetchingCloudAccounts
    })
}

pub async fn select_account(api: &ApiClient, prompt: &dyn Prompt) -> Result<CloudAccount, ZopError> {
    let accounts = list_accounts(api).await?;
    let items = accounts
        .into_iter()
        .map(|acc| Item::new(Some(acc.id), acc.name.clone(), acc))
        .collect();
    choose(prompt, ACCOUNT_LIST_TITLE, items)?.ok_or_else(|| ZopError::NoItemSelected("cloud account".into()))
}

/// Push every local gcloud account to the Zop API.
///
/// User logins are turned into service accounts first. Accounts that fail
/// to convert or to post are logged and skipped; an unexpected status
/// from the API aborts the import. Returns the number of accounts posted.
pub async fn import_accounts(
    api: &ApiClient,
    store: &CredentialStore,
    gcp: &GcpClient,
) -> Result<usize, ZopError> {
    let accounts = store.accounts().await?;

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Importing cloud accounts");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = post_accounts(api, &accounts, gcp).await;
    spinner.finish_and_clear();
    result
}

async fn post_accounts(
    api: &ApiClient,
    accounts: &[crate::models::StoredCredential],
    gcp: &GcpClient,
) -> Result<usize, ZopError> {
    let mut posted = 0;
    for acc in accounts {
        let keys = match gcp.service_accounts(&acc.value).await {
            Ok(keys) => keys,
            Err(e) => {
                tracing::error!(%e, account = %acc.account_id, "error getting service accounts");
                continue;
            }
        };

        for key in &keys {
            let body = CloudAccountRequest {
                name: &acc.account_id,
                provider: "gcp",
                credentials: key,
            };
            let resp = match api.post_json("cloud-accounts", &body).await {
                Ok(resp) => resp,
                Err(e) => {
                    tracing::error!(%e, account = %acc.account_id, "error posting account");
                    continue;
                }
            };

            let status = resp.status();
            if status != StatusCode::CREATED && status != StatusCode::CONFLICT {
                tracing::error!(%status, account = %acc.account_id, "error posting account");
                return Err(ApiError::new(status.as_u16(), "could not connect to the zop-api service").into());
            }
            posted += 1;
        }
    }
    Ok(posted)
}

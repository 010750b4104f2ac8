use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use yansi::Paint;

use crate::error::ZopError;
use crate::utils::join_url;

/// HTTP client for the Zop API.
///
/// Transport failures surface as [`ZopError::ConnectingZopApi`]; status
/// codes and bodies are left to the caller.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    verbose: bool,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ZopError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("zop/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ZopError::HttpClient(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            verbose: false,
        }
    }

    /// Echo every request as a curl command and every response status
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ZopError> {
        let url = join_url(&self.base_url, path);
        self.log_request("GET", &url, None);
        let resp = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(%e, %url, "error connecting to zop api");
            ZopError::ConnectingZopApi
        })?;
        self.log_response(&resp);
        Ok(resp)
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, ZopError> {
        let url = join_url(&self.base_url, path);
        let payload = serde_json::to_vec(body).map_err(|e| {
            tracing::error!(%e, %url, "unable to serialize request body");
            ZopError::Unknown
        })?;
        self.log_request("POST", &url, Some(&payload));
        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%e, %url, "error connecting to zop api");
                ZopError::ConnectingZopApi
            })?;
        self.log_response(&resp);
        Ok(resp)
    }

    fn log_request(&self, method: &str, url: &str, body: Option<&[u8]>) {
        if !self.verbose {
            return;
        }
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
        if let Some(b) = body {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
            ));
            let escaped = String::from_utf8_lossy(b).replace('\'', "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped)).fg(yansi::Color::White)
            ));
        }
        eprintln!("Request:\n{}", parts.join(" "));
    }

    fn log_response(&self, resp: &reqwest::Response) {
        if !self.verbose {
            return;
        }
        // Grayed out so it does not compete with the prompts
        let line = Paint::new(format!("HTTP {}", resp.status())).rgb(100, 100, 100).to_string();
        eprintln!("Response:\n{}", line);
    }
}

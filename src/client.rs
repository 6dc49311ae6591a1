//! Typed client for the tournament REST API that owns players, matches and stats.

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::logic::{MatchSubmission, PlayerForm};
use crate::models::{GameMatch, MatchId, Overview, Player, PlayerId, StandingsResponse};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TournamentApi {
    client: Client,
    base_url: String,
}

impl TournamentApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("tournament-dashboard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.api_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send the request; non-2xx becomes `Upstream` with the body's `detail`.
    async fn execute(&self, req: RequestBuilder, url: &str) -> Result<String> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let detail = error_detail(&body)
                .unwrap_or_else(|| format!("Upstream returned {status} for {url}"));
            log::warn!("Upstream error {} from {}: {}", status.as_u16(), url, detail);
            return Err(DashboardError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(body)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let url = self.url(path);
        log::debug!("{} {}", method, url);
        let mut req = self.client.request(method, &url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let text = self.execute(req, &url).await?;
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(|e| DashboardError::Decode {
            url,
            message: e.to_string(),
        })
    }

    fn to_body<T: serde::Serialize>(value: &T, path: &str) -> Result<Value> {
        serde_json::to_value(value).map_err(|e| DashboardError::Decode {
            url: path.to_string(),
            message: e.to_string(),
        })
    }

    pub async fn standings(&self) -> Result<StandingsResponse> {
        self.call(Method::GET, "/standings", None).await
    }

    pub async fn matches(&self) -> Result<Vec<GameMatch>> {
        self.call(Method::GET, "/matches", None).await
    }

    pub async fn players(&self) -> Result<Vec<Player>> {
        self.call(Method::GET, "/players", None).await
    }

    pub async fn overview(&self) -> Result<Overview> {
        self.call(Method::GET, "/overview", None).await
    }

    pub async fn create_player(&self, form: &PlayerForm) -> Result<Player> {
        let body = Self::to_body(form, "/players")?;
        self.call(Method::POST, "/players", Some(body)).await
    }

    pub async fn update_player(&self, id: PlayerId, form: &PlayerForm) -> Result<Player> {
        let path = format!("/players/{id}");
        let body = Self::to_body(form, &path)?;
        self.call(Method::PUT, &path, Some(body)).await
    }

    /// Returns whatever the upstream echoes (often a message object, sometimes nothing).
    pub async fn delete_player(&self, id: PlayerId) -> Result<Value> {
        self.call(Method::DELETE, &format!("/players/{id}"), None).await
    }

    pub async fn create_match(&self, submission: &MatchSubmission) -> Result<GameMatch> {
        let body = Self::to_body(submission, "/matches")?;
        self.call(Method::POST, "/matches", Some(body)).await
    }

    pub async fn update_match(
        &self,
        id: MatchId,
        submission: &MatchSubmission,
    ) -> Result<GameMatch> {
        let path = format!("/matches/{id}");
        let body = Self::to_body(submission, &path)?;
        self.call(Method::PUT, &path, Some(body)).await
    }

    pub async fn delete_match(&self, id: MatchId) -> Result<Value> {
        self.call(Method::DELETE, &format!("/matches/{id}"), None).await
    }
}

/// Message from an error body's `detail` field.
///
/// `detail` is usually a string; validation failures send a list of `{ "msg": ... }`.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|i| i.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                Some(Value::Array(items.clone()).to_string())
            } else {
                Some(msgs.join("; "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

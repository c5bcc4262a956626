//! HTTP implementation of the to-do store.
//!
//! # Security Note - Logging
//!
//! The API token is attached through the `RedactedHeader` wrapper type,
//! which implements `Display` and `Debug` to redact sensitive values, so
//! accidentally enabled request logging cannot leak the raw token.

use std::fmt;

use reqwest::Client;
use reqwest::header;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::{Result, TudoError};
use crate::types::Todo;

use super::TodoStore;

/// Wrapper for sensitive header values that redacts the value when formatted.
struct RedactedHeader {
    value: SecretString,
}

impl RedactedHeader {
    fn bearer(token: &str) -> Self {
        Self {
            value: SecretString::from(format!("Bearer {token}")),
        }
    }

    fn as_header_value(&self) -> Result<header::HeaderValue> {
        let mut value =
            header::HeaderValue::from_str(self.value.expose_secret()).map_err(|_| {
                TudoError::Auth("API token contains characters not allowed in a header".to_string())
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Display for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedHeader")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Body for the create-todo call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewTodo<'a> {
    user_id: u64,
    title: &'a str,
    completed: bool,
}

/// reqwest-backed client for the to-do service
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client from configuration (endpoint, token, timeout)
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.base_url()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = config.token() {
            headers.insert(
                header::AUTHORIZATION,
                RedactedHeader::bearer(&token).as_header_value()?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.remote_timeout())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Resolve a path against the configured endpoint.
    ///
    /// Built by string concatenation because `Url::join` drops the last
    /// path segment of a base like `https://host/api`.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(TudoError::Api(format!("to-do service returned {status}")))
    }
}

impl TodoStore for ApiClient {
    async fn fetch_todos(&self, user_id: u64) -> Result<Vec<Todo>> {
        let url = self.endpoint("todos");
        tracing::debug!("GET {url}?userId={user_id}");

        let response = self
            .client
            .get(&url)
            .query(&[("userId", user_id)])
            .send()
            .await?;
        let response = Self::check(response)?;

        let todos: Vec<Todo> = response.json().await?;
        tracing::debug!("fetched {} todos for user {user_id}", todos.len());
        Ok(todos)
    }

    async fn create_todo(&self, title: &str, user_id: u64) -> Result<Todo> {
        let url = self.endpoint("todos");
        tracing::debug!("POST {url}");

        let body = NewTodo {
            user_id,
            title,
            completed: false,
        };
        let response = self.client.post(&url).json(&body).send().await?;
        let response = Self::check(response)?;

        Ok(response.json().await?)
    }

    async fn delete_todo(&self, id: u64) -> Result<()> {
        let url = format!("{}/{id}", self.endpoint("todos"));
        tracing::debug!("DELETE {url}");

        let response = self.client.delete(&url).send().await?;
        Self::check(response)?;
        Ok(())
    }
}

//! Access to the roster REST API.
//!
//! [`UsersGateway`] is the seam the form and list controllers depend on;
//! [`HttpUsersClient`] implements it over reqwest. The adapter owns transport
//! details only: URL construction, status mapping, and JSON decoding.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::record::{UserInput, UserRecord};

/// Failures talking to the roster API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL cannot address the users collection.
    #[error("invalid API base URL {url}: {message}")]
    InvalidBaseUrl {
        /// Rejected URL.
        url: String,
        /// Parser message.
        message: String,
    },
    /// The request never produced a response.
    #[error("request failed: {message}")]
    Transport {
        /// Transport error text.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("server responded with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message from the response envelope, or a body preview.
        message: String,
    },
    /// The response body was not the expected JSON.
    #[error("invalid response body: {message}")]
    Decode {
        /// Decoder message.
        message: String,
    },
}

/// Operations the client performs against the users collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersGateway: Send + Sync {
    /// Fetch the full collection.
    async fn list_users(&self) -> Result<Vec<UserRecord>, ClientError>;

    /// Create a record from validated input.
    async fn create_user(&self, input: &UserInput) -> Result<UserRecord, ClientError>;

    /// Replace the fields of record `id`.
    ///
    /// `Ok(None)` means the service found no such record.
    async fn update_user(
        &self,
        id: u64,
        input: &UserInput,
    ) -> Result<Option<UserRecord>, ClientError>;

    /// Delete record `id`. Succeeds whether or not it existed.
    async fn delete_user(&self, id: u64) -> Result<(), ClientError>;
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
}

/// [`UsersGateway`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpUsersClient {
    client: Client,
    users_url: Url,
}

impl HttpUsersClient {
    /// Build a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] when `base_url` does not parse
    /// and [`ClientError::Transport`] when the HTTP client cannot be built.
    ///
    /// # Examples
    /// ```
    /// use roster_client::HttpUsersClient;
    ///
    /// let client = HttpUsersClient::new("http://localhost:10000/").expect("valid URL");
    /// assert_eq!(client.users_url().as_str(), "http://localhost:10000/users");
    /// ```
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let raw = format!("{}/users", base_url.trim_end_matches('/'));
        let users_url = Url::parse(&raw).map_err(|error| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            message: error.to_string(),
        })?;
        let client = Client::builder().build().map_err(map_transport_error)?;
        Ok(Self { client, users_url })
    }

    /// Collection endpoint.
    #[must_use]
    pub const fn users_url(&self) -> &Url {
        &self.users_url
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/{id}", self.users_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, ClientError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "users API responded");
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl UsersGateway for HttpUsersClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ClientError> {
        let body = self.send(self.client.get(self.users_url.clone())).await?;
        decode(&body)
    }

    async fn create_user(&self, input: &UserInput) -> Result<UserRecord, ClientError> {
        let body = self
            .send(self.client.post(self.users_url.clone()).json(input))
            .await?;
        decode(&body)
    }

    async fn update_user(
        &self,
        id: u64,
        input: &UserInput,
    ) -> Result<Option<UserRecord>, ClientError> {
        let body = self
            .send(self.client.put(self.user_url(id)).json(input))
            .await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        decode(&body).map(Some)
    }

    async fn delete_user(&self, id: u64) -> Result<(), ClientError> {
        self.send(self.client.delete(self.user_url(id))).await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(|error| ClientError::Decode {
        message: error.to_string(),
    })
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    ClientError::Transport {
        message: error.to_string(),
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ClientError {
    let detail = serde_json::from_slice::<ErrorEnvelope>(body)
        .map(|envelope| envelope.message)
        .unwrap_or_else(|_| body_preview(body));
    let message = if detail.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        detail
    };
    ClientError::Status {
        status: status.as_u16(),
        message,
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

use reqwest::Client;
use thiserror::Error;
use tracing::instrument;

use crate::{
    domain::{ErrorBody, UpdateRequest, UpdateResponse},
    EssURL,
};

const UPDATE_PATH: &str = "/ess/update";
const GENERIC_REJECTION: &str = "Failed to update";

/// HTTP client for the ESS update service.
#[derive(Debug, Clone)]
pub struct EssClient {
    client: Client,
    base_url: EssURL,
}

impl EssClient {
    pub fn new(base_url: &str) -> Result<Self, ClientBuildError> {
        let base_url = EssURL::parse(base_url).map_err(|source| ClientBuildError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        let client = Client::builder().build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }

    /// Send one update. There is no timeout: the call resolves when the
    /// service answers or the connection fails.
    #[instrument(
        name = "EssClient::update",
        skip(self, request),
        fields(column = %request.column, nno_count = request.nno.len())
    )]
    pub async fn update(&self, request: &UpdateRequest) -> Result<UpdateResponse, UpdateError> {
        let url = self.base_url.append_path(UPDATE_PATH);

        let resp = self
            .client
            .put(url.as_ref())
            .json(request)
            .send()
            .await
            .map_err(|e| UpdateError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| UpdateError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_REJECTION.to_string());
            tracing::warn!(status = status.as_u16(), "update rejected: {}", message);
            return Err(UpdateError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let response = serde_json::from_slice::<UpdateResponse>(&body)
            .map_err(|e| UpdateError::Decode(e.to_string()))?;
        tracing::debug!("update accepted");

        Ok(response)
    }
}

/// Why an update did not go through. `Display` is the text shown to the
/// user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// No response was received.
    #[error("{0}")]
    Transport(String),
    #[error("Failed to parse update response: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum ClientBuildError {
    #[error("Invalid ESS URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_displays_server_message_only() {
        let err = UpdateError::Rejected {
            status: 400,
            message: "Unknown NNO".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown NNO");
    }

    #[test]
    fn invalid_base_url_fails_to_build() {
        let err = EssClient::new("no scheme here").unwrap_err();
        assert!(matches!(err, ClientBuildError::InvalidUrl { .. }));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = EssClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }
}

mod dev_backend;

use anyhow::{Context, Result};
use ess_client::{EssClient, UpdateError, UpdateRequest, UpdateResponse};

pub use dev_backend::DevBackend;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: EssClient,
    dev_backend: Option<DevBackend>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = EssClient::new(base_url)
            .with_context(|| format!("Failed to create ESS client for {}", base_url))?;
        Ok(Self {
            client,
            dev_backend: None,
        })
    }

    pub fn dev() -> Result<Self> {
        Self::with_dev_backend(DevBackend::new())
    }

    pub fn with_dev_backend(backend: DevBackend) -> Result<Self> {
        let client = EssClient::new("http://localhost").context("Failed to create ESS client")?;
        Ok(Self {
            client,
            dev_backend: Some(backend),
        })
    }

    pub async fn update(&self, request: &UpdateRequest) -> Result<UpdateResponse, UpdateError> {
        if let Some(dev) = &self.dev_backend {
            return dev.update(request).await;
        }

        self.client.update(request).await
    }
}

use ess_client::{UpdateError, UpdateRequest, UpdateResponse};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory stand-in for the ESS service. Records every accepted request
/// and rejects non-positive NNO numbers the way the service rejects unknown
/// ones.
#[derive(Debug, Clone)]
pub struct DevBackend {
    latency: Duration,
    accepted: Arc<Mutex<Vec<UpdateRequest>>>,
}

impl DevBackend {
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(600))
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            accepted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn update(&self, request: &UpdateRequest) -> Result<UpdateResponse, UpdateError> {
        tokio::time::sleep(self.latency).await;

        if let Some(nno) = request.nno.iter().find(|n| **n <= 0) {
            return Err(UpdateError::Rejected {
                status: 404,
                message: format!("NNO {} not found", nno),
            });
        }

        let mut accepted = self
            .accepted
            .lock()
            .map_err(|_| UpdateError::Transport("dev backend unavailable".to_string()))?;
        accepted.push(request.clone());
        tracing::info!(column = %request.column, rows = request.nno.len(), "dev backend accepted update");

        Ok(UpdateResponse(json!({
            "message": format!("Updated {} rows", request.nno.len()),
        })))
    }

    #[cfg(test)]
    pub fn accepted(&self) -> Vec<UpdateRequest> {
        self.accepted.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ess_client::Column;

    fn request(nno: &str) -> UpdateRequest {
        UpdateRequest::build(Some(Column::ScriptDueDate), nno, None).unwrap()
    }

    #[tokio::test]
    async fn accepts_and_records_positive_nno() {
        let backend = DevBackend::with_latency(Duration::ZERO);
        let ack = backend.update(&request("5, 6")).await.unwrap();

        assert_eq!(ack.message(), Some("Updated 2 rows"));
        assert_eq!(backend.accepted(), vec![request("5, 6")]);
    }

    #[tokio::test]
    async fn rejects_non_positive_nno() {
        let backend = DevBackend::with_latency(Duration::ZERO);
        let err = backend.update(&request("5, 0")).await.unwrap_err();

        assert_eq!(err.to_string(), "NNO 0 not found");
        assert!(backend.accepted().is_empty());
    }
}

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Url};
use tracing::{error, info};

use crate::domain::errors::BackendError;
use crate::infrastructure::contracts::config::get_chain_by_id;

/// Operations exposed by the proposal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendAction {
    Propose,
    Execute,
}

impl BackendAction {
    fn path(&self) -> &'static str {
        match self {
            BackendAction::Propose => "propose",
            BackendAction::Execute => "execute",
        }
    }
}

/// HTTP client for the service that drafts and executes proposals
#[derive(Debug, Clone)]
pub struct ProposalBackendClient {
    client: Client,
    base_url: Url,
}

impl ProposalBackendClient {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let base_url = Url::parse(base_url).map_err(|e| BackendError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Build the request for `action` on a chain without sending it
    pub fn build_request(&self, action: BackendAction, chain_id: u64) -> Result<Request, BackendError> {
        let chain = get_chain_by_id(chain_id).map_err(|_| BackendError::UnsupportedChain(chain_id))?;

        // Append to the base path; a prefix such as `/api` is kept
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(action.path());
        url.query_pairs_mut().append_pair("chain", chain.backend_slug);

        let mut request = Request::new(Method::POST, url);
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(request)
    }

    /// Ask the backend to draft and submit a proposal on the chain
    pub async fn submit_proposal_creation(&self, chain_id: u64) -> Result<serde_json::Value, BackendError> {
        self.send(BackendAction::Propose, chain_id).await
    }

    /// Ask the backend to execute the pending proposal on the chain
    pub async fn execute_proposal_creation(&self, chain_id: u64) -> Result<serde_json::Value, BackendError> {
        self.send(BackendAction::Execute, chain_id).await
    }

    async fn send(&self, action: BackendAction, chain_id: u64) -> Result<serde_json::Value, BackendError> {
        let request = self.build_request(action, chain_id)?;
        info!("POST {}", request.url());

        let response = self.client.execute(request).await.map_err(|e| {
            error!("Proposal backend {} failed: {}", action.path(), e);
            BackendError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Proposal backend {} returned {}: {}", action.path(), status, body);
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> ProposalBackendClient {
        ProposalBackendClient::new("http://localhost:8000").unwrap()
    }

    #[test]
    fn test_propose_url_uses_backend_slug() {
        let request = backend().build_request(BackendAction::Propose, 11155111).unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:8000/propose?chain=ethereum");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_execute_url_for_flow() {
        let request = backend().build_request(BackendAction::Execute, 545).unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:8000/execute?chain=flow");
    }

    #[test]
    fn test_base_url_path_prefix_is_kept() {
        let backend = ProposalBackendClient::new("http://localhost:8000/api").unwrap();
        let request = backend.build_request(BackendAction::Propose, 11155111).unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:8000/api/propose?chain=ethereum");

        let backend = ProposalBackendClient::new("http://localhost:8000/api/").unwrap();
        let request = backend.build_request(BackendAction::Execute, 545).unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:8000/api/execute?chain=flow");
    }

    #[test]
    fn test_base_url_that_cannot_hold_a_path() {
        let backend = ProposalBackendClient::new("mailto:dao@example.com").unwrap();
        let err = backend.build_request(BackendAction::Propose, 11155111).unwrap_err();
        assert!(matches!(err, BackendError::InvalidUrl { .. }));
    }

    #[test]
    fn test_zircuit_keeps_backend_spelling() {
        let request = backend().build_request(BackendAction::Propose, 48898).unwrap();
        assert_eq!(request.url().query(), Some("chain=zuircuit"));
    }

    #[test]
    fn test_unknown_chain_is_rejected() {
        let err = backend().build_request(BackendAction::Propose, 1).unwrap_err();
        assert!(matches!(err, BackendError::UnsupportedChain(1)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ProposalBackendClient::new("not a url").unwrap_err();
        assert!(matches!(err, BackendError::InvalidUrl { .. }));
    }
}

//! Relay client
//!
//! One outbound generateContent call per invocation: validate, build the
//! bootstrapped request, race the dispatch against the wall-clock bound,
//! classify the outcome. No retries, no shared state between calls.

use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, error, warn};

use crate::config::RelayConfig;

use super::error::{truncate_details, RelayError, Result};
use super::persona::build_request;
use super::types::{ConversationTurn, GenerateContentResponse};

/// Stateless client for the upstream completion endpoint.
///
/// Configuration is injected at construction; `chat` reads nothing ambient.
#[derive(Debug, Clone)]
pub struct RelayClient {
    config: RelayConfig,
    http_client: reqwest::Client,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| RelayError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Forward a conversation upstream and return the extracted reply.
    ///
    /// Fails before any network I/O when the credential is missing or the
    /// turn list is empty. The in-flight call is abandoned once the timeout
    /// fires; cancellation is best-effort and any late upstream result is
    /// discarded.
    pub async fn chat(&self, turns: &[ConversationTurn]) -> Result<String> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                error!(classification = "configuration", "GEMINI_API_KEY is not configured");
                return Err(RelayError::Configuration(
                    "GEMINI_API_KEY is not configured".to_string(),
                ));
            }
        };

        if turns.is_empty() {
            warn!(classification = "invalid_request", "rejected empty conversation");
            return Err(RelayError::InvalidRequest(
                "messages must be a non-empty array".to_string(),
            ));
        }

        let request = build_request(turns);
        let url = self.config.endpoint();
        debug!(
            model = %self.config.model,
            turns = turns.len(),
            "dispatching upstream completion request"
        );

        let send = self
            .http_client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send();

        let response = match timeout(Duration::from_secs(self.config.request_timeout), send).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!(classification = "transport", error = %e, "upstream request failed");
                return Err(RelayError::Transport(e.to_string()));
            }
            Err(_) => {
                error!(
                    classification = "timeout",
                    bound_secs = self.config.request_timeout,
                    "upstream request timed out"
                );
                return Err(RelayError::Timeout(self.config.request_timeout));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let details = truncate_details(&body);
            error!(
                classification = "upstream",
                status = status.as_u16(),
                details = %details,
                "upstream returned error status"
            );
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(classification = "transport", error = %e, "failed to parse upstream response");
            RelayError::Transport(format!("Failed to parse upstream response: {}", e))
        })?;

        extract_reply(payload)
    }
}

/// Pull the first candidate's first text part out of the upstream payload.
///
/// An absent or empty part classifies as an extraction failure rather than
/// an empty-string reply.
fn extract_reply(response: GenerateContentResponse) -> Result<String> {
    let reply = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .unwrap_or_default();

    if reply.is_empty() {
        error!(classification = "extraction", "upstream response carried no reply text");
        return Err(RelayError::Extraction);
    }

    Ok(reply)
}

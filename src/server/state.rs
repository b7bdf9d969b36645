//! Application state

use crate::relay::RelayClient;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub relay: RelayClient,
}

impl AppState {
    pub fn new(relay: RelayClient) -> Self {
        Self { relay }
    }
}

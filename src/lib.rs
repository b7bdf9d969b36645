//! # EmoTrack Relay
//!
//! Chat relay gateway for the EmoTrack stabilizer assistant. Accepts a
//! client-supplied conversation over HTTP, prepends the fixed stabilizer
//! persona bootstrap, forwards the conversation to the Google Generative
//! Language API, and translates the upstream reply or failure into a
//! normalized client-facing result.
//!
//! The relay is stateless: every call is an independent request/response
//! exchange with a hard wall-clock timeout and no retries.

pub mod config;
pub mod relay;
pub mod server;

pub use config::{RelayConfig, ServerConfig};
pub use relay::{ConversationTurn, RelayClient, RelayError};

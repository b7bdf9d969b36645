//! Chat Relay
//!
//! Accepts an ordered list of conversation turns, prepends the stabilizer
//! persona bootstrap, forwards the result to the upstream generateContent
//! endpoint, and returns the extracted reply or a classified failure.

pub mod client;
pub mod error;
pub mod persona;
pub mod types;

pub use client::RelayClient;
pub use error::{RelayError, Result};
pub use types::ConversationTurn;

//! HTTP handlers
//!
//! One operation: submit a conversation to the relay. Plus a ping endpoint
//! and a JSON 404 for unknown API routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::relay::{ConversationTurn, RelayError};

use super::state::AppState;

/// Inbound body of `POST /api/chat`.
///
/// A missing `messages` field is treated the same as an empty list.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub messages: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Submit a conversation and return the stabilizer's reply.
pub async fn chat(
    state: web::Data<AppState>,
    body: web::Json<ChatBody>,
) -> Result<HttpResponse, RelayError> {
    let reply = state.relay.chat(&body.messages).await?;
    info!(turns = body.messages.len(), "relayed conversation");
    Ok(HttpResponse::Ok().json(ChatReply { reply }))
}

/// Liveness probe.
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "ok": true,
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

/// JSON 404 for unknown `/api/*` routes.
pub async fn api_not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "message": "API route not found",
        "path": req.path(),
    }))
}

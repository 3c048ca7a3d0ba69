//! POST /chat - one question/answer turn.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use smbchat_core::chat::service::TurnOutcome;
use smbchat_core::chat::ChatError;

use crate::http::error::AppError;
use crate::http::extractors::session::SessionCookie;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub user_input: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Bot line, already HTML-safe.
    pub response: String,
    /// True when the visitor ended the conversation.
    pub ended: bool,
}

/// Visitors who have not submitted contact info are redirected to `/`.
pub async fn chat(
    State(state): State<AppState>,
    session: SessionCookie,
    Form(form): Form<ChatForm>,
) -> Result<Response, AppError> {
    let outcome = match state
        .chat_service
        .handle_turn(session.id, &form.user_input)
        .await
    {
        Ok(outcome) => outcome,
        Err(ChatError::Session(_)) => return Ok(session.attach(Redirect::to("/"))),
        Err(e) => return Err(e.into()),
    };

    let body = ChatResponse {
        response: outcome.render(),
        ended: matches!(outcome, TurnOutcome::Ended(_)),
    };
    Ok(Json(body).into_response())
}

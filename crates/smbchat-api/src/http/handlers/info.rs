//! POST /collect_info - contact form submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use smbchat_core::chat::ChatError;

use crate::http::error::AppError;
use crate::http::extractors::session::SessionCookie;
use crate::http::pages;
use crate::state::AppState;

/// Absent fields deserialize as empty so the gate reports which one is missing.
#[derive(Debug, Deserialize)]
pub struct InfoForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub user_email: String,
}

/// Record the visitor and open their gate, then send them back to `/`.
///
/// Validation failures re-render the form with status 400 and commit nothing.
pub async fn collect_info(
    State(state): State<AppState>,
    session: SessionCookie,
    Form(form): Form<InfoForm>,
) -> Result<Response, AppError> {
    match state
        .chat_service
        .submit_info(session.id, &form.customer_name, &form.user_email)
        .await
    {
        Ok(_) => Ok(session.attach(Redirect::to("/"))),
        Err(ChatError::Validation(e)) => {
            tracing::debug!(session_id = %session.id, error = %e, "contact form rejected");
            let page = pages::info_form(
                state.chat_service.classifier().label(),
                Some(&e.to_string()),
                &form.customer_name,
                &form.user_email,
            );
            Ok(session.attach((StatusCode::BAD_REQUEST, Html(page))))
        }
        Err(e) => Err(e.into()),
    }
}

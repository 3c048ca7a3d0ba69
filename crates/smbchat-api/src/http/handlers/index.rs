//! GET / - info form or chat view depending on the session gate.

use axum::extract::State;
use axum::response::{Html, Response};

use crate::http::extractors::session::SessionCookie;
use crate::http::pages;
use crate::state::AppState;

pub async fn index(State(state): State<AppState>, session: SessionCookie) -> Response {
    let gate = state.chat_service.session_state(session.id).await;
    let label = state.chat_service.classifier().label();

    let page = if gate.info_collected {
        pages::chat_interface(label, &gate.customer_name)
    } else {
        pages::info_form(label, None, "", "")
    };

    session.attach(Html(page))
}

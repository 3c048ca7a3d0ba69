//! Visitor session cookie.
//!
//! Each browser is identified by a `smbchat_session` cookie holding a UUID.
//! Requests without a valid cookie get a fresh id, and the response must then
//! set the cookie via [`SessionCookie::attach`].

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};

use smbchat_types::chat::SessionId;

pub const COOKIE_NAME: &str = "smbchat_session";

/// Session id taken from the request cookie, or newly minted.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    pub id: SessionId,
    pub is_new: bool,
}

impl SessionCookie {
    /// Add `Set-Cookie` to the response when the id was minted for this request.
    pub fn attach(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if self.is_new {
            let cookie = format!("{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

impl<S: Send + Sync> FromRequestParts<S> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(match session_id_from_headers(&parts.headers) {
            Some(id) => SessionCookie { id, is_new: false },
            None => SessionCookie {
                id: SessionId::new(),
                is_new: true,
            },
        })
    }
}

/// Find and parse the session cookie. Malformed values are treated as absent.
fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| value.trim().parse().ok())
}

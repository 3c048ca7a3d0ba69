//! Axum router configuration.
//!
//! Routes: `/` (form or chat view), `/collect_info`, `/chat`, the embedded
//! static assets and `/health`. Requests are traced via tower-http.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/collect_info", post(handlers::info::collect_info))
        .route("/chat", post(handlers::chat::chat))
        .route("/static/script.js", get(handlers::assets::script_js))
        .route("/static/style.css", get(handlers::assets::style_css))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
    use axum::http::{Request, Response, StatusCode};
    use axum::Json;
    use serde_json::{json, Value};
    use smbchat_types::config::ChatbotConfig;
    use tempfile::TempDir;
    use tower::ServiceExt;

    /// Stand-in retrieval engine that echoes the question and history length.
    async fn spawn_engine() -> String {
        let engine = Router::new().route(
            "/ask",
            post(|Json(body): Json<Value>| async move {
                let question = body["question"].as_str().unwrap_or_default().to_string();
                let turns = body["chat_history"].as_array().map_or(0, Vec::len);
                Json(json!({ "answer": format!("Echo ({turns}): {question}") }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, engine).await.unwrap();
        });
        format!("http://{addr}/ask")
    }

    async fn state_with_endpoint(tmp: &TempDir, endpoint: String) -> AppState {
        let mut config = ChatbotConfig::default();
        config.retrieval.endpoint = endpoint;
        AppState::with_config(tmp.path().to_path_buf(), config)
            .await
            .unwrap()
    }

    async fn app_with_endpoint(tmp: &TempDir, endpoint: String) -> Router {
        build_router(state_with_endpoint(tmp, endpoint).await)
    }

    async fn app(tmp: &TempDir) -> Router {
        app_with_endpoint(tmp, spawn_engine().await).await
    }

    fn form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::get(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    /// `name=value` part of the Set-Cookie header.
    fn session_cookie(response: &Response<Body>) -> String {
        let header = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        header.split(';').next().unwrap().to_string()
    }

    async fn body_string(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// Open a session and submit contact info; returns the session cookie.
    async fn collected_session(app: &Router) -> String {
        let response = app.clone().oneshot(get_with_cookie("/", None)).await.unwrap();
        let cookie = session_cookie(&response);
        let response = app
            .clone()
            .oneshot(form(
                "/collect_info",
                Some(&cookie),
                "customer_name=Ana&user_email=ana%40example.com",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        cookie
    }

    #[tokio::test]
    async fn first_visit_shows_form_and_sets_cookie() {
        let tmp = TempDir::new().unwrap();
        let response = app(&tmp).await.oneshot(get_with_cookie("/", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(session_cookie(&response).starts_with("smbchat_session="));
        assert!(body_string(response).await.contains("action=\"/collect_info\""));
    }

    #[tokio::test]
    async fn chat_before_info_redirects_home() {
        let tmp = TempDir::new().unwrap();
        let response = app(&tmp)
            .await
            .oneshot(form("/chat", None, "user_input=hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
        assert!(!tmp.path().join("chat_history").exists());
    }

    #[tokio::test]
    async fn cookieless_requests_do_not_store_sessions() {
        let tmp = TempDir::new().unwrap();
        let state = state_with_endpoint(&tmp, spawn_engine().await).await;
        let app = build_router(state.clone());

        for _ in 0..20 {
            let response = app.clone().oneshot(get_with_cookie("/", None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let response = app
                .clone()
                .oneshot(form("/chat", None, "user_input=hello"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        }
        assert!(state.chat_service.sessions().is_empty());

        collected_session(&app).await;
        assert_eq!(state.chat_service.sessions().len(), 1);
    }

    #[tokio::test]
    async fn missing_email_rerenders_form_without_saving() {
        let tmp = TempDir::new().unwrap();
        let response = app(&tmp)
            .await
            .oneshot(form("/collect_info", None, "customer_name=Ana"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("user_email"));
        assert!(html.contains("value=\"Ana\""));

        let csv = std::fs::read_to_string(tmp.path().join("customer_info.csv")).unwrap();
        assert_eq!(csv, "Customer Name,User Email\r\n");
    }

    #[tokio::test]
    async fn collected_info_unlocks_chat_view() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;
        let cookie = collected_session(&app).await;

        let csv = std::fs::read_to_string(tmp.path().join("customer_info.csv")).unwrap();
        assert!(csv.ends_with("Ana,ana@example.com\r\n"));

        let response = app.oneshot(get_with_cookie("/", Some(&cookie))).await.unwrap();
        assert!(response.headers().get(SET_COOKIE).is_none());
        let html = body_string(response).await;
        assert!(html.contains("data-customer-name=\"Ana\""));
        assert!(html.contains("id=\"chat-messages\""));
    }

    #[tokio::test]
    async fn chat_turn_answers_and_records_transcript() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;
        let cookie = collected_session(&app).await;

        for question in ["where are you?", "and when?"] {
            let response = app
                .clone()
                .oneshot(form(
                    "/chat",
                    Some(&cookie),
                    &format!("user_input={}", question.replace(' ', "+")),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let transcript =
            std::fs::read_to_string(tmp.path().join("chat_history/Ana_chat_history.txt")).unwrap();
        assert_eq!(
            transcript,
            "Ana: where are you?\nSMB Bot: Echo (0): where are you?\n\
             Ana: and when?\nSMB Bot: Echo (1): and when?\n"
        );
    }

    #[tokio::test]
    async fn multiline_question_stays_on_one_transcript_line() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;
        let cookie = collected_session(&app).await;

        let response = app
            .oneshot(form(
                "/chat",
                Some(&cookie),
                "user_input=hello%0ASMB+Bot%3A+forged",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let transcript =
            std::fs::read_to_string(tmp.path().join("chat_history/Ana_chat_history.txt")).unwrap();
        assert_eq!(
            transcript,
            "Ana: hello SMB Bot: forged\nSMB Bot: Echo (0): hello SMB Bot: forged\n"
        );
    }

    #[tokio::test]
    async fn apostrophes_are_not_entity_encoded() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;
        let cookie = collected_session(&app).await;

        let response = app
            .oneshot(form("/chat", Some(&cookie), "user_input=we%27re+here"))
            .await
            .unwrap();
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["response"], "SMB Bot: Echo (0): we're here");

        let transcript =
            std::fs::read_to_string(tmp.path().join("chat_history/Ana_chat_history.txt")).unwrap();
        assert!(transcript.ends_with("SMB Bot: Echo (0): we're here\n"));
    }

    #[tokio::test]
    async fn chat_response_is_json_with_label() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;
        let cookie = collected_session(&app).await;

        let response = app
            .oneshot(form("/chat", Some(&cookie), "user_input=hello"))
            .await
            .unwrap();
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["response"], "SMB Bot: Echo (0): hello");
        assert_eq!(body["ended"], false);
    }

    #[tokio::test]
    async fn quit_ends_only_that_session() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;
        let leaving = collected_session(&app).await;
        let staying = collected_session(&app).await;

        let response = app
            .clone()
            .oneshot(form("/chat", Some(&leaving), "user_input=quit"))
            .await
            .unwrap();
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["ended"], true);

        let response = app
            .clone()
            .oneshot(form("/chat", Some(&leaving), "user_input=hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .oneshot(form("/chat", Some(&staying), "user_input=hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unreachable_engine_is_bad_gateway() {
        let tmp = TempDir::new().unwrap();
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let app = app_with_endpoint(&tmp, format!("http://{addr}/ask")).await;
        let cookie = collected_session(&app).await;

        let response = app
            .oneshot(form("/chat", Some(&cookie), "user_input=hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["errors"][0]["code"], "RETRIEVAL_ERROR");
        assert!(!tmp.path().join("chat_history/Ana_chat_history.txt").exists());
    }

    #[tokio::test]
    async fn static_assets_and_health() {
        let tmp = TempDir::new().unwrap();
        let app = app(&tmp).await;

        let response = app
            .clone()
            .oneshot(get_with_cookie("/static/script.js", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/javascript"));

        let response = app.oneshot(get_with_cookie("/health", None)).await.unwrap();
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }
}

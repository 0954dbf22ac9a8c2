#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use clarkston::{
    Config,
    config::{ContactConfig, ObservabilityConfig, ServerConfig},
};
use clarkston_contact::{SimulatedHandler, SubmissionHandler};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
        },
        observability: ObservabilityConfig::default(),
        contact: ContactConfig {
            simulated_delay_ms: 0,
            timeout_ms: None,
        },
    }
}

pub fn create_test_app() -> Router {
    create_test_app_with(Arc::new(SimulatedHandler::new(Duration::ZERO)))
}

pub fn create_test_app_with(handler: Arc<dyn SubmissionHandler>) -> Router {
    let mut state = clarkston::server::app_state(create_test_config());
    state.submission_handler = handler;

    clarkston::server::app(state)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn post_form(router: &Router, uri: &str, form: &[(&str, &str)]) -> (StatusCode, String) {
    let body = serde_urlencoded::to_string(form).unwrap();
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

use std::sync::Arc;

use axum::{Router, response::IntoResponse, routing::get};
use clarkston_contact::SubmissionHandler;

use crate::{
    site::SiteConfig,
    template::{NotFoundTemplate, Template},
};

mod contact;
mod health;
mod index;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub site: &'static SiteConfig,
    pub submission_handler: Arc<dyn SubmissionHandler>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(
        axum::http::StatusCode::NOT_FOUND,
        NotFoundTemplate {
            page: template.page(),
        },
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/services", get(services::page))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}

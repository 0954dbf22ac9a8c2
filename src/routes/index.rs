use axum::response::IntoResponse;

use crate::template::{Page, Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: Page,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        page: template.page(),
    })
}

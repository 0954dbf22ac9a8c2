use axum::response::IntoResponse;

use crate::template::{Page, Template};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub page: Page,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate {
        page: template.page(),
    })
}

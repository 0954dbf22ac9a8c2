use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::site::SiteConfig;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Layout data shared by every page.
#[derive(Clone, Debug)]
pub struct Page {
    pub site: &'static SiteConfig,
    pub current_path: String,
}

impl Page {
    pub fn is_current(&self, href: impl AsRef<str>) -> bool {
        self.current_path == href.as_ref()
    }
}

pub struct Template {
    site: &'static SiteConfig,
    current_path: String,
}

impl Template {
    pub fn page(&self) -> Page {
        Page {
            site: self.site,
            current_path: self.current_path.to_owned(),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, path = %self.current_path, "Failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }

    pub fn render_with_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }

        response
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            site: state.site,
            current_path: parts.uri.path().to_owned(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub page: Page,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub page: Page,
}

#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render_with_status(
                        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                        $crate::template::ServerTemplate {
                            page: $template.page(),
                        },
                    )
                    .into_response();
            }
        }
    };
}

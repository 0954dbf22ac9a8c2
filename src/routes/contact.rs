use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use clarkston_contact::{ContactFields, ContactForm, FormDriver, Notice, SubmitAttempt};

use crate::{
    routes::AppState,
    template::{Page, Template},
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: Page,
    pub form: ContactForm,
    pub notice: Option<Notice>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        page: template.page(),
        form: ContactForm::new(),
        notice: None,
    })
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactFields>,
) -> impl IntoResponse {
    let mut driver = FormDriver::new(app_state.submission_handler.clone())
        .with_form(ContactForm::from_fields(input))
        .with_timeout(app_state.config.contact.timeout());

    if let SubmitAttempt::Rejected(_) = driver.submit() {
        return template.render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate {
                page: template.page(),
                form: driver.into_form(),
                notice: None,
            },
        );
    }

    let outcome = crate::try_page_response!(
        driver
            .next_completion()
            .await
            .ok_or_else(|| anyhow::anyhow!("accepted contact form has no delivery in flight")),
        template
    );

    let status = match outcome {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::warn!(error = %err, "Contact form delivery failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    let mut form = driver.into_form();
    let notice = form.take_notice();

    template.render_with_status(
        status,
        ContactTemplate {
            page: template.page(),
            form,
            notice,
        },
    )
}

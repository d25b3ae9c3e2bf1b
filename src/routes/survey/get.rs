use super::{render_survey_form, Feedback};
use crate::domain::FormSnapshot;
use crate::idempotency::SubmissionKey;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

/// A blank survey form. The only message it can carry is the confirmation left behind by a
/// successful submission, which redirected here.
pub async fn survey_form(
    flash_messages: IncomingFlashMessages,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    let lines: Vec<String> = flash_messages
        .iter()
        .map(|m| m.content().to_string())
        .collect();
    let feedback = (!lines.is_empty()).then(|| Feedback::success(lines));

    render_survey_form(
        &templates,
        StatusCode::OK,
        SubmissionKey::generate(),
        &FormSnapshot::default(),
        feedback,
    )
}

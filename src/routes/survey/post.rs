use super::{render_survey_form, Feedback};
use crate::domain::FormSnapshot;
use crate::idempotency::{InFlightSubmissions, SubmissionAttempt, SubmissionKey};
use crate::submission::{self, SubmissionOutcome};
use crate::survey_api_client::SurveyApiClient;
use crate::utils::{e400, see_other};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;
use tera::Tera;

const CONNECTION_ERROR: &str =
    "Failed to connect to the server. Please ensure the backend server is running and accessible.";
const ALREADY_SUBMITTING: &str =
    "This survey is already being submitted. Please wait for the response.";
const ALREADY_SUBMITTED: &str = "This survey has already been submitted.";

#[derive(serde::Deserialize)]
pub struct SurveyForm {
    #[serde(rename = "submissionKey")]
    submission_key: String,
    #[serde(flatten)]
    snapshot: FormSnapshot,
}

/// # Post/Redirect/Get
/// On success we redirect back to a blank form, carrying the backend's confirmation in a flash
/// message: refreshing the page afterwards does not send the survey again. On failure the form is
/// rendered again with what the respondent typed, so they only have to fix what is wrong.
#[tracing::instrument(
    name = "Handling a survey submission",
    skip(form, api_client, in_flight, templates),
    fields(submission_key = tracing::field::Empty)
)]
pub async fn submit_survey(
    form: web::Form<SurveyForm>,
    api_client: web::Data<SurveyApiClient>,
    in_flight: web::Data<InFlightSubmissions>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    // We must destructure the form to avoid upsetting the borrow-checker
    let SurveyForm {
        submission_key,
        snapshot,
    } = form.0;
    let submission_key: SubmissionKey = submission_key.try_into().map_err(e400)?;
    tracing::Span::current().record("submission_key", &tracing::field::display(&submission_key));

    let in_flight_guard = match in_flight.try_begin(submission_key) {
        SubmissionAttempt::Started(guard) => guard,
        SubmissionAttempt::Pending => {
            tracing::warn!("Duplicate submission while the first one is still pending");
            return render_survey_form(
                &templates,
                StatusCode::CONFLICT,
                submission_key,
                &snapshot,
                Some(Feedback::error(vec![ALREADY_SUBMITTING.into()])),
            );
        }
        SubmissionAttempt::AlreadySubmitted => {
            tracing::warn!("Duplicate submission of a survey that was already stored");
            FlashMessage::info(ALREADY_SUBMITTED).send();
            return Ok(see_other("/"));
        }
    };

    let (status, feedback) = match submission::submit(snapshot.clone(), &api_client).await {
        SubmissionOutcome::Success(message) => {
            in_flight_guard.complete();
            FlashMessage::info(message).send();
            return Ok(see_other("/"));
        }
        SubmissionOutcome::ValidationFailure(errors) | SubmissionOutcome::ServerFailure(errors) => {
            (StatusCode::BAD_REQUEST, Feedback::error(errors))
        }
        SubmissionOutcome::TransportFailure => (
            StatusCode::BAD_GATEWAY,
            Feedback::error(vec![CONNECTION_ERROR.into()]),
        ),
    };

    render_survey_form(&templates, status, submission_key, &snapshot, Some(feedback))
}

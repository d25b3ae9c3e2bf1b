use crate::domain::{FormSnapshot, SurveyRecord};
use crate::survey_api_client::SurveyApiClient;

/// What happened to one press of the submit button. Exactly one of these comes out of every
/// attempt, and every one of them is shown to the respondent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend stored the survey and answered with a confirmation.
    Success(String),
    /// The form was incomplete or malformed. Nothing was sent.
    ValidationFailure(Vec<String>),
    /// The backend looked at the survey and refused it.
    ServerFailure(Vec<String>),
    /// We never got a usable answer from the backend.
    TransportFailure,
}

/// # Validate, then submit
/// Validation is a pure function of the snapshot: if it fails we return straight away, without
/// touching the network. Otherwise exactly one request goes out to the backend.
#[tracing::instrument(
    name = "Submitting a survey",
    skip(snapshot, api_client),
    fields(respondent_email = %snapshot.email.trim())
)]
pub async fn submit(snapshot: FormSnapshot, api_client: &SurveyApiClient) -> SubmissionOutcome {
    let record: SurveyRecord = match snapshot.try_into() {
        Ok(record) => record,
        Err(errors) => {
            tracing::info!(%errors, "Survey rejected by client-side validation");
            return SubmissionOutcome::ValidationFailure(errors.0);
        }
    };

    match send_survey(&record, api_client).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, error.message = %e, "Failed to submit the survey");
            SubmissionOutcome::TransportFailure
        }
    }
}

async fn send_survey(
    record: &SurveyRecord,
    api_client: &SurveyApiClient,
) -> Result<SubmissionOutcome, reqwest::Error> {
    let response = api_client.create_survey(record).await?;
    let status = response.status();
    if status.is_success() {
        return Ok(SubmissionOutcome::Success(response.text().await?));
    }

    // A body that is not JSON at all bubbles up as an error: we cannot tell what went wrong.
    let body: serde_json::Value = response.json().await?;
    let errors = server_errors(body);
    tracing::warn!(%status, ?errors, "The backend rejected the survey");
    Ok(SubmissionOutcome::ServerFailure(errors))
}

/// Turn the JSON body of a rejected submission into the messages shown to the respondent.
///
/// `ageError` is the backend refusing the respondent's age: it is shown on its own, verbatim.
/// Any other non-empty object is a field → message map, shown in the order the backend wrote it.
/// Whatever else comes back, the respondent still gets a message.
fn server_errors(body: serde_json::Value) -> Vec<String> {
    match body {
        serde_json::Value::Object(map) if !map.is_empty() => {
            if let Some(serde_json::Value::String(age_error)) = map.get("ageError") {
                if !age_error.is_empty() {
                    return vec![age_error.clone()];
                }
            }
            map.into_iter()
                .map(|(_, message)| match message {
                    serde_json::Value::String(message) => message,
                    other => other.to_string(),
                })
                .collect()
        }
        _ => vec!["An unknown error occurred on the server.".to_string()],
    }
}

use crate::aggregation::{self, ReportState};
use crate::survey_api_client::SurveyApiClient;
use crate::utils::e500;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use anyhow::Context as _;
use tera::{Context, Tera};

const NO_SURVEYS: &str = "No Surveys Available.";
const LOAD_ERROR: &str =
    "Failed to load survey results. Please ensure the backend server is running and accessible.";

/// The results page is rebuilt from scratch on every visit: nothing is cached between loads.
pub async fn survey_results(
    api_client: web::Data<SurveyApiClient>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    let state = aggregation::load_report(&api_client).await;

    let mut context = Context::new();
    let status = match &state {
        ReportState::Report(report) => {
            context.insert("state", "report");
            context.insert("sections", &report.sections());
            StatusCode::OK
        }
        ReportState::Empty => {
            context.insert("state", "empty");
            context.insert("message", NO_SURVEYS);
            StatusCode::OK
        }
        ReportState::Error => {
            context.insert("state", "error");
            context.insert("message", LOAD_ERROR);
            StatusCode::BAD_GATEWAY
        }
    };

    let html_body = templates
        .render("results.html", &context)
        .context("Error rendering results html")
        .map_err(e500)?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(html_body))
}

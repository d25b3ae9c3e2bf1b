mod get;
mod post;

pub use get::survey_form;
pub use post::submit_survey;

use crate::domain::{FavouriteFood, FormSnapshot, Rating};
use crate::idempotency::SubmissionKey;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use anyhow::Context as _;
use tera::{Context, Tera};

/// The rating groups of the form, in the order they are shown: `(field name, label)`.
const RATING_GROUPS: [(&str, &str); 4] = [
    ("watchMovies", "I like to watch movies"),
    ("listenRadio", "I like to listen to radio"),
    ("eatOut", "I like to eat out"),
    ("watchTV", "I like to watch TV"),
];

/// Messages shown above the form, styled as a success or as an error.
#[derive(serde::Serialize)]
pub(crate) struct Feedback {
    kind: &'static str,
    lines: Vec<String>,
}

impl Feedback {
    pub(crate) fn success(lines: Vec<String>) -> Self {
        Self {
            kind: "success-message",
            lines,
        }
    }

    pub(crate) fn error(lines: Vec<String>) -> Self {
        Self {
            kind: "server-error-message",
            lines,
        }
    }
}

#[derive(serde::Serialize)]
struct RadioOption {
    value: &'static str,
    checked: bool,
}

#[derive(serde::Serialize)]
struct RadioGroup {
    name: &'static str,
    label: &'static str,
    options: Vec<RadioOption>,
}

fn radio_options(values: &[&'static str], selected: Option<&str>) -> Vec<RadioOption> {
    values
        .iter()
        .map(|&value| RadioOption {
            value,
            checked: selected.map(str::trim) == Some(value),
        })
        .collect()
}

/// Render the survey form, pre-filled with `values`.
pub(crate) fn render_survey_form(
    templates: &Tera,
    status: StatusCode,
    submission_key: SubmissionKey,
    values: &FormSnapshot,
    feedback: Option<Feedback>,
) -> Result<HttpResponse, actix_web::Error> {
    let foods: Vec<_> = FavouriteFood::ALL.iter().map(FavouriteFood::as_str).collect();
    let ratings: Vec<_> = Rating::ALL.iter().map(Rating::as_str).collect();
    let selections = [
        values.watch_movies.as_deref(),
        values.listen_radio.as_deref(),
        values.eat_out.as_deref(),
        values.watch_tv.as_deref(),
    ];
    let rating_groups: Vec<_> = RATING_GROUPS
        .iter()
        .zip(selections)
        .map(|(&(name, label), selected)| RadioGroup {
            name,
            label,
            options: radio_options(&ratings, selected),
        })
        .collect();

    let mut context = Context::new();
    context.insert("submission_key", &submission_key.to_string());
    context.insert("values", values);
    context.insert(
        "foods",
        &radio_options(&foods, values.favourite_foods.as_deref()),
    );
    context.insert("rating_groups", &rating_groups);
    context.insert("feedback", &feedback);

    let html_body = templates
        .render("survey_form.html", &context)
        .context("Error rendering survey_form html")
        .map_err(crate::utils::e500)?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(html_body))
}

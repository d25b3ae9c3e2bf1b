use crate::helpers::{metric_values, mount_metrics, spawn_app};
use survey_portal::aggregation::{load_report, ReportState};
use survey_portal::domain::AggregateReport;
use survey_portal::survey_api_client::Metric;
use wiremock::matchers::path;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn the_report_holds_exactly_the_values_served_by_the_backend() {
    // Arrange
    let app = spawn_app().await;
    mount_metrics(&app.survey_api, metric_values(42)).await;

    // Act
    let state = load_report(&app.survey_api_client()).await;

    // Assert
    assert_eq!(
        state,
        ReportState::Report(AggregateReport {
            total_surveys: 42,
            average_age: 31.5,
            oldest_age: 77.0,
            youngest_age: 6.0,
            pizza_percentage: 40.5,
            pasta_percentage: 30.0,
            pap_and_wors_percentage: 19.0,
            average_movie_rating: 2.1,
            average_radio_rating: 3.4,
            average_eat_out_rating: 1.9,
            average_tv_rating: 4.0,
        })
    );
}

#[tokio::test]
async fn no_surveys_means_an_empty_report_whatever_the_other_values() {
    let app = spawn_app().await;
    mount_metrics(&app.survey_api, metric_values(0)).await;

    let state = load_report(&app.survey_api_client()).await;

    assert_eq!(state, ReportState::Empty);
}

#[tokio::test]
async fn a_single_failing_endpoint_fails_the_whole_report() {
    for failing in Metric::ALL {
        // Arrange
        let app = spawn_app().await;
        let values = metric_values(42)
            .into_iter()
            .filter(|(metric, _)| *metric != failing)
            .collect();
        mount_metrics(&app.survey_api, values).await;
        Mock::given(path(format!("/api/surveys/analytics/{}", failing.path())))
            .respond_with(ResponseTemplate::new(500))
            .mount(&app.survey_api)
            .await;

        // Act
        let state = load_report(&app.survey_api_client()).await;

        // Assert
        assert_eq!(
            state,
            ReportState::Error,
            "The report did not fail when `{}` failed.",
            failing.key()
        );
    }
}

#[tokio::test]
async fn a_body_that_is_not_json_fails_the_report() {
    let app = spawn_app().await;
    let values = metric_values(42)
        .into_iter()
        .filter(|(metric, _)| *metric != Metric::AverageRadioRating)
        .collect();
    mount_metrics(&app.survey_api, values).await;
    Mock::given(path("/api/surveys/analytics/average-radio-rating"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&app.survey_api)
        .await;

    let state = load_report(&app.survey_api_client()).await;

    assert_eq!(state, ReportState::Error);
}

#[tokio::test]
async fn a_stalled_endpoint_fails_the_report_once_the_timeout_expires() {
    let app = spawn_app().await;
    let values = metric_values(42)
        .into_iter()
        .filter(|(metric, _)| *metric != Metric::YoungestAge)
        .collect();
    mount_metrics(&app.survey_api, values).await;
    Mock::given(path("/api/surveys/analytics/youngest-age"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"youngestAge": 6}))
                // 3 minutes!
                .set_delay(std::time::Duration::from_secs(180)),
        )
        .mount(&app.survey_api)
        .await;

    let state = load_report(&app.survey_api_client()).await;

    assert_eq!(state, ReportState::Error);
}

#[tokio::test]
async fn the_eleven_metrics_are_fetched_concurrently() {
    // Arrange - every endpoint takes 500ms to answer
    let app = spawn_app().await;
    for (metric, value) in metric_values(42) {
        let mut body = serde_json::Map::new();
        body.insert(metric.key().to_string(), value);
        Mock::given(path(format!("/api/surveys/analytics/{}", metric.path())))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::Value::Object(body))
                    .set_delay(std::time::Duration::from_millis(500)),
            )
            .expect(1)
            .mount(&app.survey_api)
            .await;
    }

    // Act
    let started = std::time::Instant::now();
    let state = load_report(&app.survey_api_client()).await;

    // Assert - one after the other it would take at least 5.5s
    assert!(matches!(state, ReportState::Report(_)));
    assert!(started.elapsed() < std::time::Duration::from_secs(2));
}

#[tokio::test]
async fn the_results_page_shows_the_three_sections() {
    let app = spawn_app().await;
    mount_metrics(&app.survey_api, metric_values(42)).await;

    let response = app.get_results().await;

    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    for title in ["Demographics", "Food preferences", "Lifestyle ratings"] {
        assert!(html_page.contains(&format!("<h2>{title}</h2>")));
    }
    assert!(html_page.contains(r#"<span class="result-value">42</span>"#));
    assert!(html_page.contains(r#"<span class="result-value">40.5%</span>"#));
    assert!(html_page.contains(r#"<span class="result-value">2.1</span>"#));
}

#[tokio::test]
async fn the_results_page_says_so_when_there_are_no_surveys() {
    let app = spawn_app().await;
    mount_metrics(&app.survey_api, metric_values(0)).await;

    let response = app.get_results().await;

    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(r#"<p class="no-surveys-message">No Surveys Available.</p>"#));
    assert!(!html_page.contains("results-section"));
}

#[tokio::test]
async fn the_results_page_shows_an_error_when_the_backend_is_down() {
    // Nothing mounted: every analytics endpoint answers 404
    let app = spawn_app().await;

    let response = app.get_results().await;

    assert_eq!(response.status().as_u16(), 502);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("Failed to load survey results."));
    assert!(!html_page.contains("results-section"));
}

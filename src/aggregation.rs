use crate::domain::AggregateReport;
use crate::survey_api_client::{Metric, MetricError, SurveyApiClient};

/// What the results page can show.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportState {
    Report(AggregateReport),
    /// Nobody has answered the survey yet: averages and percentages would be meaningless.
    Empty,
    /// At least one statistic could not be retrieved.
    Error,
}

/// # All or nothing
/// The eleven statistics are fetched concurrently and joined as a single batch. The first failure
/// fails the whole batch: a report with arbitrary holes in it would be misleading, so we would
/// rather show nothing.
#[tracing::instrument(name = "Loading the survey report", skip(api_client))]
pub async fn load_report(api_client: &SurveyApiClient) -> ReportState {
    match fetch_report(api_client).await {
        Ok(report) if report.total_surveys == 0 => ReportState::Empty,
        Ok(report) => ReportState::Report(report),
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, error.message = %e, "Failed to load the survey report");
            ReportState::Error
        }
    }
}

async fn fetch_report(api_client: &SurveyApiClient) -> Result<AggregateReport, MetricError> {
    // `try_join!` polls all the requests at the same time and bails out as soon as one of them
    // fails, dropping the others.
    let (
        total_surveys,
        average_age,
        oldest_age,
        youngest_age,
        pizza_percentage,
        pasta_percentage,
        pap_and_wors_percentage,
        average_movie_rating,
        average_radio_rating,
        average_eat_out_rating,
        average_tv_rating,
    ) = tokio::try_join!(
        api_client.fetch_metric::<u64>(Metric::TotalSurveys),
        api_client.fetch_metric::<f64>(Metric::AverageAge),
        api_client.fetch_metric::<f64>(Metric::OldestAge),
        api_client.fetch_metric::<f64>(Metric::YoungestAge),
        api_client.fetch_metric::<f64>(Metric::PizzaPercentage),
        api_client.fetch_metric::<f64>(Metric::PastaPercentage),
        api_client.fetch_metric::<f64>(Metric::PapAndWorsPercentage),
        api_client.fetch_metric::<f64>(Metric::AverageMovieRating),
        api_client.fetch_metric::<f64>(Metric::AverageRadioRating),
        api_client.fetch_metric::<f64>(Metric::AverageEatOutRating),
        api_client.fetch_metric::<f64>(Metric::AverageTvRating),
    )?;

    Ok(AggregateReport {
        total_surveys,
        average_age,
        oldest_age,
        youngest_age,
        pizza_percentage,
        pasta_percentage,
        pap_and_wors_percentage,
        average_movie_rating,
        average_radio_rating,
        average_eat_out_rating,
        average_tv_rating,
    })
}

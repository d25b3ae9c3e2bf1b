use crate::domain::SurveyRecord;
use crate::utils::error_chain_fmt;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Talks to the survey backend: the endpoint that stores surveys and the analytics endpoints.
pub struct SurveyApiClient {
    http_client: Client,
    base_url: String,
}

/// The aggregate statistics served by the backend, one endpoint each.
///
/// Every endpoint answers with a single-key JSON object, e.g. `{ "averageAge": 31.5 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    TotalSurveys,
    AverageAge,
    OldestAge,
    YoungestAge,
    PizzaPercentage,
    PastaPercentage,
    PapAndWorsPercentage,
    AverageMovieRating,
    AverageRadioRating,
    AverageEatOutRating,
    AverageTvRating,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Metric::TotalSurveys,
        Metric::AverageAge,
        Metric::OldestAge,
        Metric::YoungestAge,
        Metric::PizzaPercentage,
        Metric::PastaPercentage,
        Metric::PapAndWorsPercentage,
        Metric::AverageMovieRating,
        Metric::AverageRadioRating,
        Metric::AverageEatOutRating,
        Metric::AverageTvRating,
    ];

    /// Path relative to `/api/surveys/analytics`.
    pub fn path(&self) -> &'static str {
        match self {
            Metric::TotalSurveys => "total",
            Metric::AverageAge => "average-age",
            Metric::OldestAge => "oldest-age",
            Metric::YoungestAge => "youngest-age",
            Metric::PizzaPercentage => "pizza-percentage",
            Metric::PastaPercentage => "pasta-percentage",
            Metric::PapAndWorsPercentage => "pap-and-wors-percentage",
            Metric::AverageMovieRating => "average-movie-rating",
            Metric::AverageRadioRating => "average-radio-rating",
            Metric::AverageEatOutRating => "average-eatout-rating",
            Metric::AverageTvRating => "average-tv-rating",
        }
    }

    /// The only key we read from the endpoint's response.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::TotalSurveys => "totalSurveys",
            Metric::AverageAge => "averageAge",
            Metric::OldestAge => "oldestAge",
            Metric::YoungestAge => "youngestAge",
            Metric::PizzaPercentage => "pizzaPercentage",
            Metric::PastaPercentage => "pastaPercentage",
            Metric::PapAndWorsPercentage => "papAndWorsPercentage",
            Metric::AverageMovieRating => "averageMovieRating",
            Metric::AverageRadioRating => "averageRadioRating",
            Metric::AverageEatOutRating => "averageEatOutRating",
            Metric::AverageTvRating => "averageTvRating",
        }
    }
}

#[derive(thiserror::Error)]
pub enum MetricError {
    #[error("Failed to retrieve `{key}` from the analytics API.")]
    Request {
        key: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("The analytics response does not contain `{0}`.")]
    MissingKey(&'static str),
    #[error("`{key}` does not hold the expected kind of value.")]
    UnexpectedValue {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl std::fmt::Debug for MetricError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SurveyApiClient {
    /// Every request is bounded by `timeout`: a stalled backend turns into an error instead of a
    /// page that never finishes loading.
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Send a validated survey to the backend. Whatever status comes back is for the caller to
    /// interpret: only a failure to obtain a response is an error here.
    #[tracing::instrument(name = "Sending a survey to the backend", skip(self, record))]
    pub async fn create_survey(
        &self,
        record: &SurveyRecord,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}/api/surveys", self.base_url);
        self.http_client.post(&url).json(record).send().await
    }

    #[tracing::instrument(name = "Fetching an aggregate metric", skip(self))]
    pub async fn fetch_metric<T: DeserializeOwned>(&self, metric: Metric) -> Result<T, MetricError> {
        let url = format!("{}/api/surveys/analytics/{}", self.base_url, metric.path());
        let request_error = |source| MetricError::Request {
            key: metric.key(),
            source,
        };

        let mut body: serde_json::Map<String, serde_json::Value> = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(request_error)?
            .error_for_status()
            .map_err(request_error)?
            .json()
            .await
            .map_err(request_error)?;

        let value = body
            .remove(metric.key())
            .ok_or(MetricError::MissingKey(metric.key()))?;
        serde_json::from_value(value).map_err(|source| MetricError::UnexpectedValue {
            key: metric.key(),
            source,
        })
    }
}

pub mod aggregation;
pub mod configuration;
pub mod domain;
pub mod idempotency;
pub mod routes;
pub mod startup;
pub mod submission;
pub mod survey_api_client;
pub mod telemetry;
mod utils;

mod in_flight;
mod key;

pub use in_flight::{InFlightGuard, InFlightSubmissions, SubmissionAttempt};
pub use key::SubmissionKey;

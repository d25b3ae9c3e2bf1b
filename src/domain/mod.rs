mod aggregate_report;
mod choices;
mod contact_number;
mod date_of_birth;
mod form_snapshot;
mod full_name;
mod survey_email;
mod survey_record;

pub use aggregate_report::{AggregateReport, ReportEntry, ReportSection};
pub use choices::{FavouriteFood, Rating};
pub use contact_number::ContactNumber;
pub use date_of_birth::DateOfBirth;
pub use form_snapshot::FormSnapshot;
pub use full_name::FullName;
pub use survey_email::SurveyEmail;
pub use survey_record::{SurveyRecord, ValidationErrors};

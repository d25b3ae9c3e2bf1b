/// The survey form as the browser sent it, before any validation.
///
/// Text inputs are always submitted by the browser (possibly empty), radio groups only when
/// something is selected, hence the `Option`s. A missing text field is treated as an empty one so
/// that the respondent gets a validation message rather than a bare `400`.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSnapshot {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub contact_number: String,
    pub favourite_foods: Option<String>,
    pub watch_movies: Option<String>,
    pub listen_radio: Option<String>,
    pub eat_out: Option<String>,
    #[serde(rename = "watchTV")]
    pub watch_tv: Option<String>,
}

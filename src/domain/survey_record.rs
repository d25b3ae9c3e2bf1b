use crate::domain::{
    ContactNumber, DateOfBirth, FavouriteFood, FormSnapshot, FullName, Rating, SurveyEmail,
};

/// # Type Driven Development
/// A `SurveyRecord` can only be obtained from a `FormSnapshot` where every single field passed its
/// check: a half-filled survey cannot be represented, hence cannot be sent to the backend.
///
/// It serializes to the JSON body expected by `POST /api/surveys`.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub full_name: FullName,
    pub email: SurveyEmail,
    pub date_of_birth: DateOfBirth,
    pub contact_number: ContactNumber,
    pub favourite_foods: FavouriteFood,
    pub eat_out: Rating,
    pub watch_movies: Rating,
    #[serde(rename = "watchTV")]
    pub watch_tv: Rating,
    pub listen_radio: Rating,
}

/// Every message explaining why a snapshot was rejected, in the order the fields appear on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

impl TryFrom<FormSnapshot> for SurveyRecord {
    type Error = ValidationErrors;

    /// Checks all fields, without stopping at the first failure: the respondent gets to fix
    /// everything in one go.
    fn try_from(snapshot: FormSnapshot) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let full_name = keep_ok(FullName::parse(&snapshot.full_name), &mut errors);
        let email = keep_ok(SurveyEmail::parse(&snapshot.email), &mut errors);
        let date_of_birth = keep_ok(DateOfBirth::parse(&snapshot.date_of_birth), &mut errors);
        let contact_number = keep_ok(ContactNumber::parse(&snapshot.contact_number), &mut errors);
        let favourite_foods = keep_ok(
            FavouriteFood::parse(snapshot.favourite_foods.as_deref()),
            &mut errors,
        );
        let watch_movies = keep_ok(
            Rating::parse(snapshot.watch_movies.as_deref(), "Watch Movies"),
            &mut errors,
        );
        let listen_radio = keep_ok(
            Rating::parse(snapshot.listen_radio.as_deref(), "Listen to Radio"),
            &mut errors,
        );
        let eat_out = keep_ok(
            Rating::parse(snapshot.eat_out.as_deref(), "Eat Out"),
            &mut errors,
        );
        let watch_tv = keep_ok(
            Rating::parse(snapshot.watch_tv.as_deref(), "Watch TV"),
            &mut errors,
        );

        match (
            full_name,
            email,
            date_of_birth,
            contact_number,
            favourite_foods,
            watch_movies,
            listen_radio,
            eat_out,
            watch_tv,
        ) {
            (
                Some(full_name),
                Some(email),
                Some(date_of_birth),
                Some(contact_number),
                Some(favourite_foods),
                Some(watch_movies),
                Some(listen_radio),
                Some(eat_out),
                Some(watch_tv),
            ) => Ok(Self {
                full_name,
                email,
                date_of_birth,
                contact_number,
                favourite_foods,
                eat_out,
                watch_movies,
                watch_tv,
                listen_radio,
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

/// Moves the error message (if any) into `errors` and hands back the parsed value.
fn keep_ok<T>(result: Result<T, String>, errors: &mut Vec<String>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

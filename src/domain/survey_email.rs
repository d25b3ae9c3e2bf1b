use once_cell::sync::Lazy;
use regex::Regex;

// Something, an `@`, something, a dot, something. Deliberately loose: the backend has the final say.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

#[derive(Debug, Clone, serde::Serialize)]
pub struct SurveyEmail(String);

impl SurveyEmail {
    pub fn parse(s: &str) -> Result<SurveyEmail, String> {
        let s = s.trim();
        if s.is_empty() {
            Err("Email is required.".into())
        } else if !EMAIL_SHAPE.is_match(s) {
            Err("Invalid email format.".into())
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl AsRef<str> for SurveyEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

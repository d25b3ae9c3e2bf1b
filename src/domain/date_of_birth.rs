/// The `YYYY-MM-DD` string produced by the browser's date input. We only check that it is present:
/// turning it into a calendar date (and deciding whether the respondent is old enough) is the
/// backend's job.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DateOfBirth(String);

impl DateOfBirth {
    pub fn parse(s: &str) -> Result<DateOfBirth, String> {
        let s = s.trim();
        if s.is_empty() {
            Err("Date of Birth is required.".into())
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl AsRef<str> for DateOfBirth {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

static TEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("contact number pattern is a valid regex"));

#[derive(Debug, Clone, serde::Serialize)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub fn parse(s: &str) -> Result<ContactNumber, String> {
        let s = s.trim();
        if s.is_empty() {
            Err("Contact Number is required.".into())
        } else if !TEN_DIGITS.is_match(s) {
            Err("Contact Number must be 10 digits.".into())
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl AsRef<str> for ContactNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

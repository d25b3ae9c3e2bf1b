#[derive(Debug, Clone, serde::Serialize)]
pub struct FullName(String);

impl FullName {
    /// Returns an instance of `FullName` if the input, once trimmed, is not empty.
    /// The error is the message we show to the respondent.
    pub fn parse(s: &str) -> Result<FullName, String> {
        // `.trim()` returns a view over the input `s` without trailing whitespace-like characters.
        let s = s.trim();
        if s.is_empty() {
            Err("Full Name is required.".into())
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

/// The caller gets a shared reference to the inner string. This gives the caller **read-only**
/// access, they have no way to compromise our invariants!
impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

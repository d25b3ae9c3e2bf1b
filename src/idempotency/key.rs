use uuid::Uuid;

/// Identifies one rendering of the survey form. The key travels in a hidden field, so two
/// submissions carrying the same key come from the same form on the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionKey(Uuid);

impl SubmissionKey {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl TryFrom<String> for SubmissionKey {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| "The submission key is missing or malformed.".to_string())
    }
}

impl std::fmt::Display for SubmissionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

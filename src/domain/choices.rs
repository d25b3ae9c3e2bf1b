/// The foods a respondent can pick from. Exactly one is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteFood {
    Pizza,
    Pasta,
    PapAndWors,
    Others,
}

impl FavouriteFood {
    pub const ALL: [FavouriteFood; 4] = [
        FavouriteFood::Pizza,
        FavouriteFood::Pasta,
        FavouriteFood::PapAndWors,
        FavouriteFood::Others,
    ];

    /// The value carried by the radio button, and the one the backend expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            FavouriteFood::Pizza => "Pizza",
            FavouriteFood::Pasta => "Pasta",
            FavouriteFood::PapAndWors => "Pap and Wors",
            FavouriteFood::Others => "Others",
        }
    }

    /// A missing selection and a value we do not know about are treated the same way.
    pub fn parse(selection: Option<&str>) -> Result<FavouriteFood, String> {
        selection
            .map(str::trim)
            .and_then(|s| Self::ALL.into_iter().find(|food| food.as_str() == s))
            .ok_or_else(|| "A favourite food must be selected.".to_string())
    }
}

impl serde::Serialize for FavouriteFood {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// How strongly a respondent agrees with liking an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    StronglyAgree,
    Agree,
    Neutral,
    Disagree,
    StronglyDisagree,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::StronglyAgree,
        Rating::Agree,
        Rating::Neutral,
        Rating::Disagree,
        Rating::StronglyDisagree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::StronglyAgree => "Strongly Agree",
            Rating::Agree => "Agree",
            Rating::Neutral => "Neutral",
            Rating::Disagree => "Disagree",
            Rating::StronglyDisagree => "Strongly Disagree",
        }
    }

    /// `activity` is the human label of the rating group, used in the error message.
    pub fn parse(selection: Option<&str>, activity: &str) -> Result<Rating, String> {
        selection
            .map(str::trim)
            .and_then(|s| Self::ALL.into_iter().find(|rating| rating.as_str() == s))
            .ok_or_else(|| format!("Rating for '{activity}' is required."))
    }
}

impl serde::Serialize for Rating {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

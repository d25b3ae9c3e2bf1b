/// Eleven statistics computed by the backend over every stored survey, each fetched on its own.
/// Values are kept exactly as served.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AggregateReport {
    pub total_surveys: u64,
    pub average_age: f64,
    pub oldest_age: f64,
    pub youngest_age: f64,
    pub pizza_percentage: f64,
    pub pasta_percentage: f64,
    pub pap_and_wors_percentage: f64,
    pub average_movie_rating: f64,
    pub average_radio_rating: f64,
    pub average_eat_out_rating: f64,
    pub average_tv_rating: f64,
}

#[derive(Debug, serde::Serialize)]
pub struct ReportSection {
    pub title: &'static str,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, serde::Serialize)]
pub struct ReportEntry {
    pub label: &'static str,
    pub value: String,
}

impl ReportEntry {
    fn new(label: &'static str, value: impl std::fmt::Display) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }

    fn percentage(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value: format!("{value}%"),
        }
    }
}

impl AggregateReport {
    /// The report as shown on the results page: demographics, food preferences, lifestyle ratings.
    pub fn sections(&self) -> [ReportSection; 3] {
        [
            ReportSection {
                title: "Demographics",
                entries: vec![
                    ReportEntry::new("Total number of surveys", self.total_surveys),
                    ReportEntry::new("Average Age", self.average_age),
                    ReportEntry::new(
                        "Oldest person who participated in survey",
                        self.oldest_age,
                    ),
                    ReportEntry::new(
                        "Youngest person who participated in survey",
                        self.youngest_age,
                    ),
                ],
            },
            ReportSection {
                title: "Food preferences",
                entries: vec![
                    ReportEntry::percentage(
                        "Percentage of people who like Pizza",
                        self.pizza_percentage,
                    ),
                    ReportEntry::percentage(
                        "Percentage of people who like Pasta",
                        self.pasta_percentage,
                    ),
                    ReportEntry::percentage(
                        "Percentage of people who like Pap and Wors",
                        self.pap_and_wors_percentage,
                    ),
                ],
            },
            ReportSection {
                title: "Lifestyle ratings",
                entries: vec![
                    ReportEntry::new(
                        "People who like to watch movies",
                        self.average_movie_rating,
                    ),
                    ReportEntry::new(
                        "People who like to listen to radio",
                        self.average_radio_rating,
                    ),
                    ReportEntry::new("People who like to eat out", self.average_eat_out_rating),
                    ReportEntry::new("People who like to watch TV", self.average_tv_rating),
                ],
            },
        ]
    }
}

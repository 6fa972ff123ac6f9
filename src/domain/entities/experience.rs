use serde::{Deserialize, Serialize};

/// A work-experience entry as it appears in the portfolio data file.
///
/// `duration` stays unparsed ("MARCH 2019 - DECEMBER 2020", "JANUARY 2021 - PRESENT");
/// it is only interpreted when the list is sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub company: String,
    pub position: String,
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl ExperienceRecord {
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            duration: duration.into(),
            location: String::new(),
            description: Vec::new(),
            technologies: Vec::new(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::entities::experience::ExperienceRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
}

/// Lightweight project entry from the portfolio file (not a catalog `Project`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: String,
}

/// Contents of the portfolio data file. Every list defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<ExperienceRecord>,
    #[serde(default)]
    pub soft_skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<ProjectLink>,
    #[serde(default)]
    pub contact: Contact,
}

impl PortfolioData {
    /// Stand-in served when the data file cannot be loaded.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: "Portfolio data loading failed".to_string(),
            tagline: "Please check your data file".to_string(),
            skills: Vec::new(),
            experiences: Vec::new(),
            soft_skills: Vec::new(),
            projects: Vec::new(),
            contact: Contact::default(),
        }
    }
}

/// Public profile view, i.e. the portfolio data without experiences.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub tagline: String,
    pub skills: Vec<Skill>,
    pub soft_skills: Vec<Skill>,
    pub projects: Vec<ProjectLink>,
    pub contact: Contact,
}

impl PortfolioData {
    /// Splits the file contents into the profile and the raw experience list.
    pub fn into_parts(self) -> (Profile, Vec<ExperienceRecord>) {
        let profile = Profile {
            name: self.name,
            bio: self.bio,
            tagline: self.tagline,
            skills: self.skills,
            soft_skills: self.soft_skills,
            projects: self.projects,
            contact: self.contact,
        };
        (profile, self.experiences)
    }
}

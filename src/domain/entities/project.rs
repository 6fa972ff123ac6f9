use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ───── Reference Data ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyCategory {
    Frontend,
    Backend,
    Database,
    Tool,
    Cloud,
    Mobile,
}

impl TechnologyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechnologyCategory::Frontend => "frontend",
            TechnologyCategory::Backend => "backend",
            TechnologyCategory::Database => "database",
            TechnologyCategory::Tool => "tool",
            TechnologyCategory::Cloud => "cloud",
            TechnologyCategory::Mobile => "mobile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub category: TechnologyCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Technology {
    pub fn new(name: impl Into<String>, category: TechnologyCategory) -> Self {
        Self {
            name: name.into(),
            category,
            icon: None,
            color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Screenshot,
    Mockup,
    Diagram,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub url: String,
    pub alt: String,
    #[serde(rename = "type")]
    pub image_type: ImageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_improvement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_engagement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_reduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_metrics: Option<BTreeMap<String, String>>,
}

// ───── Project ───────────────────────────────────────────────────────

/// A portfolio work item. Loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    pub technologies: Vec<Technology>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub completion_date: NaiveDate,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ProjectMetrics>,
}

impl Project {
    pub fn uses_technology(&self, name: &str) -> bool {
        self.technologies.iter().any(|tech| tech.name == name)
    }

    pub fn technology_names(&self) -> impl Iterator<Item = &str> {
        self.technologies.iter().map(|tech| tech.name.as_str())
    }
}

/// Partially filled project, as submitted for validation.
///
/// Nested objects are as loose as the top level: a category or technology
/// only has to be present, not complete, to count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub technologies: Option<Vec<TechnologyDraft>>,
    pub category: Option<CategoryDraft>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: Option<bool>,
    pub completion_date: Option<NaiveDate>,
    pub challenges: Option<Vec<String>>,
    pub outcomes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// `category` stays a raw string so unknown kinds still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnologyDraft {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl From<&ProjectCategory> for CategoryDraft {
    fn from(category: &ProjectCategory) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: Some(category.name.clone()),
            description: Some(category.description.clone()),
            color: Some(category.color.clone()),
        }
    }
}

impl From<&Technology> for TechnologyDraft {
    fn from(tech: &Technology) -> Self {
        Self {
            name: Some(tech.name.clone()),
            category: Some(tech.category.as_str().to_string()),
        }
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            id: Some(project.id.clone()),
            title: Some(project.title.clone()),
            description: Some(project.description.clone()),
            long_description: Some(project.long_description.clone()),
            technologies: Some(project.technologies.iter().map(TechnologyDraft::from).collect()),
            category: Some(CategoryDraft::from(&project.category)),
            live_url: project.live_url.clone(),
            github_url: project.github_url.clone(),
            featured: Some(project.featured),
            completion_date: Some(project.completion_date),
            challenges: Some(project.challenges.clone()),
            outcomes: Some(project.outcomes.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Contents of the catalog data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub categories: Vec<ProjectCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

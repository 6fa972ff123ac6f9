use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slug::slugify;

use crate::entities::project::{Project, ProjectCategory, ProjectMetrics, Technology, TechnologyCategory};

pub const NO_DESCRIPTION: &str = "No description available";

/// One entry of a repository listing (pinned or top-starred repositories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub language_color: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Settings for turning listing entries into catalog projects.
#[derive(Debug, Clone)]
pub struct RepoMapping {
    pub categories: Vec<ProjectCategory>,
    pub default_category: ProjectCategory,
    pub featured_min_stars: u32,
}

impl RepoMapping {
    pub fn new(categories: Vec<ProjectCategory>, featured_min_stars: u32) -> Self {
        Self {
            categories,
            default_category: open_source_category(),
            featured_min_stars,
        }
    }

    fn resolve_category(&self, tech_category: Option<TechnologyCategory>) -> ProjectCategory {
        tech_category
            .and_then(|wanted| self.categories.iter().find(|c| c.id == wanted.as_str()))
            .cloned()
            .unwrap_or_else(|| self.default_category.clone())
    }
}

pub fn open_source_category() -> ProjectCategory {
    ProjectCategory {
        id: "opensource".to_string(),
        name: "Open Source".to_string(),
        description: "Public repositories".to_string(),
        color: "#6E7781".to_string(),
        icon: None,
    }
}

/// Best-effort category for a repository's primary language.
pub fn infer_technology_category(language: &str) -> TechnologyCategory {
    match language.to_lowercase().as_str() {
        "javascript" | "typescript" | "html" | "css" | "scss" | "vue" | "svelte" | "astro" => {
            TechnologyCategory::Frontend
        }
        "swift" | "kotlin" | "dart" | "objective-c" => TechnologyCategory::Mobile,
        "shell" | "dockerfile" | "makefile" | "nix" | "powershell" => TechnologyCategory::Tool,
        "hcl" => TechnologyCategory::Cloud,
        "sql" | "plpgsql" | "tsql" => TechnologyCategory::Database,
        _ => TechnologyCategory::Backend,
    }
}

impl GitHubRepo {
    pub fn project_id(&self) -> String {
        format!("gh-{}", slugify(&self.name))
    }

    /// Maps every `Project` field; fields the listing cannot populate get empty defaults.
    pub fn into_project(self, mapping: &RepoMapping) -> Project {
        let id = self.project_id();
        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let technology = self.language.map(|language| Technology {
            category: infer_technology_category(&language),
            name: language,
            icon: None,
            color: self.language_color,
        });
        let category = mapping.resolve_category(technology.as_ref().map(|t| t.category));

        let mut custom_metrics = BTreeMap::new();
        custom_metrics.insert("Stars".to_string(), self.stars.to_string());

        Project {
            id,
            title: self.name,
            long_description: description.clone(),
            description,
            technologies: technology.into_iter().collect(),
            category,
            images: Vec::new(),
            live_url: None,
            github_url: Some(self.url),
            featured: self.stars >= mapping.featured_min_stars,
            completion_date: self.updated_at.date_naive(),
            challenges: Vec::new(),
            outcomes: Vec::new(),
            metrics: Some(ProjectMetrics {
                custom_metrics: Some(custom_metrics),
                ..ProjectMetrics::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn frontend() -> ProjectCategory {
        ProjectCategory {
            id: "frontend".into(),
            name: "Frontend".into(),
            description: "UI".into(),
            color: "#61DAFB".into(),
            icon: None,
        }
    }

    fn repo(language: Option<&str>, description: Option<&str>, stars: u32) -> GitHubRepo {
        GitHubRepo {
            name: "My Cool Repo".into(),
            description: description.map(str::to_string),
            url: "https://github.com/someone/my-cool-repo".into(),
            stars,
            language: language.map(str::to_string),
            language_color: Some("#3178C6".into()),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 9, 22, 15, 0).unwrap(),
        }
    }

    #[test]
    fn maps_listing_entry_to_project() {
        let mapping = RepoMapping::new(vec![frontend()], 10);
        let project = repo(Some("TypeScript"), Some("A UI kit"), 42).into_project(&mapping);

        assert_eq!(project.id, "gh-my-cool-repo");
        assert_eq!(project.title, "My Cool Repo");
        assert_eq!(project.description, "A UI kit");
        assert_eq!(project.long_description, "A UI kit");
        assert_eq!(project.category.id, "frontend");
        assert_eq!(project.technologies.len(), 1);
        assert_eq!(project.technologies[0].category, TechnologyCategory::Frontend);
        assert_eq!(project.technologies[0].color.as_deref(), Some("#3178C6"));
        assert!(project.featured);
        assert_eq!(project.completion_date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(
            project.github_url.as_deref(),
            Some("https://github.com/someone/my-cool-repo")
        );
        assert!(project.images.is_empty() && project.challenges.is_empty() && project.outcomes.is_empty());
        let stars = project.metrics.and_then(|m| m.custom_metrics).unwrap();
        assert_eq!(stars.get("Stars").map(String::as_str), Some("42"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let mapping = RepoMapping::new(vec![frontend()], 10);
        let project = repo(None, Some("   "), 3).into_project(&mapping);

        assert_eq!(project.description, NO_DESCRIPTION);
        assert!(project.technologies.is_empty());
        assert_eq!(project.category.id, "opensource");
        assert!(!project.featured);
    }

    #[test]
    fn unknown_catalog_category_uses_default() {
        let mapping = RepoMapping::new(vec![frontend()], 10);
        let project = repo(Some("Rust"), None, 0).into_project(&mapping);

        assert_eq!(project.technologies[0].category, TechnologyCategory::Backend);
        assert_eq!(project.category, open_source_category());
    }
}

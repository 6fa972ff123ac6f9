use serde::{Deserialize, Serialize};

use crate::entities::project::{Project, TechnologyCategory};

// ───── Query Parameters ──────────────────────────────────────────────

/// Independent filter conditions, combined with logical AND.
/// `None` and empty strings impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilters {
    pub category: Option<String>,
    pub technology: Option<String>,
    pub featured: Option<bool>,
    pub search_query: Option<String>,
}

impl ProjectFilters {
    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category = Some(category_id.into());
        self
    }

    pub fn technology(mut self, name: impl Into<String>) -> Self {
        self.technology = Some(name.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Title,
    CompletionDate,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectSortOptions {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ProjectSortOptions {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Per-field toggles for free-text search. The title is always searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub include_description: bool,
    pub include_technologies: bool,
    pub include_categories: bool,
    pub include_challenges: bool,
    pub include_outcomes: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_description: true,
            include_technologies: true,
            include_categories: true,
            include_challenges: false,
            include_outcomes: false,
        }
    }
}

// ───── Derived Views ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category_id: String,
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyCount {
    pub technology: String,
    pub count: usize,
    pub category: TechnologyCategory,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_projects: usize,
    pub featured_projects: usize,
    pub category_counts: Vec<CategoryCount>,
    pub technology_counts: Vec<TechnologyCount>,
    pub recent_projects: Vec<Project>,
}

/// One (year, month) bucket of the completion timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineBucket {
    pub month: String,
    #[serde(skip)]
    pub year_month: (i32, u32),
    pub count: usize,
    pub projects: Vec<Project>,
}

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap, HashSet},
};

use chrono::Datelike;

use crate::{
    constants::RECENT_PROJECTS,
    entities::{
        project::{Project, ProjectCategory, ProjectDraft, Technology, ValidationReport},
        project_query::{
            CategoryCount, ProjectFilters, ProjectSortOptions, ProjectStats, SearchOptions,
            SortDirection, SortField, TechnologyCount, TimelineBucket,
        },
    },
    utils::valid_url::is_valid_url,
};

/// Immutable snapshot of projects and categories answering read-only queries.
///
/// A catalog is built once per data set and replaced, never mutated, when the
/// upstream data changes. It is safe to share across threads as-is.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
    categories: Vec<ProjectCategory>,
}

/// Every searchable field switched on, as used by the `search_query` filter.
const SEARCH_ALL_FIELDS: SearchOptions = SearchOptions {
    include_description: true,
    include_technologies: true,
    include_categories: true,
    include_challenges: true,
    include_outcomes: true,
};

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>, categories: Vec<ProjectCategory>) -> Self {
        ProjectCatalog { projects, categories }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Copy of every project in insertion order.
    pub fn all_projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn all_categories(&self) -> Vec<ProjectCategory> {
        self.categories.clone()
    }

    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|project| project.featured).collect()
    }

    pub fn projects_by_category(&self, category_id: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.category.id == category_id)
            .collect()
    }

    pub fn projects_by_technology(&self, name: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.uses_technology(name))
            .collect()
    }

    /// Distinct technologies across all projects, sorted by name.
    /// When two projects disagree on a technology's details, the last one wins.
    pub fn all_technologies(&self) -> Vec<Technology> {
        let mut by_name: HashMap<&str, &Technology> = HashMap::new();
        for tech in self.projects.iter().flat_map(|project| &project.technologies) {
            by_name.insert(tech.name.as_str(), tech);
        }

        let mut technologies: Vec<Technology> = by_name.into_values().cloned().collect();
        technologies.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        technologies
    }

    /// Projects satisfying every supplied filter, in catalog order.
    pub fn filtered_projects(&self, filters: &ProjectFilters) -> Vec<Project> {
        let category = non_empty(&filters.category);
        let technology = non_empty(&filters.technology);
        let query = non_empty(&filters.search_query).map(str::to_lowercase);

        self.projects
            .iter()
            .filter(|project| category.is_none_or(|id| project.category.id == id))
            .filter(|project| technology.is_none_or(|name| project.uses_technology(name)))
            .filter(|project| filters.featured.is_none_or(|featured| project.featured == featured))
            .filter(|project| {
                query
                    .as_deref()
                    .is_none_or(|q| matches_query(project, q, &SEARCH_ALL_FIELDS))
            })
            .cloned()
            .collect()
    }

    /// Stable sort; projects with equal keys keep their relative order in both directions.
    pub fn sort_projects(projects: &[Project], options: ProjectSortOptions) -> Vec<Project> {
        let mut sorted = projects.to_vec();
        sorted.sort_by(|a, b| {
            let ordering = compare_by(a, b, options.field);
            match options.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        sorted
    }

    /// Case-insensitive substring search. The title is always searched, other
    /// fields according to `options`.
    pub fn search_projects(&self, query: &str, options: SearchOptions) -> Vec<Project> {
        let query = query.to_lowercase();
        self.projects
            .iter()
            .filter(|project| matches_query(project, &query, &options))
            .cloned()
            .collect()
    }

    /// Other projects ranked by how many technology names they share with
    /// `project_id`. Unknown ids yield an empty list; ties keep catalog order.
    pub fn related_projects(&self, project_id: &str, limit: usize) -> Vec<Project> {
        let Some(target) = self.project_by_id(project_id) else {
            return Vec::new();
        };
        let target_names: HashSet<&str> = target.technology_names().collect();

        let mut scored: Vec<(usize, &Project)> = self
            .projects
            .iter()
            .filter(|project| project.id != project_id)
            .map(|project| {
                let score = project
                    .technology_names()
                    .filter(|name| target_names.contains(name))
                    .count();
                (score, project)
            })
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, project)| project.clone())
            .collect()
    }

    pub fn project_stats(&self) -> ProjectStats {
        let category_counts = self
            .categories
            .iter()
            .map(|category| CategoryCount {
                category_id: category.id.clone(),
                category: category.name.clone(),
                count: self.projects_by_category(&category.id).len(),
            })
            .collect();

        let technology_counts = self
            .all_technologies()
            .into_iter()
            .map(|tech| TechnologyCount {
                count: self.projects_by_technology(&tech.name).len(),
                technology: tech.name,
                category: tech.category,
            })
            .collect();

        let mut recent_projects = Self::sort_projects(
            &self.projects,
            ProjectSortOptions::new(SortField::CompletionDate, SortDirection::Desc),
        );
        recent_projects.truncate(RECENT_PROJECTS);

        ProjectStats {
            total_projects: self.projects.len(),
            featured_projects: self.featured_projects().len(),
            category_counts,
            technology_counts,
            recent_projects,
        }
    }

    /// Projects bucketed by completion (year, month), oldest bucket first.
    /// Only months with at least one project are emitted.
    pub fn project_timeline(&self) -> Vec<TimelineBucket> {
        let mut buckets: BTreeMap<(i32, u32), Vec<Project>> = BTreeMap::new();
        for project in &self.projects {
            let date = project.completion_date;
            buckets
                .entry((date.year(), date.month()))
                .or_default()
                .push(project.clone());
        }

        buckets
            .into_iter()
            .map(|(year_month, mut projects)| {
                projects.sort_by(|a, b| b.completion_date.cmp(&a.completion_date));
                let month = projects
                    .first()
                    .map(|p| p.completion_date.format("%B %Y").to_string())
                    .unwrap_or_default();
                TimelineBucket {
                    month,
                    year_month,
                    count: projects.len(),
                    projects,
                }
            })
            .collect()
    }

    /// Checks a draft against the catalog's record rules, collecting every violation.
    pub fn validate_project(&self, draft: &ProjectDraft) -> ValidationReport {
        let mut errors = Vec::new();

        if draft.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
            errors.push("Title is required".to_string());
        }
        if draft.description.as_deref().is_none_or(|d| d.trim().is_empty()) {
            errors.push("Description is required".to_string());
        }
        if draft.category.is_none() {
            errors.push("Category is required".to_string());
        }
        if draft.technologies.as_ref().is_none_or(|techs| techs.is_empty()) {
            errors.push("At least one technology is required".to_string());
        }
        if draft.completion_date.is_none() {
            errors.push("Completion date is required".to_string());
        }
        if non_empty(&draft.live_url).is_some_and(|url| !is_valid_url(url)) {
            errors.push("Live URL must be a valid URL".to_string());
        }
        if non_empty(&draft.github_url).is_some_and(|url| !is_valid_url(url)) {
            errors.push("GitHub URL must be a valid URL".to_string());
        }

        ValidationReport::from_errors(errors)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn compare_by(a: &Project, b: &Project, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::CompletionDate => a.completion_date.cmp(&b.completion_date),
        SortField::Category => a
            .category
            .name
            .to_lowercase()
            .cmp(&b.category.name.to_lowercase()),
    }
}

/// `query` must already be lower-cased.
fn matches_query(project: &Project, query: &str, options: &SearchOptions) -> bool {
    contains(&project.title, query)
        || (options.include_description
            && (contains(&project.description, query)
                || contains(&project.long_description, query)))
        || (options.include_technologies
            && project.technologies.iter().any(|tech| contains(&tech.name, query)))
        || (options.include_categories && contains(&project.category.name, query))
        || (options.include_challenges
            && project.challenges.iter().any(|c| contains(c, query)))
        || (options.include_outcomes && project.outcomes.iter().any(|o| contains(o, query)))
}

fn contains(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(query)
}

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::{
    constants::{DEFAULT_RELATED_LIMIT, MAX_RELATED_LIMIT},
    entities::{
        project::ProjectDraft,
        project_query::{ProjectFilters, ProjectSortOptions, SearchOptions, SortDirection, SortField},
    },
    errors::AppError,
    use_cases::catalog::ProjectCatalog,
    AppState,
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListQuery {
    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    #[validate(length(max = 100, message = "Technology must be at most 100 characters"))]
    pub technology: Option<String>,

    pub featured: Option<bool>,

    #[validate(length(max = 200, message = "Search query must be at most 200 characters"))]
    pub search: Option<String>,

    pub sort: Option<SortField>,

    pub direction: Option<SortDirection>,
}

impl ProjectListQuery {
    fn filters(&self) -> ProjectFilters {
        ProjectFilters {
            category: self.category.clone(),
            technology: self.technology.clone(),
            featured: self.featured,
            search_query: self.search.clone(),
        }
    }

    /// A direction alone sorts by the default field.
    fn sort_options(&self) -> Option<ProjectSortOptions> {
        if self.sort.is_none() && self.direction.is_none() {
            return None;
        }
        Some(ProjectSortOptions::new(
            self.sort.unwrap_or_default(),
            self.direction.unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[validate(length(min = 1, max = 200, message = "Search query must be 1 to 200 characters"))]
    pub q: String,

    pub include_description: Option<bool>,
    pub include_technologies: Option<bool>,
    pub include_categories: Option<bool>,
    pub include_challenges: Option<bool>,
    pub include_outcomes: Option<bool>,
}

impl SearchQuery {
    fn options(&self) -> SearchOptions {
        let defaults = SearchOptions::default();
        SearchOptions {
            include_description: self.include_description.unwrap_or(defaults.include_description),
            include_technologies: self.include_technologies.unwrap_or(defaults.include_technologies),
            include_categories: self.include_categories.unwrap_or(defaults.include_categories),
            include_challenges: self.include_challenges.unwrap_or(defaults.include_challenges),
            include_outcomes: self.include_outcomes.unwrap_or(defaults.include_outcomes),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RelatedQuery {
    #[validate(range(min = 1, max = 20, message = "Limit must be between 1 and 20"))]
    pub limit: Option<usize>,
}

#[instrument(skip(state, query))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectListQuery>,
) -> Result<impl Responder, AppError> {
    query.validate()?;

    let snapshot = state.snapshot();
    let projects = snapshot.catalog.filtered_projects(&query.filters());

    let projects = match query.sort_options() {
        Some(options) => ProjectCatalog::sort_projects(&projects, options),
        None => projects,
    };

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state, query))]
pub async fn search_projects(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, AppError> {
    query.validate()?;

    let results = state
        .snapshot()
        .catalog
        .search_projects(&query.q, query.options());

    Ok(HttpResponse::Ok().json(results))
}

#[instrument(skip(state))]
pub async fn get_project_stats(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(state.snapshot().catalog.project_stats()))
}

#[instrument(skip(state))]
pub async fn get_project_timeline(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(state.snapshot().catalog.project_timeline()))
}

#[instrument(skip(state))]
pub async fn get_technologies(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(state.snapshot().catalog.all_technologies()))
}

#[instrument(skip(state))]
pub async fn get_categories(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(state.snapshot().catalog.all_categories()))
}

#[instrument(skip(state, draft))]
pub async fn validate_project(
    state: web::Data<AppState>,
    draft: web::Json<ProjectDraft>,
) -> Result<impl Responder, AppError> {
    let report = state.snapshot().catalog.validate_project(&draft);
    Ok(HttpResponse::Ok().json(report))
}

#[instrument(skip(state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let snapshot = state.snapshot();
    let project = snapshot
        .catalog
        .project_by_id(&project_id)
        .ok_or_else(|| AppError::NotFound(format!("Project '{}' not found", project_id)))?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(state, query))]
pub async fn get_related_projects(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    query: web::Query<RelatedQuery>,
) -> Result<impl Responder, AppError> {
    query.validate()?;

    let limit = query
        .limit
        .unwrap_or(DEFAULT_RELATED_LIMIT)
        .min(MAX_RELATED_LIMIT);
    let related = state.snapshot().catalog.related_projects(&project_id, limit);

    Ok(HttpResponse::Ok().json(related))
}

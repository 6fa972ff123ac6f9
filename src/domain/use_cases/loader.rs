use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::{
    cache::repo_cache::{CacheStorage, RepoCache},
    entities::{
        experience::ExperienceRecord,
        github_repo::RepoMapping,
        profile::{PortfolioData, Profile},
        project::{CatalogData, Project, ProjectDraft},
    },
    repositories::{portfolio::PortfolioRepository, repo_source::RepoSource},
    use_cases::{catalog::ProjectCatalog, experience::sort_experiences},
};

/// Everything the read-only API serves, built in one load.
#[derive(Debug, Clone)]
pub struct PortfolioSnapshot {
    pub profile: Profile,
    pub experiences: Vec<ExperienceRecord>,
    pub catalog: ProjectCatalog,
    pub loaded_at: DateTime<Utc>,
}

impl PortfolioSnapshot {
    pub fn placeholder(name: &str) -> Self {
        let (profile, experiences) = PortfolioData::placeholder(name).into_parts();
        PortfolioSnapshot {
            profile,
            experiences,
            catalog: ProjectCatalog::default(),
            loaded_at: Utc::now(),
        }
    }
}

pub struct PortfolioLoader<P, R, S>
where
    P: PortfolioRepository,
    R: RepoSource,
    S: CacheStorage,
{
    pub portfolio_repo: P,
    pub repo_source: R,
    pub repo_cache: RepoCache<S>,
    pub fallback_name: String,
    pub featured_min_stars: u32,
}

impl<P, R, S> PortfolioLoader<P, R, S>
where
    P: PortfolioRepository,
    R: RepoSource,
    S: CacheStorage,
{
    pub fn new(
        portfolio_repo: P,
        repo_source: R,
        repo_cache: RepoCache<S>,
        fallback_name: impl Into<String>,
        featured_min_stars: u32,
    ) -> Self {
        PortfolioLoader {
            portfolio_repo,
            repo_source,
            repo_cache,
            fallback_name: fallback_name.into(),
            featured_min_stars,
        }
    }

    /// Builds a fresh snapshot. Never fails: broken sources are logged and
    /// replaced by placeholders so the API always has something to serve.
    pub async fn load(&self) -> PortfolioSnapshot {
        let (profile, experiences) = self.load_profile().await;
        let catalog = self.load_catalog().await;

        info!(
            projects = catalog.len(),
            experiences = experiences.len(),
            "Loaded portfolio snapshot"
        );

        PortfolioSnapshot {
            profile,
            experiences,
            catalog,
            loaded_at: Utc::now(),
        }
    }

    async fn load_profile(&self) -> (Profile, Vec<ExperienceRecord>) {
        let data = match self.portfolio_repo.load_portfolio().await {
            Ok(data) => data,
            Err(e) => {
                error!("Error loading portfolio data: {}", e);
                PortfolioData::placeholder(self.fallback_name.as_str())
            }
        };

        let (profile, experiences) = data.into_parts();
        let experiences = match sort_experiences(&experiences) {
            Ok(sorted) => sorted,
            Err(e) => {
                warn!("Keeping experiences in file order: {}", e);
                experiences
            }
        };

        (profile, experiences)
    }

    async fn load_catalog(&self) -> ProjectCatalog {
        let CatalogData { mut categories, projects } = match self.portfolio_repo.load_catalog().await {
            Ok(data) => data,
            Err(e) => {
                error!("Error loading project catalog: {}", e);
                CatalogData::default()
            }
        };

        let mapping = RepoMapping::new(categories.clone(), self.featured_min_stars);
        let repo_projects = self
            .repo_cache
            .get_or_fetch(&self.repo_source)
            .await
            .into_iter()
            .map(|repo| repo.into_project(&mapping));

        let projects = dedupe_by_id(
            projects
                .into_iter()
                .chain(repo_projects)
                .map(dedupe_technologies),
        );

        let default_id = mapping.default_category.id.as_str();
        if projects.iter().any(|p| p.category.id == default_id)
            && !categories.iter().any(|c| c.id == default_id)
        {
            categories.push(mapping.default_category.clone());
        }

        let catalog = ProjectCatalog::new(projects, categories);
        for project in catalog.projects() {
            let report = catalog.validate_project(&ProjectDraft::from(project));
            if !report.is_valid {
                warn!(id = %project.id, errors = ?report.errors, "Catalog project failed validation");
            }
        }

        catalog
    }
}

/// Keeps the first project for every id, in order.
fn dedupe_by_id(projects: impl Iterator<Item = Project>) -> Vec<Project> {
    let mut seen = HashSet::new();
    projects
        .filter(|project| {
            let fresh = seen.insert(project.id.clone());
            if !fresh {
                warn!(id = %project.id, "Dropping project with duplicate id");
            }
            fresh
        })
        .collect()
}

/// Technology names are unique within a project; the first occurrence wins.
fn dedupe_technologies(mut project: Project) -> Project {
    let mut seen = HashSet::new();
    project.technologies.retain(|tech| {
        let fresh = seen.insert(tech.name.clone());
        if !fresh {
            warn!(id = %project.id, technology = %tech.name, "Dropping duplicate technology");
        }
        fresh
    });
    project
}

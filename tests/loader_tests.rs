
use std::{fs, time::Duration};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use portfolio_showcase::{
    cache::repo_cache::{FileStorage, MemoryStorage, RepoCache},
    entities::github_repo::GitHubRepo,
    errors::AppError,
    repositories::{
        portfolio::{PortfolioRepository, YamlPortfolioRepo},
        repo_source::RepoSource,
    },
    use_cases::loader::PortfolioLoader,
};
use test_utils::{CATALOG_YAML, PORTFOLIO_YAML};

mock! {
    pub Source {}

    #[async_trait]
    impl RepoSource for Source {
        async fn fetch_repos(&self) -> Result<Vec<GitHubRepo>, AppError>;
    }
}

fn listing() -> Vec<GitHubRepo> {
    vec![GitHubRepo {
        name: "dotfiles".into(),
        description: Some("Shell setup".into()),
        url: "https://github.com/test/dotfiles".into(),
        stars: 3,
        language: Some("Shell".into()),
        language_color: Some("#89e051".into()),
        updated_at: Utc.with_ymd_and_hms(2022, 8, 30, 12, 0, 0).unwrap(),
    }]
}

fn yaml_repo(dir: &std::path::Path) -> YamlPortfolioRepo {
    fs::write(dir.join("portfolio.yaml"), PORTFOLIO_YAML).unwrap();
    fs::write(dir.join("catalog.yaml"), CATALOG_YAML).unwrap();
    YamlPortfolioRepo::new(dir.join("portfolio.yaml"), dir.join("catalog.yaml"))
}

#[tokio::test]
async fn yaml_repository_reads_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let repo = yaml_repo(dir.path());

    let portfolio = repo.load_portfolio().await.unwrap();
    assert_eq!(portfolio.name, "Test Person");
    assert_eq!(portfolio.experiences.len(), 2);

    let catalog = repo.load_catalog().await.unwrap();
    assert_eq!(catalog.categories.len(), 2);
    assert_eq!(catalog.projects[1].id, "p2");
}

#[tokio::test]
async fn yaml_repository_reports_missing_and_invalid_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("catalog.yaml"), "projects: [oops").unwrap();
    let repo = YamlPortfolioRepo::new(dir.path().join("missing.yaml"), dir.path().join("catalog.yaml"));

    let missing = repo.load_portfolio().await.unwrap_err();
    assert!(matches!(missing, AppError::DataSource(ref msg) if msg.contains("missing.yaml")));

    let invalid = repo.load_catalog().await.unwrap_err();
    assert!(matches!(invalid, AppError::DataSource(ref msg) if msg.starts_with("Invalid YAML")));
}

#[tokio::test]
async fn listing_is_fetched_once_per_cache_window() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = MockSource::new();
    source.expect_fetch_repos().times(1).returning(|| Ok(listing()));

    let loader = PortfolioLoader::new(
        yaml_repo(dir.path()),
        source,
        RepoCache::new(Duration::from_secs(3600), MemoryStorage::new()),
        "Fallback",
        50,
    );

    let first = loader.load().await;
    let second = loader.load().await;

    assert_eq!(first.catalog.len(), 4);
    assert_eq!(second.catalog.len(), 4);

    let dotfiles = second.catalog.project_by_id("gh-dotfiles").unwrap();
    assert_eq!(dotfiles.category.id, "opensource");
    assert!(!dotfiles.featured);
    assert_eq!(dotfiles.technologies[0].color.as_deref(), Some("#89e051"));
}

#[tokio::test]
async fn file_cache_survives_a_new_loader() {
    let dir = tempfile::tempdir().unwrap();
    let cache_dir = dir.path().join("cache");

    let mut source = MockSource::new();
    source.expect_fetch_repos().times(1).returning(|| Ok(listing()));
    let loader = PortfolioLoader::new(
        yaml_repo(dir.path()),
        source,
        RepoCache::new(Duration::from_secs(3600), FileStorage::new(&cache_dir)),
        "Fallback",
        50,
    );
    loader.load().await;

    let mut offline = MockSource::new();
    offline.expect_fetch_repos().never();
    let restarted = PortfolioLoader::new(
        yaml_repo(dir.path()),
        offline,
        RepoCache::new(Duration::from_secs(3600), FileStorage::new(&cache_dir)),
        "Fallback",
        50,
    );

    let snapshot = restarted.load().await;
    assert!(snapshot.catalog.project_by_id("gh-dotfiles").is_some());
}

#[tokio::test]
async fn empty_listing_is_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let mut source = MockSource::new();
    source.expect_fetch_repos().times(2).returning(|| Ok(Vec::new()));

    let loader = PortfolioLoader::new(
        yaml_repo(dir.path()),
        source,
        RepoCache::new(Duration::from_secs(3600), MemoryStorage::new()),
        "Fallback",
        50,
    );

    loader.load().await;
    let snapshot = loader.load().await;
    assert_eq!(snapshot.catalog.len(), 3);
}

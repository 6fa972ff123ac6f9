use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::{entities::github_repo::GitHubRepo, errors::AppError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Returns the current repository listing
    async fn fetch_repos(&self) -> Result<Vec<GitHubRepo>, AppError>;
}

/// Repository listing exported to a JSON file (an array of `GitHubRepo`).
/// Without a path the listing is empty.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRepoSource {
    pub path: Option<PathBuf>,
}

impl SnapshotRepoSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        SnapshotRepoSource { path }
    }
}

#[async_trait]
impl RepoSource for SnapshotRepoSource {
    async fn fetch_repos(&self) -> Result<Vec<GitHubRepo>, AppError> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };

        let raw = fs::read_to_string(path).await.map_err(|e| {
            AppError::DataSource(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(serde_json::from_str(&raw)?)
    }
}

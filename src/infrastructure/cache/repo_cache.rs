use std::{
    io::ErrorKind,
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, error, warn};

use crate::{
    constants::REPO_CACHE_KEY,
    entities::github_repo::GitHubRepo,
    errors::AppError,
    repositories::repo_source::RepoSource,
};

/// Key/value store holding serialized cache entries.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    async fn read(&self, key: &str) -> Option<String>;
    async fn write(&self, key: &str, value: String) -> Result<(), AppError>;
    async fn remove(&self, key: &str);
}

#[async_trait]
impl<T: CacheStorage + ?Sized> CacheStorage for Box<T> {
    async fn read(&self, key: &str) -> Option<String> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: String) -> Result<(), AppError> {
        (**self).write(key, value).await
    }

    async fn remove(&self, key: &str) {
        (**self).remove(key).await
    }
}

/// Process-local storage; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    async fn write(&self, key: &str, value: String) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// One `<key>.json` file per entry inside `dir`; survives restarts.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl CacheStorage for FileStorage {
    async fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).await.ok()
    }

    async fn write(&self, key: &str, value: String) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).await?;
        fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key)).await {
            if e.kind() != ErrorKind::NotFound {
                warn!("Failed to remove cache file for {}: {}", key, e);
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    repos: Vec<GitHubRepo>,
    timestamp: DateTime<Utc>,
}

/// Freshness-windowed cache for the repository listing.
///
/// Entries older than `ttl` are discarded on read and the listing is fetched again.
#[derive(Debug, Clone)]
pub struct RepoCache<S: CacheStorage> {
    ttl: Duration,
    storage: S,
    key: String,
}

impl<S: CacheStorage> RepoCache<S> {
    pub fn new(ttl: Duration, storage: S) -> Self {
        RepoCache {
            ttl,
            storage,
            key: REPO_CACHE_KEY.to_string(),
        }
    }

    async fn get_at(&self, now: DateTime<Utc>) -> Option<Vec<GitHubRepo>> {
        let raw = self.storage.read(&self.key).await?;

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Discarding unreadable repo cache entry: {}", e);
                self.storage.remove(&self.key).await;
                return None;
            }
        };

        // A timestamp in the future counts as fresh.
        let stale = (now - entry.timestamp)
            .to_std()
            .is_ok_and(|age| age > self.ttl);

        if stale {
            debug!(key = %self.key, "repo cache entry expired");
            self.storage.remove(&self.key).await;
            return None;
        }

        Some(entry.repos)
    }

    async fn put_at(&self, repos: &[GitHubRepo], now: DateTime<Utc>) {
        let entry = CacheEntry {
            repos: repos.to_vec(),
            timestamp: now,
        };

        let written = match serde_json::to_string(&entry) {
            Ok(raw) => self.storage.write(&self.key, raw).await,
            Err(e) => Err(AppError::from(e)),
        };

        if let Err(e) = written {
            error!("Failed to cache repository listing: {}", e);
        }
    }

    pub async fn get_or_fetch<R>(&self, source: &R) -> Vec<GitHubRepo>
    where
        R: RepoSource + ?Sized,
    {
        self.get_or_fetch_at(source, Utc::now()).await
    }

    /// Serves a fresh cached listing, otherwise fetches and caches a new one.
    /// Fetch failures degrade to an empty listing and leave the cache untouched.
    pub async fn get_or_fetch_at<R>(&self, source: &R, now: DateTime<Utc>) -> Vec<GitHubRepo>
    where
        R: RepoSource + ?Sized,
    {
        if let Some(repos) = self.get_at(now).await {
            debug!(count = repos.len(), "repo listing served from cache");
            return repos;
        }

        match source.fetch_repos().await {
            Ok(repos) => {
                if !repos.is_empty() {
                    self.put_at(&repos, now).await;
                }
                repos
            }
            Err(e) => {
                error!("Failed to fetch repository listing: {}", e);
                Vec::new()
            }
        }
    }
}

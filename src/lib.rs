use std::sync::Arc;

use parking_lot::RwLock;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{cache, utils};

use cache::repo_cache::{CacheStorage, FileStorage, MemoryStorage, RepoCache};
use repositories::{portfolio::YamlPortfolioRepo, repo_source::SnapshotRepoSource};
use use_cases::loader::{PortfolioLoader, PortfolioSnapshot};

pub type AppPortfolioLoader = PortfolioLoader<YamlPortfolioRepo, SnapshotRepoSource, Box<dyn CacheStorage>>;

pub struct AppState {
    pub loader: AppPortfolioLoader,
    snapshot: RwLock<Arc<PortfolioSnapshot>>,
}

impl AppState {
    /// Wires the loader from configuration. The snapshot starts as a
    /// placeholder until the first `refresh`.
    pub fn new(config: &settings::AppConfig) -> Self {
        let portfolio_repo = YamlPortfolioRepo::new(&config.data_path, &config.catalog_path);
        let repo_source = SnapshotRepoSource::new(config.repo_snapshot_path());

        let storage: Box<dyn CacheStorage> = match &config.repo_cache_dir {
            Some(dir) => Box::new(FileStorage::new(dir)),
            None => Box::new(MemoryStorage::new()),
        };
        let repo_cache = RepoCache::new(config.repo_cache_ttl(), storage);

        let loader = PortfolioLoader::new(
            portfolio_repo,
            repo_source,
            repo_cache,
            config.name.as_str(),
            config.featured_min_stars,
        );

        Self::from_loader(loader)
    }

    pub fn from_loader(loader: AppPortfolioLoader) -> Self {
        let placeholder = PortfolioSnapshot::placeholder(&loader.fallback_name);
        AppState {
            loader,
            snapshot: RwLock::new(Arc::new(placeholder)),
        }
    }

    pub async fn bootstrap(config: &settings::AppConfig) -> Self {
        let state = Self::new(config);
        state.refresh().await;
        state
    }

    pub fn snapshot(&self) -> Arc<PortfolioSnapshot> {
        self.snapshot.read().clone()
    }

    /// Loads a new snapshot and swaps it in; readers holding the old one keep it.
    pub async fn refresh(&self) -> Arc<PortfolioSnapshot> {
        let fresh = Arc::new(self.loader.load().await);
        *self.snapshot.write() = fresh.clone();
        fresh
    }
}

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::{
    entities::{profile::PortfolioData, project::CatalogData},
    errors::AppError,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Reads the portfolio data file (bio, skills, experiences, contact)
    async fn load_portfolio(&self) -> Result<PortfolioData, AppError>;

    /// Reads the static project catalog (categories and projects)
    async fn load_catalog(&self) -> Result<CatalogData, AppError>;
}

#[derive(Debug, Clone)]
pub struct YamlPortfolioRepo {
    pub data_path: PathBuf,
    pub catalog_path: PathBuf,
}

impl YamlPortfolioRepo {
    pub fn new(data_path: impl Into<PathBuf>, catalog_path: impl Into<PathBuf>) -> Self {
        YamlPortfolioRepo {
            data_path: data_path.into(),
            catalog_path: catalog_path.into(),
        }
    }
}

#[async_trait]
impl PortfolioRepository for YamlPortfolioRepo {
    async fn load_portfolio(&self) -> Result<PortfolioData, AppError> {
        let raw = fs::read_to_string(&self.data_path).await.map_err(|e| {
            AppError::DataSource(format!("Failed to read {}: {}", self.data_path.display(), e))
        })?;

        Ok(serde_yaml::from_str(&raw)?)
    }

    async fn load_catalog(&self) -> Result<CatalogData, AppError> {
        let raw = fs::read_to_string(&self.catalog_path).await.map_err(|e| {
            AppError::DataSource(format!("Failed to read {}: {}", self.catalog_path.display(), e))
        })?;

        Ok(serde_yaml::from_str(&raw)?)
    }
}

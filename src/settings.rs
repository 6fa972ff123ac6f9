use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, path::PathBuf, str::FromStr, time::Duration};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default = "default_data_path")]
    pub data_path: String,

    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    #[serde(default)]
    pub repo_snapshot_path: Option<String>,

    #[serde(default)]
    pub repo_cache_dir: Option<String>,

    #[serde(default = "default_repo_cache_ttl")]
    pub repo_cache_ttl: String,

    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: String,

    #[serde(default = "default_featured_min_stars")]
    pub featured_min_stars: u32,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Showcase".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_data_path() -> String {
    "data/portfolio.yaml".to_string()
}
fn default_catalog_path() -> String {
    "data/catalog.yaml".to_string()
}
fn default_repo_cache_ttl() -> String {
    "1h".to_string()
}
fn default_refresh_interval() -> String {
    "15m".to_string()
}
fn default_featured_min_stars() -> u32 {
    50
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            cors_allowed_origins: default_cors_origins(),
            data_path: default_data_path(),
            catalog_path: default_catalog_path(),
            repo_snapshot_path: None,
            repo_cache_dir: None,
            repo_cache_ttl: default_repo_cache_ttl(),
            refresh_interval: default_refresh_interval(),
            featured_min_stars: default_featured_min_stars(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins"),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Optional paths set to "" behave as unset
        config.repo_snapshot_path = config.repo_snapshot_path.filter(|p| !p.trim().is_empty());
        config.repo_cache_dir = config.repo_cache_dir.filter(|p| !p.trim().is_empty());

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.data_path.trim().is_empty() {
            errors.push("DATA_PATH cannot be empty".to_string());
        }
        if self.catalog_path.trim().is_empty() {
            errors.push("CATALOG_PATH cannot be empty".to_string());
        }
        if let Err(e) = humantime::parse_duration(&self.repo_cache_ttl) {
            errors.push(format!("REPO_CACHE_TTL is not a duration: {e}"));
        }
        match humantime::parse_duration(&self.refresh_interval) {
            Ok(d) if d.is_zero() => errors.push("REFRESH_INTERVAL must be greater than zero".to_string()),
            Ok(_) => {}
            Err(e) => errors.push(format!("REFRESH_INTERVAL is not a duration: {e}")),
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn repo_cache_ttl(&self) -> Duration {
        humantime::parse_duration(&self.repo_cache_ttl).unwrap_or(Duration::from_secs(60 * 60))
    }

    pub fn refresh_interval(&self) -> Duration {
        humantime::parse_duration(&self.refresh_interval)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(Duration::from_secs(15 * 60))
    }

    pub fn repo_snapshot_path(&self) -> Option<PathBuf> {
        self.repo_snapshot_path.as_ref().map(PathBuf::from)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait DisplayPath {
    fn or_unset(&self) -> &str;
}

impl DisplayPath for Option<String> {
    fn or_unset(&self) -> &str {
        self.as_deref().unwrap_or("[UNSET]")
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("data_path", &self.data_path)
            .field("catalog_path", &self.catalog_path)
            .field("repo_snapshot_path", &self.repo_snapshot_path.or_unset())
            .field("repo_cache_dir", &self.repo_cache_dir.or_unset())
            .field("repo_cache_ttl", &self.repo_cache_ttl)
            .field("refresh_interval", &self.refresh_interval)
            .field("featured_min_stars", &self.featured_min_stars)
            .finish()
    }
}

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Full English month names, indexed by zero-based month ordinal.
pub const MONTH_NAMES: [&str; 12] = [
    "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY", "JUNE",
    "JULY", "AUGUST", "SEPTEMBER", "OCTOBER", "NOVEMBER", "DECEMBER",
];

pub const DURATION_SEPARATOR: &str = " - ";
pub const PRESENT_MARKER: &str = "PRESENT";

pub const DEFAULT_RELATED_LIMIT: usize = 3;
pub const MAX_RELATED_LIMIT: usize = 20;
pub const RECENT_PROJECTS: usize = 3;

pub const REPO_CACHE_KEY: &str = "github_repos_cache";

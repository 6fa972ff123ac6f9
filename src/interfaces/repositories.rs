pub mod portfolio;
pub mod repo_source;

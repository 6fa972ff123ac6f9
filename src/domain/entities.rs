pub mod experience;
pub mod github_repo;
pub mod profile;
pub mod project;
pub mod project_query;

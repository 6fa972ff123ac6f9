pub mod repo_cache;

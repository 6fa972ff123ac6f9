pub mod catalog;
pub mod experience;
pub mod loader;

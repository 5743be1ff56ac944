pub mod config_service;
pub mod dto;
pub mod paths;
pub mod selection_repository;

pub use crate::config_service::ConfigService;
pub use crate::paths::FithubPaths;
pub use crate::selection_repository::FileSelectionRepository;

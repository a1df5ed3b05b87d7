pub mod completions;
pub mod config;
pub mod trend;
pub mod weigh;

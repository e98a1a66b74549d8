pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod mapping_prompt;
pub mod store;
pub mod tabular;

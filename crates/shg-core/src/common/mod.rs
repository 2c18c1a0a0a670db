pub mod config;
pub mod constants;

pub use config::{ConfigError, ModelParams, RunConfig, load_run_config};

use crate::common::config::RunConfig;
use crate::domain::{ComputeArtifact, ComputeResult};

/// Seam between the CLI and a compute module: run the full pipeline for one
/// configuration and report the artifacts written.
pub trait ModuleExecutor {
    fn execute(&self, config: &RunConfig) -> ComputeResult<Vec<ComputeArtifact>>;
}

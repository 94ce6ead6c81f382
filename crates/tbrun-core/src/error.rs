use std::path::PathBuf;

use thiserror::Error;

/// Failure cases owned by this crate. Everything else (unreadable
/// directories, simulator failures) propagates unmodified.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("scan root does not exist or is not a directory: {0}")]
    RootNotFound(PathBuf),

    #[error("simulation runner '{0}' not found on PATH (set TBRUN_RUNNER to override)")]
    RunnerNotFound(String),
}

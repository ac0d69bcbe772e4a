use studio_core::ConfigError;
use thiserror::Error;

/// Errors that can occur while setting up or running a render session.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Pass has {actual} samples, buffer expects {expected}")]
    SampleCountMismatch { expected: usize, actual: usize },
}

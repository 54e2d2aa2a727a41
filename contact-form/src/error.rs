use thiserror::Error;

/// Fatal application errors. Validation failures are values, not errors;
/// only terminal and logging setup can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

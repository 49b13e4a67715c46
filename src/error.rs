use genpass::LimitsError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("invalid limits: {0}")]
    Limits(#[from] LimitsError),
}

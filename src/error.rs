use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown activity factor: {0} (expected 1.2, 1.375, 1.55, 1.725 or 1.9)")]
    UnknownActivityFactor(f64),

    #[error("Profile is incomplete: height, weight and age must all be positive")]
    IncompleteProfile,
}

pub type Result<T> = std::result::Result<T, HealthError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus is missing column: {0}")]
    MissingColumn(String),

    #[error("Training error: insufficient data ({0})")]
    InsufficientData(String),

    #[error("Model has not been trained")]
    ModelNotTrained,

    #[error("Message parse error: {0}")]
    MessageParse(String),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

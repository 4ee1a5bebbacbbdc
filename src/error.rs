use thiserror::Error;

#[derive(Error, Debug)]
pub enum TellerError {
    #[error("Unknown card id: {0}")]
    UnknownCard(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Profile error: {0}")]
    ProfileError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TellerError>;

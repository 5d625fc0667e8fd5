use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid target size: {0}")]
    InvalidTarget(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not move report into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, GenError>;

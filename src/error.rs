use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O or while reading a response body
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error during JSON deserialization of an API response
    #[error("json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// Error when user input fails.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Transport-level HTTP failure (DNS, TLS, connection, timeout)
    #[error("http error: {0}")]
    Http(#[from] Box<ureq::Error>),
    /// Repository listing returned a non-success status
    #[error("Unable to fetch data. Status code: {status}")]
    RepositoryListing { status: u16 },
    /// Error while building the fetch worker pool
    #[error("worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Error during input validation.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<ureq::Error> for AppError {
    fn from(err: ureq::Error) -> Self {
        AppError::Http(Box::new(err))
    }
}

use thiserror::Error;

/// Errors raised while fetching or hosting a profile card.
///
/// The `Display` output of the fetch-side variants is the exact message a
/// failed card shows after its `Error: ` prefix.
#[derive(Error, Debug)]
pub enum ProfileCardError {
    #[error("Failed to fetch user data")]
    HttpStatus(reqwest::StatusCode),

    #[error("{0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API URL cannot be used as a base: {0}")]
    CannotBeBase(String),
}

pub type Result<T> = std::result::Result<T, ProfileCardError>;

use thiserror::Error;

/// Every way a news fetch can fail. The view treats all of them as "fetch failed".
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),
}

impl FetchError {
    /// HTTP status code for non-success responses, if that is what went wrong.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Url(_) | FetchError::Transport(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

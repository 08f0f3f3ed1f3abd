use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountryError {
    #[error("Request to country API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Non-success response from {url}: {status}")]
    HttpStatus { status: StatusCode, url: String },

    #[error("Country API returned an unusable payload: {0}")]
    InvalidPayload(String),

    #[error("Country record at index {index} has no name")]
    MalformedRecord { index: usize },

    #[error("No alpha-2 code known for country: {0}")]
    UnknownCountry(String),

    #[error("Invalid alpha-2 code: {0:?}")]
    InvalidAlpha2(String),

    #[error("Reference name {name:?} already maps to {existing}, refusing {code}")]
    ConflictingReference {
        name: String,
        existing: String,
        code: String,
    },
}

impl CountryError {
    /// Failures that originate in the fetch collaborator rather than in the data.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            CountryError::Transport(_)
                | CountryError::HttpStatus { .. }
                | CountryError::InvalidPayload(_)
        )
    }
}

impl From<serde_json::Error> for CountryError {
    fn from(e: serde_json::Error) -> Self {
        CountryError::InvalidPayload(e.to_string())
    }
}

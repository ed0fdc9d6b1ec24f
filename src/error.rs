use thiserror::Error;

#[derive(Error, Debug)]
pub enum CensusError {
    #[error("ArgumentError: {0}")]
    Argument(#[from] ArgumentError),
    #[error("RequestError: {0}")]
    Request(#[from] RequestError),
    #[error("PayloadError: {0}")]
    Payload(#[from] PayloadError),
}

/// Caller-side problems caught before (or instead of) a network call.
#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("'{parameter}' cannot be empty")]
    Empty { parameter: String },
    #[error(
        "Invalid meta_type '{value}'. 'meta_type' must be one of 'variables', 'geography', or 'groups'."
    )]
    InvalidMetaType { value: String },
}

/// Failures reported by the HTTP layer itself.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to create HTTP client: {message}")]
    ClientInit { message: String },
    #[error("{status} - {message} The url used for the call was: {url}.")]
    Failed {
        status: u16,
        url: String,
        message: String,
    },
    #[error("Failed to parse response body from {url}: {message}")]
    ParseBody { url: String, message: String },
}

/// The request succeeded but the payload did not have the expected shape.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Expected key '{key}' not found in API response.")]
    MissingKey { key: String },
    #[error("Expected key '{key}' in API response to hold {expected}.")]
    UnexpectedShape { key: String, expected: String },
    #[error("Requested variable '{name}' not found in API response.")]
    UnknownVariable { name: String },
}

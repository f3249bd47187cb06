use thiserror::Error;

/// Errors raised by a single provider adapter
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider answered with a non-success HTTP status
    #[error("{provider} API error: {status}")]
    Status { provider: String, status: u16 },

    /// The request never produced a response (connection, timeout, body read)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body does not have the shape the provider documents
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// A credential required by the provider is not configured
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// The configured base URL cannot be used to build a request
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors returned to callers of a recipe search
#[derive(Error, Debug)]
pub enum SearchError {
    /// No ingredients were provided
    #[error("Please enter some ingredients")]
    EmptyQuery,

    /// The provider failed; `status` is set when it answered with an HTTP error
    #[error("Provider failure: {cause}")]
    ProviderFailure {
        status: Option<u16>,
        #[source]
        cause: ProviderError,
    },

    /// The provider answered, but the body could not be understood at all
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// The configured provider name has no adapter
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// The configured provider is switched off
    #[error("Provider '{0}' is not enabled in configuration")]
    ProviderDisabled(String),

    /// The search client could not be assembled
    #[error("Setup error: {0}")]
    Setup(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SearchError {
    /// HTTP status reported by the provider, if the failure carried one
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::ProviderFailure { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<ProviderError> for SearchError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Malformed(msg) => SearchError::MalformedResponse(msg),
            ProviderError::Status { status, .. } => SearchError::ProviderFailure {
                status: Some(status),
                cause: err,
            },
            ProviderError::Transport(ref e) => {
                let status = e.status().map(|s| s.as_u16());
                SearchError::ProviderFailure { status, cause: err }
            }
            other => SearchError::ProviderFailure {
                status: None,
                cause: other,
            },
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Access forbidden (HTTP 403)")]
    Forbidden,

    #[error("Record not found (HTTP 404): {0}")]
    NotFound(String),

    #[error("Authentication required (HTTP 401)")]
    Unauthorized,

    #[error("Rate limited (HTTP 429) - try again later")]
    RateLimited,

    #[error("HTTP {code}: {message}")]
    HttpError { code: u16, message: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON response: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse XML response: {0}")]
    XmlParseError(#[from] quick_xml::DeError),

    #[error("No arXiv entry for {0}")]
    NoEntry(String),
}

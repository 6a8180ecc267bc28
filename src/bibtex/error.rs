use thiserror::Error;

#[derive(Error, Debug)]
pub enum BibtexError {
    #[error("Failed to read BibTeX file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse BibTeX: {0}")]
    ParseFailed(String),

    #[error("No entries found in BibTeX")]
    NoEntries,

    #[error("Missing required field '{field}' in BibTeX entry '{key}'")]
    MissingField { key: String, field: String },

    #[error("Entry '{0}' has neither a DOI nor an arXiv eprint")]
    NoIdentifier(String),
}

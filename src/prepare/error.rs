use thiserror::Error;

/// Reasons for leaving a paper out of both output files.
#[derive(Error, Debug)]
pub enum PaperError {
    #[error("BibTeX entry unusable: {0}")]
    Bibtex(#[from] crate::bibtex::BibtexError),

    #[error("Metadata download failed: {0}")]
    Download(#[from] crate::sources::DownloadError),

    #[error("{0}")]
    Authors(#[from] crate::authors::AuthorError),

    #[error("Duplicate paper {0}")]
    DuplicateDoi(String),
}

mod arxiv;
mod error;
mod inspire;

pub use arxiv::{ArxivApi, ArxivEntry};
pub use error::DownloadError;
pub use inspire::InspireApi;

use crate::bibtex::BibEntry;
use std::future::Future;
use std::time::Duration;

/// Metadata of a published paper, as known to Inspire HEP.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaperMetadata {
    pub title: String,
    pub abstract_text: String,
    /// Full names in publication order, `"Surname, Given"`.
    pub authors: Vec<String>,
    pub keywords: Vec<String>,
    pub number_of_pages: Option<u32>,
    pub arxiv_id: Option<String>,
    pub collaboration: Option<String>,
}

impl PaperMetadata {
    /// Fills a missing title or abstract from the arXiv listing.
    pub fn complete_from(&mut self, entry: ArxivEntry) {
        if self.title.is_empty() {
            self.title = entry.title;
        }
        if self.abstract_text.is_empty() {
            self.abstract_text = entry.abstract_text;
        }
    }

    fn needs_arxiv(&self) -> bool {
        self.title.is_empty() || self.abstract_text.is_empty()
    }
}

/// Anything that can look up the metadata of an input entry.
pub trait MetadataSource {
    fn metadata(
        &self,
        entry: &BibEntry,
    ) -> impl Future<Output = Result<PaperMetadata, DownloadError>>;
}

/// Inspire HEP with arXiv as fallback, over one shared client.
#[derive(Clone)]
pub struct Sources {
    client: reqwest::Client,
}

impl Sources {
    pub fn new() -> Result<Self, DownloadError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("croris-bib/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Sources { client })
    }
}

impl MetadataSource for Sources {
    /// Looks the entry up on Inspire HEP, by DOI when it has one. arXiv is
    /// only asked when Inspire lacks the title or the abstract.
    async fn metadata(&self, entry: &BibEntry) -> Result<PaperMetadata, DownloadError> {
        let mut metadata = match (&entry.doi, &entry.eprint) {
            (Some(doi), _) => InspireApi::by_doi(&self.client, doi).await?,
            (None, Some(eprint)) => InspireApi::by_arxiv(&self.client, eprint).await?,
            (None, None) => return Err(DownloadError::NotFound(entry.key.clone())),
        };

        if metadata.needs_arxiv() {
            let arxiv_id = entry.eprint.clone().or_else(|| metadata.arxiv_id.clone());
            if let Some(arxiv_id) = arxiv_id {
                // a gap left here is reported as a record issue
                if let Ok(arxiv) = ArxivApi::fetch(&self.client, &arxiv_id).await {
                    metadata.complete_from(arxiv);
                }
            }
        }

        Ok(metadata)
    }
}

fn check_status(
    response: reqwest::Response,
    url: &str,
) -> Result<reqwest::Response, DownloadError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(match status.as_u16() {
        403 => DownloadError::Forbidden,
        404 => DownloadError::NotFound(url.to_string()),
        401 => DownloadError::Unauthorized,
        429 => DownloadError::RateLimited,
        code => DownloadError::HttpError {
            code,
            message: status
                .canonical_reason()
                .unwrap_or("Unknown Reason")
                .to_string(),
        },
    })
}

use super::error::DownloadError;
use super::{check_status, PaperMetadata};
use serde::Deserialize;
use url::Url;

const INSPIRE_API_URL: &str = "https://inspirehep.net/api";

#[derive(Debug, Deserialize)]
struct Record {
    metadata: Metadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Metadata {
    titles: Vec<Title>,
    abstracts: Vec<Abstract>,
    authors: Vec<Author>,
    keywords: Vec<Value>,
    number_of_pages: Option<u32>,
    arxiv_eprints: Vec<Value>,
    collaborations: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct Title {
    title: String,
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Abstract {
    value: String,
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Author {
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct Value {
    value: String,
}

/// Literature records from Inspire HEP, see
/// https://github.com/inspirehep/rest-api-doc
pub struct InspireApi;

impl InspireApi {
    pub async fn by_doi(
        client: &reqwest::Client,
        doi: &str,
    ) -> Result<PaperMetadata, DownloadError> {
        Self::fetch(client, record_url("doi", doi)?).await
    }

    pub async fn by_arxiv(
        client: &reqwest::Client,
        arxiv_id: &str,
    ) -> Result<PaperMetadata, DownloadError> {
        Self::fetch(client, record_url("arxiv", arxiv_id)?).await
    }

    async fn fetch(client: &reqwest::Client, url: Url) -> Result<PaperMetadata, DownloadError> {
        let response = client
            .get(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let body = check_status(response, url.as_str())?.text().await?;
        parse_record(&body)
    }
}

/// `/api/{kind}/{id}`, every part of the id percent-encoded on its own so
/// the slashes of a DOI stay path separators.
fn record_url(kind: &str, id: &str) -> Result<Url, DownloadError> {
    let mut url = Url::parse(INSPIRE_API_URL)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .push(kind)
        .extend(id.trim().split('/'));
    Ok(url)
}

pub(crate) fn parse_record(json: &str) -> Result<PaperMetadata, DownloadError> {
    let record: Record = serde_json::from_str(json)?;
    let metadata = record.metadata;

    Ok(PaperMetadata {
        title: preferred(metadata.titles.iter().map(|t| (t.title.as_str(), t.source.as_deref()))),
        abstract_text: preferred(
            metadata
                .abstracts
                .iter()
                .map(|a| (a.value.as_str(), a.source.as_deref())),
        ),
        authors: metadata.authors.into_iter().map(|a| a.full_name).collect(),
        keywords: metadata
            .keywords
            .into_iter()
            .map(|k| k.value.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect(),
        number_of_pages: metadata.number_of_pages,
        arxiv_id: metadata.arxiv_eprints.into_iter().next().map(|e| e.value),
        collaboration: metadata.collaborations.into_iter().next().map(|c| c.value),
    })
}

/// First available text, unless a later one comes from arXiv.
fn preferred<'a>(candidates: impl Iterator<Item = (&'a str, Option<&'a str>)>) -> String {
    let mut chosen = String::new();
    for (text, source) in candidates {
        let from_arxiv = source.is_some_and(|s| s.trim().eq_ignore_ascii_case("arxiv"));
        if chosen.is_empty() || from_arxiv {
            chosen = text.trim().to_string();
        }
    }
    chosen
}

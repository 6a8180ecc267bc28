use super::error::DownloadError;
use super::check_status;
use serde::Deserialize;
use url::Url;

const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    title: String,
    summary: String,
}

/// Title and abstract as listed on arXiv.
#[derive(Debug, Clone, PartialEq)]
pub struct ArxivEntry {
    pub title: String,
    pub abstract_text: String,
}

pub struct ArxivApi;

impl ArxivApi {
    pub async fn fetch(
        client: &reqwest::Client,
        arxiv_id: &str,
    ) -> Result<ArxivEntry, DownloadError> {
        let url = Url::parse_with_params(
            ARXIV_API_URL,
            &[("id_list", arxiv_id), ("max_results", "1")],
        )?;
        let response = client.get(url.as_str()).send().await?;
        let xml = check_status(response, url.as_str())?.text().await?;
        parse_feed(&xml)?.ok_or_else(|| DownloadError::NoEntry(arxiv_id.to_string()))
    }
}

pub(crate) fn parse_feed(xml: &str) -> Result<Option<ArxivEntry>, DownloadError> {
    let feed: Feed = quick_xml::de::from_str(xml)?;
    Ok(feed.entries.into_iter().next().map(|entry| ArxivEntry {
        title: collapse(&entry.title),
        abstract_text: collapse(&entry.summary),
    }))
}

/// arXiv wraps long titles and abstracts over several lines.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <link href="http://arxiv.org/api/query?id_list=1904.05237" rel="self" type="application/atom+xml"/>
  <title type="html">ArXiv Query: id_list=1904.05237</title>
  <id>http://arxiv.org/api/abc</id>
  <updated>2019-04-10T00:00:00-04:00</updated>
  <entry>
    <id>http://arxiv.org/abs/1904.05237v2</id>
    <updated>2019-08-01T12:00:00Z</updated>
    <published>2019-04-10T12:00:00Z</published>
    <title>Measurement of the top quark mass with lepton+jets final states
  using pp collisions at 13 TeV</title>
    <summary>  The mass of the top quark is measured
using a sample of events.
</summary>
    <author>
      <name>CMS Collaboration</name>
    </author>
    <link href="http://arxiv.org/abs/1904.05237v2" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/1904.05237v2" rel="related" type="application/pdf"/>
    <category term="hep-ex" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
</feed>"#;

    #[test]
    fn parses_atom_entry() {
        let entry = parse_feed(FEED).unwrap().unwrap();
        assert_eq!(
            entry.title,
            "Measurement of the top quark mass with lepton+jets final states using pp collisions at 13 TeV"
        );
        assert_eq!(
            entry.abstract_text,
            "The mass of the top quark is measured using a sample of events."
        );
    }

    #[test]
    fn empty_feed_has_no_entry() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>ArXiv Query</title></feed>"#;
        assert_eq!(parse_feed(xml).unwrap(), None);
    }
}

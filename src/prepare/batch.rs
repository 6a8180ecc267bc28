use super::{BatchContext, CrorisRecord, PaperError, Preparer};
use crate::bibtex::{BibEntry, BibtexError};
use crate::sources::MetadataSource;
use crate::ui::{blog, blog_warning, UI};
use futures::stream::{self, StreamExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of a whole run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Records ready for upload.
    pub accepted: Vec<CrorisRecord>,
    /// Records that need manual attention.
    pub rejected: Vec<CrorisRecord>,
    /// Papers left out entirely, by 1-based position in the input.
    pub skipped: Vec<(usize, PaperError)>,
}

/// Fetches metadata for all entries and prepares their records.
///
/// Requests run `concurrency` at a time but results are consumed in input
/// order, so the context is only ever touched from this loop.
pub async fn run<S: MetadataSource>(
    entries: Vec<Result<BibEntry, BibtexError>>,
    preparer: &Preparer<'_>,
    source: &S,
    concurrency: usize,
) -> BatchReport {
    let config = preparer.config();
    let mut context = BatchContext::new(&config.keywords, config.keyword_limit);
    let mut report = BatchReport::default();

    let mut jobs: Vec<(usize, BibEntry)> = Vec::new();
    for (n, entry) in entries.into_iter().enumerate() {
        let n = n + 1;
        match entry.map_err(PaperError::from).and_then(|entry| {
            context.register(&entry)?;
            Ok(entry)
        }) {
            Ok(entry) => jobs.push((n, entry)),
            Err(err) => {
                blog_warning!("Skipped", "Paper {}: {}", n, err);
                report.skipped.push((n, err));
            }
        }
    }

    let progress = UI::progress("Fetching", jobs.len() as u64);
    let fetched: Vec<_> = stream::iter(jobs)
        .map(|(n, entry)| {
            let progress = progress.clone();
            async move {
                let metadata = source.metadata(&entry).await;
                progress.inc(1);
                (n, entry, metadata)
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;
    UI::finish_with_message(
        progress,
        "Fetched",
        &format!("Metadata for {} papers", fetched.len()),
    );

    for (n, entry, metadata) in fetched {
        let prepared = metadata
            .map_err(PaperError::from)
            .and_then(|metadata| {
                preparer
                    .prepare(&entry, &metadata, &mut context)
                    .map(|paper| (paper, metadata))
            });

        match prepared {
            Ok((paper, metadata)) => {
                UI::paper(n, &entry, &metadata, &paper);
                if paper.is_valid() {
                    report.accepted.push(paper.record);
                } else {
                    report.rejected.push(paper.record);
                }
            }
            Err(err) => {
                blog_warning!("Skipped", "Paper {} ({}): {}", n, entry.identifier(), err);
                report.skipped.push((n, err));
            }
        }
    }

    report
}

/// Error file next to the output: `CroRIS_input.json` → `CroRIS_input_error.json`.
pub fn error_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let extension = output
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "json".to_string());
    output.with_file_name(format!("{}_error.{}", stem, extension))
}

/// Pretty-printed UTF-8 JSON, non-ASCII characters kept as they are.
pub fn write_records(path: &Path, records: &[CrorisRecord]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    blog!("Written", "{} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sources::{DownloadError, PaperMetadata};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    /// Answers the first entries last.
    struct Staggered;

    impl MetadataSource for Staggered {
        async fn metadata(&self, entry: &BibEntry) -> Result<PaperMetadata, DownloadError> {
            let delay = match entry.key.as_str() {
                "first" => 60,
                "second" => 30,
                _ => 0,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if entry.key == "unknown" {
                return Err(DownloadError::NotFound(entry.key.clone()));
            }
            Ok(PaperMetadata {
                title: format!("Paper {}", entry.key),
                abstract_text: "Abstract.".to_string(),
                authors: [
                    "Hayrapetyan, Aram",
                    "Tumasyan, Armen",
                    "Brigljevic, Vuko",
                    "Adam, Wolfgang",
                    "Zeidan, Sami",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                keywords: vec![],
                number_of_pages: Some(12),
                arxiv_id: None,
                collaboration: Some("CMS".to_string()),
            })
        }
    }

    fn entry(key: &str, doi: &str) -> Result<BibEntry, BibtexError> {
        Ok(BibEntry {
            key: key.to_string(),
            doi: Some(doi.to_string()),
            eprint: None,
            collaboration: None,
            year: "2023".to_string(),
            journal: "Phys. Rev.".to_string(),
            volume: "D108".to_string(),
            number: None,
            pages: "012345".to_string(),
        })
    }

    #[tokio::test]
    async fn records_keep_input_order() {
        let config = Config::bundled().unwrap();
        let preparer = Preparer::new(&config, config.author_options());
        let entries = vec![
            entry("first", "10.1103/PhysRevD.108.000001"),
            entry("second", "10.1103/PhysRevD.108.000002"),
            entry("third", "10.1103/PhysRevD.108.000003"),
            entry("again", "10.1103/physrevd.108.000001"),
            entry("unknown", "10.1103/PhysRevD.108.000004"),
        ];

        let report = run(entries, &preparer, &Staggered, 3).await;

        let titles: Vec<_> = report.accepted.iter().map(|r| r.naslov.as_str()).collect();
        assert_eq!(titles, vec!["Paper first", "Paper second", "Paper third"]);
        assert!(report.rejected.is_empty());

        assert_eq!(report.skipped.len(), 2);
        assert!(matches!(report.skipped[0], (4, PaperError::DuplicateDoi(_))));
        assert!(matches!(report.skipped[1], (5, PaperError::Download(_))));
    }

    #[test]
    fn error_file_sits_next_to_output() {
        assert_eq!(
            error_path(Path::new("out/CroRIS_input.json")),
            PathBuf::from("out/CroRIS_input_error.json")
        );
        assert_eq!(
            error_path(Path::new("records")),
            PathBuf::from("records_error.json")
        );
    }

    #[test]
    fn writes_unescaped_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let record = CrorisRecord {
            tip: 760,
            status: 965,
            suradnja_medjunarodna: "D".to_string(),
            recenzija: crate::config::Review {
                status: 900,
                vrsta: 903,
            },
            doi: None,
            autor_string: "Šuša, Tatjana".to_string(),
            naslov: "Title".to_string(),
            kolaboracija: None,
            godina: "2023".to_string(),
            casopis: "JHEP".to_string(),
            issn: String::new(),
            eissn: String::new(),
            volumen: "1".to_string(),
            svescic: None,
            stranica_prva: None,
            stranica_zadnja: None,
            broj_rada: None,
            ukupno_stranica: None,
            sazetak: String::new(),
            kljucne_rijeci: String::new(),
            poveznice: vec![],
            osobe: vec![],
            ustanove: vec![],
            projekti: vec![],
            problemi: vec![],
        };

        write_records(&path, &[record]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"autor_string\": \"Šuša, Tatjana\""));
        assert!(written.starts_with("[\n  {"));
    }
}

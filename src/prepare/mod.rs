mod batch;
mod context;
mod error;
mod journal;
mod record;

pub use batch::{error_path, run, write_records};
pub use context::BatchContext;
pub use error::PaperError;
pub use record::{CrorisRecord, RecordIssue};

use journal::{Journal, Pages};
use record::{Institution, Link, Person, Project};

use crate::authors::{AuthorList, AuthorOptions, Roster};
use crate::bibtex::BibEntry;
use crate::config::Config;
use crate::sources::PaperMetadata;

const DOI_URL: &str = "https://doi.org/";

/// A record together with what was learned while building it.
#[derive(Debug, Clone)]
pub struct PreparedPaper {
    pub record: CrorisRecord,
    pub authors: AuthorList,
    pub issues: Vec<RecordIssue>,
}

impl PreparedPaper {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Turns input entries plus their metadata into CroRIS records.
pub struct Preparer<'a> {
    config: &'a Config,
    roster: Roster,
    options: AuthorOptions,
}

impl<'a> Preparer<'a> {
    pub fn new(config: &'a Config, options: AuthorOptions) -> Self {
        Preparer {
            config,
            roster: config.roster(),
            options,
        }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn prepare(
        &self,
        entry: &BibEntry,
        metadata: &PaperMetadata,
        context: &mut BatchContext,
    ) -> Result<PreparedPaper, PaperError> {
        let authors = AuthorList::build(&metadata.authors, &self.roster, &self.options)?;
        let journal = Journal::resolve(&entry.journal, &entry.volume, self.config);
        let pages = Pages::parse(&entry.pages, metadata.number_of_pages);

        let mut issues = Vec::new();
        if !journal.is_known() {
            issues.push(RecordIssue::UnknownJournal(journal.name.clone()));
        }
        if !pages.is_complete() {
            issues.push(RecordIssue::IncompletePages);
        }
        if metadata.title.trim().is_empty() {
            issues.push(RecordIssue::MissingTitle);
        }
        if metadata.abstract_text.trim().is_empty() {
            issues.push(RecordIssue::MissingAbstract);
        }

        let (stranica_prva, stranica_zadnja, broj_rada, ukupno_stranica) = match &pages {
            Pages::Range { first, last } => (non_empty(first), non_empty(last), None, None),
            Pages::Article { number, total } => {
                (None, None, non_empty(number), total.map(|t| t.to_string()))
            }
        };

        let publication = &self.config.publication;
        let record = CrorisRecord {
            tip: publication.tip,
            status: publication.status,
            suradnja_medjunarodna: publication.suradnja_medjunarodna.clone(),
            recenzija: publication.recenzija.clone(),
            doi: entry.doi.clone(),
            autor_string: authors.citation.clone(),
            naslov: metadata.title.clone(),
            kolaboracija: self.collaboration(entry, metadata),
            godina: entry.year.clone(),
            casopis: journal.croris_name.clone().unwrap_or_else(|| journal.name.clone()),
            issn: journal.issn.clone(),
            eissn: journal.eissn.clone(),
            volumen: journal.volume.clone(),
            svescic: entry.number.clone(),
            stranica_prva,
            stranica_zadnja,
            broj_rada,
            ukupno_stranica,
            sazetak: metadata.abstract_text.clone(),
            kljucne_rijeci: context.keywords_for(&metadata.keywords),
            poveznice: entry
                .doi
                .iter()
                .map(|doi| Link {
                    url_vrsta: publication.url_vrsta,
                    url: format!("{}{}", DOI_URL, doi),
                })
                .collect(),
            osobe: authors
                .external_ids
                .iter()
                .map(|&croris_id| Person { croris_id })
                .collect(),
            ustanove: authors
                .institution_ids
                .iter()
                .map(|&croris_id| Institution {
                    croris_id,
                    mbu: None,
                    uloga: publication.institution_role,
                })
                .collect(),
            projekti: publication
                .projects
                .iter()
                .map(|&croris_id| Project {
                    croris_id,
                    uloga: publication.project_role,
                })
                .collect(),
            problemi: issues.iter().map(|issue| issue.to_string()).collect(),
        };

        Ok(PreparedPaper {
            record,
            authors,
            issues,
        })
    }

    /// Configured name first, then the BibTeX field, then Inspire.
    fn collaboration(&self, entry: &BibEntry, metadata: &PaperMetadata) -> Option<String> {
        self.config
            .collaboration
            .as_ref()
            .or(entry.collaboration.as_ref())
            .or(metadata.collaboration.as_ref())
            .map(|name| format!("{} Collaboration", name))
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

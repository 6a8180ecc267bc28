pub mod macros;

use crate::authors::{AuthorList, SortOutcome};
use crate::bibtex::BibEntry;
use crate::prepare::PreparedPaper;
use crate::sources::PaperMetadata;
use indicatif::{ProgressBar, ProgressStyle};

pub use macros::*;

pub struct UI;

impl UI {
    pub fn progress(category: &str, total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:.blue.bold} [{bar:30}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        pb.set_prefix(format!("{:>12}", category));
        pb
    }

    pub fn finish_with_message(pb: ProgressBar, completed_category: &str, message: &str) {
        pb.finish_and_clear();
        blog_done!(completed_category, "{}", message);
    }

    /// Everything known about a prepared paper, one field per line.
    pub fn paper(n: usize, entry: &BibEntry, metadata: &PaperMetadata, paper: &PreparedPaper) {
        println!();
        blog_working!("Paper", "{} ({})", n, entry.key);
        for (label, value) in summary(paper, metadata) {
            blog!(label, "{}", value);
        }
        Self::author_notes(&paper.authors);
        for issue in &paper.issues {
            blog_warning!("Problem", "{}", issue);
        }
    }

    pub fn author_notes(authors: &AuthorList) {
        blog!(
            "Local",
            "{} of {} authors matched the roster",
            authors.matched,
            authors.total
        );
        if authors.sort == SortOutcome::Suppressed {
            blog_warning!(
                "Warning",
                "Local author at a list boundary, keeping author list order"
            );
        }
    }
}

fn summary(paper: &PreparedPaper, metadata: &PaperMetadata) -> Vec<(&'static str, String)> {
    let record = &paper.record;
    let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());
    vec![
        ("DOI", or_na(&record.doi)),
        ("arXiv", or_na(&metadata.arxiv_id)),
        ("Title", record.naslov.clone()),
        ("Authors", record.autor_string.clone()),
        ("Collaboration", or_na(&record.kolaboracija)),
        ("Year", record.godina.clone()),
        ("Journal", record.casopis.clone()),
        ("ISSN", record.issn.clone()),
        ("e-ISSN", record.eissn.clone()),
        ("Volume", record.volumen.clone()),
        ("Number", or_na(&record.svescic)),
        ("First page", or_na(&record.stranica_prva)),
        ("Last page", or_na(&record.stranica_zadnja)),
        ("Article no.", or_na(&record.broj_rada)),
        ("Total pages", or_na(&record.ukupno_stranica)),
        ("Keywords", record.kljucne_rijeci.clone()),
    ]
}

pub fn error_message(err: &str) {
    eprintln!(
        "{}{:>12}{} {}",
        termion::color::Fg(termion::color::Red),
        "Error",
        termion::color::Fg(termion::color::Reset),
        err
    );
}

use crate::config::Review;
use serde::Serialize;
use std::fmt;

/// One publication in the CroRIS (CROSBI API) input format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrorisRecord {
    pub tip: u32,
    pub status: u32,
    pub suradnja_medjunarodna: String,
    pub recenzija: Review,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    pub autor_string: String,
    pub naslov: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kolaboracija: Option<String>,
    pub godina: String,
    pub casopis: String,
    pub issn: String,
    #[serde(rename = "e-issn")]
    pub eissn: String,
    pub volumen: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svescic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stranica_prva: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stranica_zadnja: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broj_rada: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ukupno_stranica: Option<String>,
    pub sazetak: String,
    pub kljucne_rijeci: String,
    pub poveznice: Vec<Link>,
    pub osobe: Vec<Person>,
    pub ustanove: Vec<Institution>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projekti: Vec<Project>,
    /// Only present in the error file.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problemi: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub url_vrsta: u32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub croris_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Institution {
    pub croris_id: u32,
    pub mbu: Option<u32>,
    pub uloga: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub croris_id: u32,
    pub uloga: u32,
}

/// Problems that keep a record out of the submission file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    UnknownJournal(String),
    IncompletePages,
    MissingTitle,
    MissingAbstract,
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIssue::UnknownJournal(name) => write!(
                f,
                "Unknown journal '{}', add it to the known journals or remove this article",
                name
            ),
            RecordIssue::IncompletePages => f.write_str(
                "Neither first and last page nor article number and page count are known",
            ),
            RecordIssue::MissingTitle => f.write_str("No title on Inspire or arXiv"),
            RecordIssue::MissingAbstract => f.write_str("No abstract on Inspire or arXiv"),
        }
    }
}

mod error;
pub use error::BibtexError;

use biblatex::{Bibliography, Chunk, Entry, Spanned};
use regex::Regex;
use std::fs;
use std::path::Path;

/// The fields of an input entry that the CroRIS record needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BibEntry {
    pub key: String,
    pub doi: Option<String>,
    pub eprint: Option<String>,
    pub collaboration: Option<String>,
    pub year: String,
    pub journal: String,
    pub volume: String,
    pub number: Option<String>,
    pub pages: String,
}

impl BibEntry {
    /// DOI when known, else the arXiv id.
    pub fn identifier(&self) -> &str {
        self.doi
            .as_deref()
            .or(self.eprint.as_deref())
            .unwrap_or(&self.key)
    }
}

pub fn read_bibliography(path: &Path) -> Result<Vec<Result<BibEntry, BibtexError>>, BibtexError> {
    let contents = fs::read_to_string(path)?;
    parse_bibliography(&contents)
}

/// Parses every entry. A syntax error fails the whole file, a missing field
/// only fails its entry.
///
/// Entries are parsed block by block, each preceded by the file's `@string`
/// and `@preamble` blocks. A pasted copy of an entry then reaches the
/// duplicate check instead of failing the file on a repeated key.
pub fn parse_bibliography(
    contents: &str,
) -> Result<Vec<Result<BibEntry, BibtexError>>, BibtexError> {
    let blocks = split_blocks(contents);
    let shared: String = blocks
        .iter()
        .filter(|block| is_shared(block))
        .copied()
        .collect();

    let mut entries = Vec::new();
    for block in blocks
        .iter()
        .filter(|block| !is_shared(block) && !is_comment(block))
    {
        let source = format!("{}{}", shared, block);
        let bibliography = Bibliography::parse(&source).map_err(|e| {
            let head = block.lines().next().unwrap_or_default().trim();
            BibtexError::ParseFailed(format!("{} in '{}'", e, head))
        })?;
        entries.extend(bibliography.iter().map(process_entry));
    }

    if entries.is_empty() {
        return Err(BibtexError::NoEntries);
    }
    Ok(entries)
}

/// Cuts the source at every `@` outside braces. Text before the first `@`
/// is dropped.
fn split_blocks(contents: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut depth = 0usize;
    for (i, c) in contents.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '@' if depth == 0 => starts.push(i),
            _ => {}
        }
    }
    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(contents.len());
            &contents[start..end]
        })
        .collect()
}

fn block_kind(block: &str) -> String {
    block
        .trim_start_matches('@')
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn is_shared(block: &str) -> bool {
    matches!(block_kind(block).as_str(), "string" | "preamble")
}

fn is_comment(block: &str) -> bool {
    block_kind(block) == "comment"
}

fn process_entry(entry: &Entry) -> Result<BibEntry, BibtexError> {
    let doi = field(entry, "doi")
        .map(|doi| normalize_doi(&doi))
        .or_else(|| field(entry, "url").and_then(|url| extract_doi_from_url(&url)));
    let eprint = field(entry, "eprint").map(|e| normalize_eprint(&e));
    if doi.is_none() && eprint.is_none() {
        return Err(BibtexError::NoIdentifier(entry.key.clone()));
    }

    Ok(BibEntry {
        key: entry.key.clone(),
        doi,
        eprint,
        collaboration: field(entry, "collaboration"),
        year: required(entry, "year")?,
        journal: required(entry, "journal")?,
        volume: required(entry, "volume")?,
        number: field(entry, "number"),
        pages: normalize_pages(&required(entry, "pages")?),
    })
}

fn required(entry: &Entry, name: &str) -> Result<String, BibtexError> {
    field(entry, name).ok_or_else(|| BibtexError::MissingField {
        key: entry.key.clone(),
        field: name.to_string(),
    })
}

/// Field value with surrounding whitespace removed, `None` when absent or empty.
fn field(entry: &Entry, name: &str) -> Option<String> {
    entry
        .fields
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| clean_text(&format_field_value(value)))
        .filter(|value| !value.is_empty())
}

/// Properly formats a BibTeX field value into a single String.
fn format_field_value(value: &[Spanned<Chunk>]) -> String {
    value
        .iter()
        .map(|spanned_chunk| match &spanned_chunk.v {
            Chunk::Normal(s) => s.clone(),
            Chunk::Verbatim(s) => s.clone(),
            Chunk::Math(s) => format!("${}$", s),
        })
        .collect::<Vec<String>>()
        .join("")
}

/// Collapses whitespace, including the line breaks of wrapped fields.
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_doi(doi: &str) -> String {
    extract_doi_from_url(doi).unwrap_or_else(|| doi.trim().to_string())
}

fn extract_doi_from_url(url: &str) -> Option<String> {
    let re = Regex::new(r"^https?://(?:dx\.)?doi\.org/(10\..+)$").ok()?;
    re.captures(url.trim())?.get(1).map(|m| m.as_str().to_string())
}

/// Any run of hyphens or dashes becomes a single `-`.
fn normalize_pages(pages: &str) -> String {
    match Regex::new(r"\s*[-–—]+\s*") {
        Ok(re) => re.replace_all(pages, "-").into_owned(),
        Err(_) => pages.to_string(),
    }
}

fn normalize_eprint(eprint: &str) -> String {
    let eprint = eprint.trim();
    let eprint = eprint
        .strip_prefix("arXiv:")
        .or_else(|| eprint.strip_prefix("arxiv:"))
        .unwrap_or(eprint);
    match Regex::new(r"^(.+?)v\d+$") {
        Ok(re) => re
            .captures(eprint)
            .and_then(|c| c.get(1))
            .map_or_else(|| eprint.to_string(), |m| m.as_str().to_string()),
        Err(_) => eprint.to_string(),
    }
}

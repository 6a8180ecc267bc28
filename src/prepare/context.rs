use super::error::PaperError;
use crate::bibtex::BibEntry;
use std::collections::HashSet;

/// State carried from one paper to the next within a run.
#[derive(Debug, Clone)]
pub struct BatchContext {
    seen: HashSet<String>,
    /// Generic keywords followed by every new keyword seen so far.
    keywords: Vec<String>,
    keyword_limit: usize,
}

impl BatchContext {
    pub fn new(keywords: &[String], keyword_limit: usize) -> Self {
        BatchContext {
            seen: HashSet::new(),
            keywords: keywords.iter().map(|k| k.trim().to_string()).collect(),
            keyword_limit,
        }
    }

    /// Claims the entry's DOI (or arXiv id), failing on a repeat.
    pub fn register(&mut self, entry: &BibEntry) -> Result<(), PaperError> {
        let id = entry.identifier().to_lowercase();
        if self.seen.insert(id) {
            Ok(())
        } else {
            Err(PaperError::DuplicateDoi(entry.identifier().to_string()))
        }
    }

    /// Keyword string of a paper.
    ///
    /// Every keyword costs its length plus two for the separator and the
    /// total stays below the limit. Accumulated keywords come first, new
    /// keywords of the paper are added to the batch while they fit.
    pub fn keywords_for(&mut self, paper_keywords: &[String]) -> String {
        let mut used = 0;
        let mut emitted: Vec<String> = Vec::new();
        let mut lower: HashSet<String> = HashSet::new();

        for keyword in &self.keywords {
            let cost = keyword.chars().count() + 2;
            if used + cost >= self.keyword_limit {
                break;
            }
            used += cost;
            lower.insert(keyword.to_lowercase());
            emitted.push(keyword.clone());
        }

        for keyword in paper_keywords {
            let keyword = keyword.trim();
            if keyword.is_empty() || lower.contains(&keyword.to_lowercase()) {
                continue;
            }
            let cost = keyword.chars().count() + 2;
            if used + cost >= self.keyword_limit {
                break;
            }
            used += cost;
            let folded = keyword.to_lowercase();
            // the batch list may already hold it beyond this paper's budget
            if !self.keywords.iter().any(|k| k.to_lowercase() == folded) {
                self.keywords.push(keyword.to_string());
            }
            emitted.push(keyword.to_string());
            lower.insert(folded);
        }

        emitted.join("; ")
    }
}

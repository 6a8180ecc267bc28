use std::collections::BTreeSet;

/// A known local author, as declared in the configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    /// Substring looked for in the full author name, e.g. `"Puljak, I"`.
    pub match_key: String,
    pub pretty_name: String,
    pub external_id: Option<u32>,
    pub institution_id: Option<u32>,
}

/// A roster entry found at a given position of a paper's author list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub list_index: usize,
    pub pretty_name: String,
    pub external_id: Option<u32>,
    pub institution_id: Option<u32>,
}

/// Ordered list of known local authors.
///
/// Matching is a plain substring test evaluated in declaration order and the
/// first hit wins, so a key that is a substring of another author's name can
/// shadow later entries. Keep the more specific keys first.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Roster { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose key occurs in `full_name`.
    pub fn find(&self, full_name: &str) -> Option<&RosterEntry> {
        self.entries
            .iter()
            .find(|entry| full_name.contains(entry.match_key.as_str()))
    }

    /// Matches every author against the roster, keeping author order.
    pub fn match_authors<S: AsRef<str>>(&self, authors: &[S]) -> Vec<Match> {
        authors
            .iter()
            .enumerate()
            .filter_map(|(list_index, author)| {
                self.find(author.as_ref()).map(|entry| Match {
                    list_index,
                    pretty_name: entry.pretty_name.clone(),
                    external_id: entry.external_id,
                    institution_id: entry.institution_id,
                })
            })
            .collect()
    }
}

/// Distinct institutions of the matched authors.
pub fn institutions(matches: &[Match]) -> BTreeSet<u32> {
    matches.iter().filter_map(|m| m.institution_id).collect()
}

#[cfg(test)]
pub(crate) fn entry(key: &str, pretty: &str, id: Option<u32>, inst: Option<u32>) -> RosterEntry {
    RosterEntry {
        match_key: key.to_string(),
        pretty_name: pretty.to_string(),
        external_id: id,
        institution_id: inst,
    }
}

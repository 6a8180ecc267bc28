use super::roster::Match;
use serde::Deserialize;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Collation used when local authors are listed alphabetically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Collation {
    /// Croatian alphabet: č, ć, dž, đ, lj, nj, š and ž are letters of their own.
    #[default]
    #[serde(rename = "hr")]
    Croatian,
    /// Diacritics only break ties.
    #[serde(rename = "root")]
    Root,
}

/// What happened to the order of the matched authors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOutcome {
    /// Sorting is turned off.
    Disabled,
    Sorted,
    /// Sorting was requested but a match sits on a list boundary.
    Suppressed,
}

impl SortOutcome {
    pub fn is_sorted(self) -> bool {
        self == SortOutcome::Sorted
    }
}

/// Reorders `matches` by pretty name when allowed.
pub fn apply(
    matches: &mut [Match],
    boundary: bool,
    enabled: bool,
    collation: Collation,
) -> SortOutcome {
    if !enabled {
        return SortOutcome::Disabled;
    }
    if boundary {
        return SortOutcome::Suppressed;
    }
    matches.sort_by(|a, b| collation.compare(&a.pretty_name, &b.pretty_name));
    SortOutcome::Sorted
}

// Primary weight of one collation element: base letter plus its rank among
// the letters sharing that base.
type Weight = (char, u8);

const SEPARATOR: Weight = ('\0', 0);

impl Collation {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        self.primary_key(a)
            .cmp(&self.primary_key(b))
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
            .then_with(|| a.cmp(b))
    }

    fn primary_key(self, text: &str) -> Vec<Weight> {
        let lower: Vec<char> = text.nfc().flat_map(char::to_lowercase).collect();
        let mut key = Vec::with_capacity(lower.len());
        let mut i = 0;
        while i < lower.len() {
            let c = lower[i];
            let next = lower.get(i + 1).copied();

            if !c.is_alphanumeric() {
                // runs of spaces and punctuation collapse into one separator
                if key.last() != Some(&SEPARATOR) {
                    key.push(SEPARATOR);
                }
                i += 1;
                continue;
            }

            if self == Collation::Croatian {
                if let Some((weight, width)) = croatian_letter(c, next) {
                    key.push(weight);
                    i += width;
                    continue;
                }
            }

            key.push((base_letter(c), 0));
            i += 1;
        }
        key
    }
}

fn croatian_letter(c: char, next: Option<char>) -> Option<(Weight, usize)> {
    let weight = match (c, next) {
        ('d', Some('ž')) => return Some((('d', 1), 2)),
        ('l', Some('j')) => return Some((('l', 1), 2)),
        ('n', Some('j')) => return Some((('n', 1), 2)),
        ('č', _) => ('c', 1),
        ('ć', _) => ('c', 2),
        ('đ', _) => ('d', 2),
        ('š', _) => ('s', 1),
        ('ž', _) => ('z', 1),
        _ => return None,
    };
    Some((weight, 1))
}

fn base_letter(c: char) -> char {
    match c {
        'đ' => 'd',
        'ł' => 'l',
        'ø' => 'o',
        _ => c
            .to_string()
            .nfd()
            .find(|d| !is_combining_mark(*d))
            .unwrap_or(c),
    }
}

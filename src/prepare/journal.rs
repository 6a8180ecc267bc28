use crate::config::Config;

/// Inspire HEP used to keep the series letter of these journals in the
/// volume ("Phys. Rev." volume "D108"). Current records carry it in the
/// name, older exports still need the fix.
const INCOMPLETE_JOURNAL_NAMES: [&str; 3] = ["Eur. Phys. J.", "Phys. Lett.", "Phys. Rev."];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    /// Name as used by Inspire HEP, series letter included.
    pub name: String,
    pub volume: String,
    /// CroRIS name, `None` for journals missing from the configuration.
    pub croris_name: Option<String>,
    pub issn: String,
    pub eissn: String,
}

impl Journal {
    pub fn resolve(name: &str, volume: &str, config: &Config) -> Self {
        let (name, volume) = split_series(name, volume);
        let known = config.journal(&name);
        Journal {
            croris_name: known.map(|j| j.croris.clone()),
            issn: known.map(|j| j.issn.clone()).unwrap_or_default(),
            eissn: known.map(|j| j.eissn.clone()).unwrap_or_default(),
            name,
            volume,
        }
    }

    pub fn is_known(&self) -> bool {
        self.croris_name.is_some()
    }
}

/// Moves a leading series letter from the volume into the journal name.
fn split_series(name: &str, volume: &str) -> (String, String) {
    if INCOMPLETE_JOURNAL_NAMES.contains(&name) {
        let mut chars = volume.chars();
        if let Some(series) = chars.next() {
            return (format!("{} {}", name, series), chars.as_str().to_string());
        }
    }
    (name.to_string(), volume.to_string())
}

/// Page information of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pages {
    Range { first: String, last: String },
    /// The pages field holds an article number; the page count comes from Inspire.
    Article { number: String, total: Option<u32> },
}

impl Pages {
    pub fn parse(pages: &str, total: Option<u32>) -> Self {
        if pages.contains('-') {
            let parts: Vec<&str> = pages.split('-').map(str::trim).collect();
            Pages::Range {
                first: parts.first().copied().unwrap_or_default().to_string(),
                last: parts.last().copied().unwrap_or_default().to_string(),
            }
        } else {
            Pages::Article {
                number: pages.trim().to_string(),
                total,
            }
        }
    }

    /// Either both ends of the range or both the article number and the page count.
    pub fn is_complete(&self) -> bool {
        match self {
            Pages::Range { first, last } => !first.is_empty() && !last.is_empty(),
            Pages::Article { number, total } => !number.is_empty() && total.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Phys. Rev.", "D108", "Phys. Rev. D", "108")]
    #[case("Eur. Phys. J.", "C83", "Eur. Phys. J. C", "83")]
    #[case("Phys. Lett.", "B846", "Phys. Lett. B", "846")]
    #[case("Phys. Rev. D", "108", "Phys. Rev. D", "108")]
    #[case("JHEP", "07", "JHEP", "07")]
    #[case("Phys. Rev.", "", "Phys. Rev.", "")]
    fn series_letter_moves_to_name(
        #[case] name: &str,
        #[case] volume: &str,
        #[case] fixed_name: &str,
        #[case] fixed_volume: &str,
    ) {
        assert_eq!(
            split_series(name, volume),
            (fixed_name.to_string(), fixed_volume.to_string())
        );
    }

    #[test]
    fn resolves_known_and_unknown_journals() {
        let config = Config::bundled().unwrap();

        let prd = Journal::resolve("Phys. Rev.", "D108", &config);
        assert_eq!(prd.croris_name.as_deref(), Some("Physical review. D"));
        assert_eq!((prd.issn.as_str(), prd.eissn.as_str()), ("2470-0010", "2470-0029"));
        assert_eq!(prd.volume, "108");

        let unknown = Journal::resolve("Acta Phys. Polon. B", "54", &config);
        assert!(!unknown.is_known());
        assert_eq!(unknown.issn, "");
    }

    #[rstest]
    #[case("313-335", None, Pages::Range { first: "313".into(), last: "335".into() }, true)]
    #[case("313-", None, Pages::Range { first: "313".into(), last: "".into() }, false)]
    #[case("120", Some(34), Pages::Article { number: "120".into(), total: Some(34) }, true)]
    #[case("120", None, Pages::Article { number: "120".into(), total: None }, false)]
    fn parses_pages(
        #[case] input: &str,
        #[case] total: Option<u32>,
        #[case] expected: Pages,
        #[case] complete: bool,
    ) {
        let pages = Pages::parse(input, total);
        assert_eq!(pages, expected);
        assert_eq!(pages.is_complete(), complete);
    }
}

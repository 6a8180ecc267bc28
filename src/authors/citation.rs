use super::roster::Match;
use std::fmt;

pub const SEPARATOR: &str = " ; ";
pub const ELLIPSIS: &str = "...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CitationToken {
    FullName(String),
    PrettyName(String),
    Ellipsis,
}

impl fmt::Display for CitationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitationToken::FullName(name) | CitationToken::PrettyName(name) => f.write_str(name),
            CitationToken::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

/// Builds the collapsed citation for a paper.
///
/// `matches` must be in ascending list order unless `sorted` is set, in which
/// case they are emitted as given between the leading and trailing ellipsis.
/// With a boundary match the layout is purely positional and `sorted` is
/// ignored, so the true first and last authors are never hidden behind a
/// reordered name.
pub fn compress<S: AsRef<str>>(
    authors: &[S],
    matches: &[Match],
    boundary: bool,
    sorted: bool,
) -> Vec<CitationToken> {
    if matches.is_empty() || authors.is_empty() {
        return Vec::new();
    }
    if boundary {
        positional(authors, matches)
    } else {
        interior(authors, matches, sorted)
    }
}

/// Layout when every match lies strictly inside the list.
fn interior<S: AsRef<str>>(authors: &[S], matches: &[Match], sorted: bool) -> Vec<CitationToken> {
    let mut tokens = Vec::with_capacity(matches.len() * 2 + 4);
    tokens.push(full_name(authors, 0));
    tokens.push(CitationToken::Ellipsis);

    let mut previous: Option<usize> = None;
    for m in matches {
        if !sorted {
            if let Some(prev) = previous {
                if m.list_index > prev + 1 {
                    tokens.push(CitationToken::Ellipsis);
                }
            }
            previous = Some(m.list_index);
        }
        tokens.push(CitationToken::PrettyName(m.pretty_name.clone()));
    }

    tokens.push(CitationToken::Ellipsis);
    tokens.push(full_name(authors, authors.len() - 1));
    tokens
}

/// Layout when at least one match occupies a boundary position.
fn positional<S: AsRef<str>>(authors: &[S], matches: &[Match]) -> Vec<CitationToken> {
    let total = authors.len();
    let mut tokens = Vec::with_capacity(matches.len() * 2 + 4);

    let mut previous: Option<usize> = None;
    for m in matches {
        match previous {
            None => match m.list_index {
                0 => {}
                1 => tokens.push(full_name(authors, 0)),
                _ => {
                    tokens.push(full_name(authors, 0));
                    tokens.push(CitationToken::Ellipsis);
                }
            },
            Some(prev) if m.list_index == prev + 1 => {}
            Some(_) => tokens.push(CitationToken::Ellipsis),
        }
        tokens.push(CitationToken::PrettyName(m.pretty_name.clone()));
        previous = Some(m.list_index);
    }

    if let Some(last) = previous {
        if last + 3 <= total {
            tokens.push(CitationToken::Ellipsis);
        }
        if last != total - 1 {
            tokens.push(full_name(authors, total - 1));
        }
    }
    tokens
}

fn full_name<S: AsRef<str>>(authors: &[S], index: usize) -> CitationToken {
    CitationToken::FullName(authors[index].as_ref().to_string())
}

pub fn join(tokens: &[CitationToken]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// The uncollapsed list, every author in order.
pub fn join_full<S: AsRef<str>>(authors: &[S]) -> String {
    authors
        .iter()
        .map(|author| author.as_ref())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authors::boundary::has_boundary_match;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use CitationToken::{Ellipsis, FullName, PrettyName};

    fn authors(total: usize) -> Vec<String> {
        (0..total).map(|i| format!("Author{}, A", i)).collect()
    }

    fn at(indices: &[usize]) -> Vec<Match> {
        indices
            .iter()
            .map(|&list_index| Match {
                list_index,
                pretty_name: format!("Local{}", list_index),
                external_id: None,
                institution_id: None,
            })
            .collect()
    }

    fn full(i: usize) -> CitationToken {
        FullName(format!("Author{}, A", i))
    }

    fn pretty(i: usize) -> CitationToken {
        PrettyName(format!("Local{}", i))
    }

    fn run(total: usize, indices: &[usize]) -> Vec<CitationToken> {
        let matches = at(indices);
        let boundary = has_boundary_match(&matches, total);
        compress(&authors(total), &matches, boundary, false)
    }

    #[test]
    fn adjacent_interior_matches() {
        assert_eq!(
            run(10, &[4, 5]),
            vec![full(0), Ellipsis, pretty(4), pretty(5), Ellipsis, full(9)]
        );
    }

    #[test]
    fn gap_between_interior_matches() {
        assert_eq!(
            run(10, &[4, 7]),
            vec![full(0), Ellipsis, pretty(4), Ellipsis, pretty(7), Ellipsis, full(9)]
        );
    }

    #[test]
    fn matches_at_the_start() {
        assert_eq!(
            run(10, &[0, 1]),
            vec![pretty(0), pretty(1), Ellipsis, full(9)]
        );
    }

    #[test]
    fn every_author_matched() {
        assert_eq!(run(3, &[0, 1, 2]), vec![pretty(0), pretty(1), pretty(2)]);
    }

    #[test]
    fn matches_at_the_end() {
        assert_eq!(run(5, &[3, 4]), vec![full(0), Ellipsis, pretty(3), pretty(4)]);
    }

    #[test]
    fn single_author_paper() {
        assert_eq!(run(1, &[0]), vec![pretty(0)]);
    }

    #[rstest]
    #[case(10, &[1], vec![full(0), pretty(1), Ellipsis, full(9)])]
    #[case(10, &[8], vec![full(0), Ellipsis, pretty(8), full(9)])]
    #[case(10, &[0, 9], vec![pretty(0), Ellipsis, pretty(9)])]
    #[case(10, &[1, 4, 5, 8], vec![full(0), pretty(1), Ellipsis, pretty(4), pretty(5), Ellipsis, pretty(8), full(9)])]
    #[case(2, &[1], vec![full(0), pretty(1)])]
    #[case(2, &[0], vec![pretty(0), full(1)])]
    #[case(4, &[0, 3], vec![pretty(0), Ellipsis, pretty(3)])]
    fn positional_layout(
        #[case] total: usize,
        #[case] indices: &[usize],
        #[case] expected: Vec<CitationToken>,
    ) {
        assert_eq!(run(total, indices), expected);
    }

    #[test]
    fn sorted_interior_skips_gap_ellipses() {
        let mut matches = at(&[6, 3]);
        matches[0].pretty_name = "Antunović, Željko".to_string();
        matches[1].pretty_name = "Puljak, Ivica".to_string();
        let tokens = compress(&authors(10), &matches, false, true);
        assert_eq!(
            tokens,
            vec![
                full(0),
                Ellipsis,
                PrettyName("Antunović, Željko".to_string()),
                PrettyName("Puljak, Ivica".to_string()),
                Ellipsis,
                full(9),
            ]
        );
    }

    #[test]
    fn sorted_flag_is_ignored_with_boundary_matches() {
        let matches = at(&[0, 5]);
        let tokens = compress(&authors(10), &matches, true, true);
        assert_eq!(tokens, vec![pretty(0), Ellipsis, pretty(5), Ellipsis, full(9)]);
    }

    #[test]
    fn never_two_ellipses_in_a_row() {
        for total in 1..9 {
            // every non-empty subset of positions
            for mask in 1u32..(1 << total) {
                let indices: Vec<usize> = (0..total).filter(|i| mask & (1 << i) != 0).collect();
                let tokens = run(total, &indices);
                assert!(
                    tokens.windows(2).all(|w| !(w[0] == Ellipsis && w[1] == Ellipsis)),
                    "double ellipsis for N={} {:?}: {:?}",
                    total,
                    indices,
                    tokens
                );
                let full_names = tokens.iter().filter(|t| matches!(t, FullName(_))).count();
                assert!(full_names <= 2);
            }
        }
    }

    #[test]
    fn empty_matches_give_no_tokens() {
        assert!(compress(&authors(5), &[], false, false).is_empty());
    }

    #[test]
    fn joins_with_separator() {
        let tokens = run(10, &[4, 7]);
        assert_eq!(
            join(&tokens),
            "Author0, A ; ... ; Local4 ; ... ; Local7 ; ... ; Author9, A"
        );
        assert_eq!(join_full(&["A, B", "C, D"]), "A, B ; C, D");
    }
}

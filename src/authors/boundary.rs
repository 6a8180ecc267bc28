use super::roster::Match;

/// True when a matched author sits in the first two or the last two
/// positions of a list of `total` authors.
pub fn has_boundary_match(matches: &[Match], total: usize) -> bool {
    let min = matches.iter().map(|m| m.list_index).min();
    let max = matches.iter().map(|m| m.list_index).max();
    match (min, max) {
        // max > total - 3, written without underflow
        (Some(min), Some(max)) => min < 2 || max + 3 > total,
        _ => false,
    }
}

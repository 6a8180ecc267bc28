//! Reconstruction of the author string of a paper.
//!
//! Large collaborations publish with hundreds of authors. Only the local ones
//! are listed by name, framed by the first and last author of the paper:
//!
//! ```text
//! Tumasyan, Armen ; ... ; Brigljević, Vuko ; Ferenček, Dinko ; ... ; Zeidan, Sami
//! ```

mod boundary;
mod citation;
mod error;
mod roster;
mod sort;

pub use error::AuthorError;
pub use roster::{Roster, RosterEntry};
pub use sort::{Collation, SortOutcome};

use boundary::has_boundary_match;
use citation::{compress, join, join_full};
use roster::institutions;

use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Default)]
pub struct AuthorOptions {
    pub sort: bool,
    pub full_list: bool,
    pub collation: Collation,
}

/// Author information of one paper, ready for the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorList {
    pub citation: String,
    /// CroRIS ids of the local authors, in author list order.
    pub external_ids: Vec<u32>,
    pub institution_ids: BTreeSet<u32>,
    pub boundary: bool,
    pub sort: SortOutcome,
    pub matched: usize,
    pub total: usize,
}

impl AuthorList {
    pub fn build<S: AsRef<str>>(
        authors: &[S],
        roster: &Roster,
        options: &AuthorOptions,
    ) -> Result<Self, AuthorError> {
        let total = authors.len();
        let mut matches = roster.match_authors(authors);
        if matches.is_empty() {
            return Err(AuthorError::NoLocalAuthors { total });
        }

        let external_ids = matches.iter().filter_map(|m| m.external_id).collect();
        let institution_ids = institutions(&matches);
        let boundary = has_boundary_match(&matches, total);

        let (citation, sort) = if options.full_list {
            (join_full(authors), SortOutcome::Disabled)
        } else {
            let sort = sort::apply(&mut matches, boundary, options.sort, options.collation);
            let tokens = compress(authors, &matches, boundary, sort.is_sorted());
            (join(&tokens), sort)
        };

        Ok(AuthorList {
            citation,
            external_ids,
            institution_ids,
            boundary,
            sort,
            matched: matches.len(),
            total,
        })
    }
}

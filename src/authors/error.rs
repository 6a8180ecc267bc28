use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthorError {
    #[error("No local authors found among {total} paper authors")]
    NoLocalAuthors { total: usize },
}

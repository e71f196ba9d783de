use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record has no `,` separating the variant from its tag comment")]
    MissingSeparator,
    #[error("Tag comment `{0}` has no `<` opening the tag name")]
    MissingTagOpen(String),
}

#[derive(Debug, Error)]
pub enum RecordListError {
    #[error("Tag kind list {0} is not a readable file")]
    InvalidPath(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type RecordListResult<T> = Result<T, RecordListError>;

use crate::registry::Kind;
use sled::transaction::ConflictableTransactionError;
use thiserror::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] sled::Error),
    #[error("key {key:?} holds a {found}, not a {expected}")]
    WrongType {
        key: String,
        expected: Kind,
        found: Kind,
    },
    #[error("invalid list record, key was: {0:?}")]
    InvalidRecord(String),
    #[error("list record at key {0:?} holds an element that is not valid utf-8")]
    InvalidUtf8(String),
    #[error("bad type tag: {0}")]
    BadTag(u8),
    #[error("invalid type registration, key was: {0:?}")]
    InvalidRegistration(String),
}

impl From<Error> for ConflictableTransactionError<Error> {
    fn from(e: Error) -> Self {
        ConflictableTransactionError::Abort(e)
    }
}

use crate::object::ObjectKind;

/// Enum intended to represent all the different error types that there could be
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("object {0} does not exist in the object store")]
    ObjectNotFound(String),
    #[error("object data is corrupt: {0}")]
    CorruptObject(String),
    #[error("expected a {expected} object, found a {found} object")]
    WrongObjectKind {
        expected: ObjectKind,
        found: ObjectKind,
    },
    #[error("tree entry mode {0:?} does not map to any object kind")]
    UnrecognizedMode(String),
    #[error("{0:?} is not a valid object hash")]
    InvalidHash(String),
    #[error("compression engine error: {0}")]
    Codec(String),
    #[error("i/o operation error: {0:?}")]
    Io(#[from] std::io::Error),
}

/// Abstraction of the result type where the error is always an Error from this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::AvlMap;
pub use self::set::AvlSet;

use std::error;
use std::fmt;
use std::result;

/// The errors that an operation on an `AvlMap` or `AvlSet` can report. Both variants are
/// recoverable: the structure is left exactly as it was before the call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An insertion was rejected because the key already exists.
    DuplicateKey,
    /// A removal was a no-op because the key does not exist.
    KeyNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey => write!(f, "key already exists"),
            Error::KeyNotFound => write!(f, "key does not exist"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

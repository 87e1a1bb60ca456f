//! Error type.

use core::fmt::{self, Display};

/// Failure of an operation that needs a top element.
///
/// Returned by [`Stack::pop`](crate::Stack::pop) and
/// [`Stack::peek`](crate::Stack::peek) when the stack holds no elements.
/// The stack is left unchanged in that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    Empty,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "stack is empty"),
        }
    }
}

impl core::error::Error for Error {}

#[test]
fn message() {
    use alloc::string::ToString;
    let msg = Error::Empty.to_string();
    assert_eq!(msg, "stack is empty");
    assert!(msg.to_lowercase().contains("empty"));
}

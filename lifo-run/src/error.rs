use crate::command::ParseError;
use core::fmt::{self, Display};
use std::io;

/// Position of a command in a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pos {
    pub script: String,
    /// 1-based line number
    pub line: usize,
}

impl Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.script, self.line)
    }
}

/// Central error type.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Parse(Pos, ParseError),
    Stack(Pos, lifo::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{}", e),
            Self::Parse(pos, e) => write!(f, "{}: {}", pos, e),
            Self::Stack(pos, e) => write!(f, "{}: {}", pos, e),
        }
    }
}

impl std::error::Error for Error {}

//! Script commands, one per line.

use core::fmt::{self, Display};
use core::str::FromStr;
use lifo::Stack;

/// An operation on a stack of strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Push the given value
    Push(String),
    /// Pop and print the top
    Pop,
    /// Print the top
    Peek,
    /// Print the number of elements
    Size,
    /// Print whether the stack is empty
    Empty,
    /// Remove all elements
    Clear,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    ExpectedValue,
    UnexpectedArgument(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unknown(cmd) => write!(f, "unknown command: {}", cmd),
            Self::ExpectedValue => write!(f, "push expects a value"),
            Self::UnexpectedArgument(cmd) => write!(f, "{} takes no argument", cmd),
        }
    }
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::Pop => "pop",
            Self::Peek => "peek",
            Self::Size => "size",
            Self::Empty => "empty",
            Self::Clear => "clear",
        }
    }

    /// Parse a script line, returning `None` for blank lines and comments.
    pub fn parse_line(line: &str) -> Option<Result<Self, ParseError>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            None
        } else {
            Some(line.parse())
        }
    }

    /// Run the command on the stack, returning what it prints.
    pub fn apply(self, stack: &mut Stack<String>) -> Result<Option<String>, lifo::Error> {
        Ok(match self {
            Self::Push(x) => {
                stack.push(x);
                None
            }
            Self::Pop => Some(stack.pop()?),
            Self::Peek => Some(stack.peek()?.clone()),
            Self::Size => Some(stack.size().to_string()),
            Self::Empty => Some(stack.is_empty().to_string()),
            Self::Clear => {
                stack.clear();
                None
            }
        })
    }
}

impl FromStr for Command {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (cmd, arg) = match s.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (s, ""),
        };
        let nullary = match cmd {
            "push" if arg.is_empty() => return Err(ParseError::ExpectedValue),
            "push" => return Ok(Self::Push(arg.to_owned())),
            "pop" => Self::Pop,
            "peek" => Self::Peek,
            "size" => Self::Size,
            "empty" => Self::Empty,
            "clear" => Self::Clear,
            _ => return Err(ParseError::Unknown(cmd.to_owned())),
        };
        if arg.is_empty() {
            Ok(nullary)
        } else {
            Err(ParseError::UnexpectedArgument(nullary.name()))
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Push(x) => write!(f, "push {}", x),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[test]
fn positive() -> Result<(), ParseError> {
    assert_eq!("push 1".parse::<Command>()?, Command::Push("1".into()));
    assert_eq!("push  hello world ".parse::<Command>()?, Command::Push("hello world".into()));
    assert_eq!("pop".parse::<Command>()?, Command::Pop);
    assert_eq!("  peek".parse::<Command>()?, Command::Peek);
    assert_eq!("size".parse::<Command>()?, Command::Size);
    assert_eq!("empty".parse::<Command>()?, Command::Empty);
    assert_eq!("clear\t".parse::<Command>()?, Command::Clear);
    Ok(())
}

#[test]
fn negative() {
    use ParseError::*;
    let parse_err = |s: &str| s.parse::<Command>().unwrap_err();
    assert_eq!(parse_err("push"), ExpectedValue);
    assert_eq!(parse_err("push   "), ExpectedValue);
    assert_eq!(parse_err("pop 1"), UnexpectedArgument("pop"));
    assert_eq!(parse_err("clear all"), UnexpectedArgument("clear"));
    assert_eq!(parse_err("shift"), Unknown("shift".into()));
    assert_eq!(parse_err("PUSH 1"), Unknown("PUSH".into()));
}

#[test]
fn skipped_lines() {
    assert_eq!(Command::parse_line(""), None);
    assert_eq!(Command::parse_line("   "), None);
    assert_eq!(Command::parse_line("# push 1"), None);
    assert_eq!(Command::parse_line(" size"), Some(Ok(Command::Size)));
}

#[test]
fn display() {
    assert_eq!(Command::Push("a b".into()).to_string(), "push a b");
    assert_eq!(Command::Empty.to_string(), "empty");
    let cmd = Command::Push("x".into());
    assert_eq!(cmd.to_string().parse(), Ok(cmd));
}

#[test]
fn apply() -> Result<(), lifo::Error> {
    let mut stack = Stack::new();
    assert_eq!(Command::Push("1".into()).apply(&mut stack)?, None);
    assert_eq!(Command::Size.apply(&mut stack)?, Some("1".into()));
    assert_eq!(Command::Push("2".into()).apply(&mut stack)?, None);
    assert_eq!(Command::Pop.apply(&mut stack)?, Some("2".into()));
    assert_eq!(Command::Peek.apply(&mut stack)?, Some("1".into()));
    assert_eq!(Command::Size.apply(&mut stack)?, Some("1".into()));
    assert_eq!(Command::Clear.apply(&mut stack)?, None);
    assert_eq!(Command::Empty.apply(&mut stack)?, Some("true".into()));
    assert_eq!(Command::Pop.apply(&mut stack), Err(lifo::Error::Empty));
    assert_eq!(Command::Peek.apply(&mut stack), Err(lifo::Error::Empty));
    Ok(())
}

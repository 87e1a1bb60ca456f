//! Run scripts of stack operations.
//!
//! A script contains one command per line;
//! blank lines and lines starting with `#` are skipped.
//! The commands are `push <value>`, `pop`, `peek`, `size`, `empty`, and `clear`.
//!
//! ~~~
//! use lifo_run::Command;
//! use lifo::Stack;
//!
//! let mut stack = Stack::new();
//! for line in ["push 1", "# comment", "push 2", "pop"] {
//!     if let Some(cmd) = Command::parse_line(line) {
//!         cmd.unwrap().apply(&mut stack)?;
//!     }
//! }
//! assert_eq!(stack.peek()?, "1");
//! # Ok::<_, lifo::Error>(())
//! ~~~

pub mod command;
mod error;
mod opt;
pub mod run;
mod script;

pub use command::Command;
pub use error::{Error, Pos};
pub use opt::Opt;
pub use script::Script;

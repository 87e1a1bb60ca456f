#![no_std]
#![forbid(unsafe_code)]

//! Last-in-first-out stack with fail-fast access to its top.
//!
//! A [`Stack`] holds elements of a single type and only gives access to
//! the element most recently pushed and not yet popped, the *top*.
//! Operations that need a top, namely [`Stack::pop`] and [`Stack::peek`],
//! return [`Error::Empty`] when the stack is empty,
//! leaving the stack unchanged.
//! All other operations cannot fail.
//!
//! ~~~
//! use lifo::{Error, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.size(), 2);
//!
//! // peeking does not change the stack
//! assert_eq!(stack.peek()?, &2);
//! assert_eq!(stack.size(), 2);
//!
//! assert_eq!(stack.pop()?, 2);
//! assert_eq!(stack.size(), 1);
//!
//! stack.clear();
//! assert!(stack.is_empty());
//! assert_eq!(stack.pop(), Err(Error::Empty));
//! # Ok::<_, Error>(())
//! ~~~
//!
//! Elements of different kinds can be stored by choosing an enum as element type:
//!
//! ~~~
//! # use lifo::Stack;
//! #[derive(Debug, PartialEq)]
//! enum Value {
//!     Int(i64),
//!     Str(&'static str),
//!     Null,
//! }
//!
//! let mut stack = Stack::new();
//! stack.push(Value::Int(0));
//! stack.push(Value::Str(""));
//! stack.push(Value::Null);
//! assert_eq!(stack.pop(), Ok(Value::Null));
//! assert_eq!(stack.pop(), Ok(Value::Str("")));
//! ~~~
//!
//! A stack is not synchronised internally;
//! to share one between threads, wrap it in a lock such as `std::sync::Mutex`.

extern crate alloc;

pub mod error;
mod stack;

pub use error::Error;
pub use stack::Stack;

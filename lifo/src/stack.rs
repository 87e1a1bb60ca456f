//! Last-in-first-out container with fail-fast access to its top.

use crate::Error;
use alloc::vec::Vec;
use core::iter::FromIterator;

/// A `Vec` whose last element is the top of the stack.
///
/// Pushing appends to the `Vec` and popping removes from its end,
/// so both run in amortised constant time.
/// Access to the top via [`Stack::pop`] and [`Stack::peek`] fails with
/// [`Error::Empty`] instead of returning a sentinel,
/// so that an empty stack is never confused with a stored value.
///
/// Iteration, [`Stack::get`], and `into_iter` all go from the top to the bottom,
/// that is, the nth element is the nth-*last* pushed element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<A>(Vec<A>);

impl<A> Stack<A> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Default::default()
    }

    /// Add an element to the top of the stack.
    pub fn push(&mut self, x: A) {
        self.0.push(x)
    }

    /// Remove and return the element on top of the stack.
    ///
    /// ~~~
    /// # use lifo::{Error, Stack};
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(Error::Empty));
    /// ~~~
    pub fn pop(&mut self) -> Result<A, Error> {
        self.0.pop().ok_or(Error::Empty)
    }

    /// Return the element on top of the stack without removing it.
    pub fn peek(&self) -> Result<&A, Error> {
        self.0.last().ok_or(Error::Empty)
    }

    /// Return the element on top of the stack for modification.
    pub fn peek_mut(&mut self) -> Result<&mut A, Error> {
        self.0.last_mut().ok_or(Error::Empty)
    }

    /// Remove all elements from the stack.
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Return the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same as [`Stack::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Return true if the stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Obtain the nth element counted from the top of the stack.
    pub fn get(&self, n: usize) -> Option<&A> {
        self.iter().nth(n)
    }

    /// Push an element on the stack, run a function on it, then pop the element.
    ///
    /// If `f` leaves the stack as it found it,
    /// the stack at the end contains the same elements as at the beginning.
    /// If `f` fails, its error is returned and the pushed element stays on the stack.
    pub fn with_pushed<F, Y, E>(&mut self, x: A, f: F) -> Result<Y, E>
    where
        F: FnOnce(&mut Stack<A>) -> Result<Y, E>,
    {
        self.0.push(x);
        let y = f(self)?;
        self.0.pop();
        Ok(y)
    }

    /// Iterate through the elements of the stack starting from the top.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.0.iter().rev()
    }

    /// Return the elements from the bottom to the top of the stack.
    pub fn into_vec(self) -> Vec<A> {
        self.0
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

/// The last element of the vector becomes the top of the stack.
impl<A> From<Vec<A>> for Stack<A> {
    fn from(v: Vec<A>) -> Self {
        Self(v)
    }
}

impl<A> IntoIterator for Stack<A> {
    type Item = A;
    type IntoIter = core::iter::Rev<alloc::vec::IntoIter<Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter().rev()
    }
}

impl<'a, A> IntoIterator for &'a Stack<A> {
    type Item = &'a A;
    type IntoIter = core::iter::Rev<core::slice::Iter<'a, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().rev()
    }
}

/// Elements are pushed in iteration order, so the last one ends up on top.
impl<A> FromIterator<A> for Stack<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl<A> Extend<A> for Stack<A> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

#[cfg(test)]
use alloc::{string::ToString, vec};

#[test]
fn push_pop() {
    let mut stack = Stack::new();
    stack.push(1);
    assert_eq!(stack.size(), 1);

    stack.push(2);
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.peek(), Ok(&1));
    assert_eq!(stack.size(), 1);
}

#[test]
fn lifo() {
    for n in 1..20 {
        let mut stack = Stack::new();
        (0..n).for_each(|i| stack.push(i));
        assert_eq!(stack.pop(), Ok(n - 1));
        assert_eq!(stack.len(), (n - 1) as usize);
    }
}

#[test]
fn drain() {
    for n in 0..20 {
        let mut stack: Stack<usize> = (0..n).collect();
        for i in (0..n).rev() {
            assert_eq!(stack.pop(), Ok(i));
        }
        assert!(stack.is_empty());
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.pop(), Err(Error::Empty));
    }
}

#[test]
fn peek() {
    let mut stack = Stack::from(vec!["a", "b", "c"]);
    while !stack.is_empty() {
        let size = stack.size();
        let top = *stack.peek().unwrap();
        assert_eq!(stack.size(), size);
        assert_eq!(stack.pop(), Ok(top));
    }
    assert_eq!(stack.peek(), Err(Error::Empty));
}

#[test]
fn peek_mut() {
    let mut stack = Stack::new();
    assert_eq!(stack.peek_mut(), Err(Error::Empty));
    stack.push(1);
    stack.push(2);
    *stack.peek_mut().unwrap() += 40;
    assert_eq!(stack.into_vec(), vec![1, 42]);
}

#[test]
fn empty() {
    let mut stack: Stack<i32> = Stack::new();
    let pop = stack.pop().unwrap_err().to_string();
    let peek = stack.peek().unwrap_err().to_string();
    assert!(pop.to_lowercase().contains("empty"));
    assert!(peek.to_lowercase().contains("empty"));
    // failed access leaves the stack untouched
    assert!(stack.is_empty());

    stack.push(1);
    stack.clear();
    assert_eq!(stack.pop(), Err(Error::Empty));
    assert_eq!(stack.peek(), Err(Error::Empty));
}

#[test]
fn falsy_values() {
    let mut stack = Stack::new();
    stack.push(None);
    stack.push(Some(0));
    assert_eq!(stack.pop(), Ok(Some(0)));
    assert_eq!(stack.pop(), Ok(None));
    assert_eq!(stack.pop(), Err(Error::Empty));
}

#[test]
fn clear() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.clear();
    assert_eq!(stack.size(), 0);
    stack.clear();
    assert_eq!(stack.size(), 0);
    assert!(stack.is_empty());
}

#[test]
fn is_empty_iff_zero_size() {
    let mut stack = Stack::new();
    let check = |s: &Stack<u8>| assert_eq!(s.is_empty(), s.size() == 0);
    check(&stack);
    for i in 0..5 {
        stack.push(i);
        check(&stack);
    }
    while stack.pop().is_ok() {
        check(&stack);
    }
    check(&stack);
}

#[test]
fn order() {
    let stack: Stack<_> = vec![1, 2, 3].into();
    assert_eq!(stack.get(0), Some(&3));
    assert_eq!(stack.get(2), Some(&1));
    assert_eq!(stack.get(3), None);
    assert!(stack.iter().eq([3, 2, 1].iter()));
    assert!((&stack).into_iter().eq(stack.iter()));
    assert!(stack.into_iter().eq([3, 2, 1]));
}

#[test]
fn extend() {
    let mut stack = Stack::from(vec![1]);
    stack.extend([2, 3]);
    assert_eq!(stack.peek(), Ok(&3));
    assert_eq!(stack.into_vec(), vec![1, 2, 3]);
}

#[test]
fn clone_is_independent() {
    let mut a = Stack::from(vec![1, 2]);
    let b = a.clone();
    a.push(3);
    a.pop().unwrap();
    a.pop().unwrap();
    assert_eq!(a.size(), 1);
    assert_eq!(b.size(), 2);
    assert_eq!(b.peek(), Ok(&2));
}

#[test]
fn with_pushed() {
    let mut stack = Stack::from(vec![1]);
    let top = stack.with_pushed(2, |s| s.peek().copied());
    assert_eq!(top, Ok(2));
    assert_eq!(stack.into_vec(), vec![1]);

    let mut stack: Stack<u8> = Stack::new();
    let res = stack.with_pushed(1, |s| {
        s.clear();
        s.pop()
    });
    assert_eq!(res, Err(Error::Empty));
    assert!(stack.is_empty());
}

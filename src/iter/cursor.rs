//! Cursors: lazy sequences that can say whether anything is left.
//!
//! A [`Cursor`] is the capability set every iteration stage implements:
//! look at the current element, step past it, and ask `is_end` without
//! comparing against a separately stored end value. Stages compose by
//! holding the previous stage by value.
//!
//! [`EndAwareIter`] is the bottom stage. It wraps a raw incidence sequence
//! and tracks validity explicitly, so a default-constructed cursor ("no
//! traversal was started") and an exhausted one both report `is_end`.

use crate::merge_error::MergeGraphError;

/// Position of a cursor in its lifecycle.
///
/// `Invalid → InRange ⇄ advance → AtEnd`. `Invalid` and `AtEnd` are
/// terminal; a fresh cursor is needed to traverse again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// No range was ever bound.
    Invalid,
    /// There is a current element.
    InRange,
    /// The bound range is exhausted.
    AtEnd,
}

/// Lazy sequence with an explicit exhaustion query.
pub trait Cursor {
    type Item;

    /// `true` when there is no current element (Invalid or AtEnd).
    fn is_end(&self) -> bool;

    /// The current element, or `None` when exhausted.
    fn get(&self) -> Option<Self::Item>;

    /// Move past the current element. Returns `true` if the cursor is still
    /// in range afterwards. Advancing an exhausted cursor is a no-op.
    fn try_advance(&mut self) -> bool;

    /// The current element.
    ///
    /// # Panics
    /// Panics if the cursor is exhausted.
    #[inline]
    #[track_caller]
    fn current(&self) -> Self::Item {
        match self.get() {
            Some(item) => item,
            None => panic!("{}", MergeGraphError::ExhaustedCursor),
        }
    }

    /// Fallible form of [`Cursor::current`].
    #[inline]
    fn try_current(&self) -> Result<Self::Item, MergeGraphError> {
        self.get().ok_or(MergeGraphError::ExhaustedCursor)
    }
}

/// Shared `Iterator::next` for every stage: read, then advance.
#[inline]
pub(crate) fn next_from<C: Cursor + ?Sized>(cursor: &mut C) -> Option<C::Item> {
    let item = cursor.get()?;
    cursor.try_advance();
    Some(item)
}

/// Validity-tracked cursor over a raw id sequence.
///
/// Holds the base iterator plus exactly one element of lookahead (the
/// current position).
#[derive(Clone, Debug)]
pub struct EndAwareIter<I: Iterator> {
    iter: Option<I>,
    head: Option<I::Item>,
}

impl<I: Iterator> EndAwareIter<I> {
    /// Bind a cursor to `iter`, positioned on its first element.
    ///
    /// An empty sequence yields a cursor that is already at its end.
    #[inline]
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        let mut iter = iter.into_iter();
        let head = iter.next();
        Self {
            iter: Some(iter),
            head,
        }
    }

    /// `false` only for a default-constructed cursor.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.iter.is_some()
    }

    #[inline]
    pub fn state(&self) -> CursorState {
        match (&self.iter, &self.head) {
            (None, _) => CursorState::Invalid,
            (Some(_), Some(_)) => CursorState::InRange,
            (Some(_), None) => CursorState::AtEnd,
        }
    }
}

impl<I: Iterator> Default for EndAwareIter<I> {
    fn default() -> Self {
        Self {
            iter: None,
            head: None,
        }
    }
}

impl<I> Cursor for EndAwareIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn is_end(&self) -> bool {
        self.state() != CursorState::InRange
    }

    #[inline]
    fn get(&self) -> Option<I::Item> {
        self.head.clone()
    }

    #[inline]
    fn try_advance(&mut self) -> bool {
        if self.head.is_none() {
            return false;
        }
        if let Some(iter) = self.iter.as_mut() {
            self.head = iter.next();
        }
        self.head.is_some()
    }
}

impl<I> Iterator for EndAwareIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        next_from(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.iter, &self.head) {
            (Some(iter), Some(_)) => {
                let (lo, hi) = iter.size_hint();
                (lo.saturating_add(1), hi.and_then(|h| h.checked_add(1)))
            }
            _ => (0, Some(0)),
        }
    }
}

impl<I> std::iter::FusedIterator for EndAwareIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

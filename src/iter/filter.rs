//! Filtering stage.

use super::cursor::{next_from, Cursor};
use super::predicate::IdFilter;

/// Skips base elements that fail a predicate.
///
/// The base is advanced past failing elements on construction and on every
/// `try_advance`, so the current element (if any) always satisfies the
/// predicate. `is_end` asks the base cursor directly: the predicate reads
/// live graph state, and only the base knows whether anything is left after
/// the internal skips.
///
/// Traversal cannot be rewound; build a fresh stage over a fresh base.
#[derive(Clone, Debug, Default)]
pub struct FilterIter<F, C> {
    filter: F,
    base: C,
}

impl<F, C> FilterIter<F, C>
where
    C: Cursor,
    F: IdFilter<C::Item>,
{
    pub fn new(filter: F, base: C) -> Self {
        let mut it = Self { filter, base };
        it.skip_rejected();
        it
    }

    #[inline]
    fn skip_rejected(&mut self) {
        while let Some(item) = self.base.get() {
            if self.filter.keep(item) {
                break;
            }
            self.base.try_advance();
        }
    }

    /// The underlying cursor.
    #[inline]
    pub fn base(&self) -> &C {
        &self.base
    }

    #[inline]
    pub fn predicate(&self) -> &F {
        &self.filter
    }
}

impl<F, C> Cursor for FilterIter<F, C>
where
    C: Cursor,
    F: IdFilter<C::Item>,
{
    type Item = C::Item;

    #[inline]
    fn is_end(&self) -> bool {
        self.base.is_end()
    }

    #[inline]
    fn get(&self) -> Option<C::Item> {
        self.base.get()
    }

    fn try_advance(&mut self) -> bool {
        if self.base.try_advance() {
            self.skip_rejected();
        }
        !self.base.is_end()
    }
}

impl<F, C> Iterator for FilterIter<F, C>
where
    C: Cursor,
    F: IdFilter<C::Item>,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        next_from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::cursor::{CursorState, EndAwareIter};
    use crate::iter::predicate::SmallerThan;

    #[test]
    fn skips_leading_and_interior_rejects() {
        let base = EndAwareIter::new([9u32, 7, 1, 8, 3, 6]);
        let mut f = FilterIter::new(SmallerThan::new(5u32), base);
        assert_eq!(f.current(), 1);
        assert!(f.try_advance());
        assert_eq!(f.current(), 3);
        assert!(!f.try_advance());
        assert!(f.is_end());
        assert_eq!(f.base().state(), CursorState::AtEnd);
    }

    #[test]
    fn all_rejected_is_end_after_construction() {
        let f = FilterIter::new(|x: u32| x > 100, EndAwareIter::new([1u32, 2, 3]));
        assert!(f.is_end());
        assert_eq!(f.get(), None);
    }

    #[test]
    fn default_stage_is_end() {
        let f = FilterIter::<SmallerThan<u32>, EndAwareIter<std::vec::IntoIter<u32>>>::default();
        assert!(f.is_end());
        assert_eq!(f.base().state(), CursorState::Invalid);
    }

    #[test]
    fn fresh_stages_yield_identical_sequences() {
        let ids = vec![4u32, 2, 9, 0, 3];
        let fresh = || FilterIter::new(SmallerThan::new(4), EndAwareIter::new(ids.iter().copied()));
        let a: Vec<_> = fresh().collect();
        let b: Vec<_> = fresh().collect();
        assert_eq!(a, vec![2, 0, 3]);
        assert_eq!(a, b);
    }
}

//! Transform stage.

use super::cursor::{next_from, Cursor};
use super::projection::IdTransform;

/// Maps each element of the wrapped cursor through a projection on read.
///
/// Nothing is materialized: the projection runs every time the current
/// element is read. `is_end` delegates to the wrapped cursor.
#[derive(Clone, Debug, Default)]
pub struct TransformIter<T, C> {
    transform: T,
    base: C,
}

impl<T, C> TransformIter<T, C>
where
    C: Cursor,
    T: IdTransform<C::Item>,
{
    #[inline]
    pub fn new(base: C, transform: T) -> Self {
        Self { transform, base }
    }

    /// The underlying cursor, yielding untransformed ids.
    #[inline]
    pub fn base(&self) -> &C {
        &self.base
    }

    #[inline]
    pub fn into_base(self) -> C {
        self.base
    }

    #[inline]
    pub fn projection(&self) -> &T {
        &self.transform
    }
}

impl<T, C> Cursor for TransformIter<T, C>
where
    C: Cursor,
    T: IdTransform<C::Item>,
{
    type Item = T::Output;

    #[inline]
    fn is_end(&self) -> bool {
        self.base.is_end()
    }

    #[inline]
    fn get(&self) -> Option<T::Output> {
        self.base.get().map(|id| self.transform.apply(id))
    }

    #[inline]
    fn try_advance(&mut self) -> bool {
        self.base.try_advance()
    }
}

impl<T, C> Iterator for TransformIter<T, C>
where
    C: Cursor,
    T: IdTransform<C::Item>,
{
    type Item = T::Output;

    #[inline]
    fn next(&mut self) -> Option<T::Output> {
        next_from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::cursor::EndAwareIter;
    use crate::iter::filter::FilterIter;
    use crate::iter::predicate::SmallerThan;

    #[test]
    fn projects_on_read() {
        let mut t = TransformIter::new(EndAwareIter::new([1u32, 2, 3]), |x: u32| x * 10);
        assert_eq!(t.current(), 10);
        assert_eq!(t.base().current(), 1);
        assert!(t.try_advance());
        assert_eq!(t.collect::<Vec<_>>(), vec![20, 30]);
    }

    #[test]
    fn is_end_delegates_through_filter() {
        let filtered = FilterIter::new(SmallerThan::new(2u32), EndAwareIter::new([5u32, 6]));
        let t = TransformIter::new(filtered, |x: u32| x + 1);
        assert!(t.is_end());
        assert_eq!(t.get(), None);
    }

    #[derive(Clone, Debug, Default)]
    struct Double;

    impl IdTransform<u32> for Double {
        type Output = u64;

        fn apply(&self, id: u32) -> u64 {
            u64::from(id) * 2
        }
    }

    #[test]
    fn default_stage_is_end() {
        let mut t = TransformIter::<Double, EndAwareIter<std::vec::IntoIter<u32>>>::default();
        assert!(t.is_end());
        assert!(!t.try_advance());
        assert_eq!(t.next(), None);
    }

    #[test]
    fn named_projection_changes_item_type() {
        let t = TransformIter::new(EndAwareIter::new(vec![3u32, 4]), Double);
        assert_eq!(t.collect::<Vec<u64>>(), vec![6, 8]);
    }
}

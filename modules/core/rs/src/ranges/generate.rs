use derive_getters::Getters;
use derive_more::Constructor;

use crate::kind;
use crate::range::{ForwardRange, Range, SizedRange, Transferred};
use crate::reference::Owned;

/// Range of `count` values computed from their position on every read.
#[derive(Clone, Copy, Debug, Default, Constructor, Getters)]
pub struct Generate<F> {
    count: usize,
    generator: F,
}

impl<F, T> Range for Generate<F>
where
    F: Fn(usize) -> T,
{
    type Value = T;
    type Cursor = usize;
    type Kind = kind::Value;
    type Reference<'a>
        = Owned<T>
    where
        Self: 'a;

    #[inline(always)]
    fn begin(&mut self) -> usize {
        0
    }

    #[inline(always)]
    fn end(&self) -> usize {
        self.count
    }

    #[inline(always)]
    fn next(&mut self, cursor: &mut usize) {
        *cursor += 1;
    }

    #[inline(always)]
    fn read<'a>(&'a mut self, cursor: &usize) -> Owned<T> {
        Owned::from((self.generator)(*cursor))
    }

    // Generated values are already owned by the receiver, no recast needed.
    #[inline(always)]
    fn iter_move<'a>(&'a mut self, cursor: &usize) -> Transferred<'a, Self> {
        Owned::from((self.generator)(*cursor))
    }
}

impl<F, T> ForwardRange for Generate<F> where F: Fn(usize) -> T {}

impl<F, T> SizedRange for Generate<F>
where
    F: Fn(usize) -> T,
{
    #[inline(always)]
    fn size(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::relocate;
    use crate::reference::{kind_of, ReferenceKind};

    #[test]
    fn test_generate() {
        let mut range = Generate::new(4, |x: usize| x * x);
        assert_eq!(range.size(), 4);
        assert_eq!(*range.count(), 4);

        let cursor = range.begin();
        assert_eq!(kind_of(&range.read(&cursor)), ReferenceKind::Value);
        assert_eq!(kind_of(&range.iter_move(&cursor)), ReferenceKind::Value);

        assert_eq!(relocate(range), vec![0, 1, 4, 9]);
        assert_eq!(relocate(Generate::new(0, |x: usize| x)), Vec::<usize>::new());
    }
}

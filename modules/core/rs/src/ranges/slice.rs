use derive_more::From;
use eyre::{ensure, Result};

use crate::kind;
use crate::range::{ForwardRange, Range, SizedRange};

/// Range owning its elements. Reads hand out exclusive borrows.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, From)]
pub struct OwningView<T> {
    items: Vec<T>,
}

impl<T> OwningView<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Range for OwningView<T> {
    type Value = T;
    type Cursor = usize;
    type Kind = kind::Exclusive;
    type Reference<'a>
        = &'a mut T
    where
        Self: 'a;

    #[inline(always)]
    fn begin(&mut self) -> usize {
        0
    }

    #[inline(always)]
    fn end(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    fn next(&mut self, cursor: &mut usize) {
        *cursor += 1;
    }

    #[inline(always)]
    fn read<'a>(&'a mut self, cursor: &usize) -> &'a mut T {
        &mut self.items[*cursor]
    }
}

impl<T> ForwardRange for OwningView<T> {}

impl<T> SizedRange for OwningView<T> {
    #[inline(always)]
    fn size(&self) -> usize {
        self.items.len()
    }
}

/// Range exclusively borrowing elements of a container owned by someone else.
#[derive(PartialEq, Eq, Hash, Debug, From)]
pub struct RefView<'s, T> {
    items: &'s mut [T],
}

impl<'s, T> RefView<'s, T> {
    /// View over the half-open region [start, end) of `items`.
    pub fn subrange(items: &'s mut [T], start: usize, end: usize) -> Result<Self> {
        ensure!(
            start <= end,
            "Invalid subrange: start ({start}) is greater than end ({end})"
        );
        ensure!(
            end <= items.len(),
            "Invalid subrange: end ({end}) is out of bounds for {} elements",
            items.len()
        );
        Ok(Self {
            items: &mut items[start..end],
        })
    }

    pub fn items(&self) -> &[T] {
        &*self.items
    }
}

impl<T> Range for RefView<'_, T> {
    type Value = T;
    type Cursor = usize;
    type Kind = kind::Exclusive;
    type Reference<'a>
        = &'a mut T
    where
        Self: 'a;

    #[inline(always)]
    fn begin(&mut self) -> usize {
        0
    }

    #[inline(always)]
    fn end(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    fn next(&mut self, cursor: &mut usize) {
        *cursor += 1;
    }

    #[inline(always)]
    fn read<'a>(&'a mut self, cursor: &usize) -> &'a mut T {
        &mut self.items[*cursor]
    }
}

impl<T> ForwardRange for RefView<'_, T> {}

impl<T> SizedRange for RefView<'_, T> {
    #[inline(always)]
    fn size(&self) -> usize {
        self.items.len()
    }
}

/// Range sharing elements of a container owned by someone else. Reads hand out shared borrows.
#[derive(PartialEq, Eq, Hash, Debug, From)]
pub struct SharedView<'s, T> {
    items: &'s [T],
}

impl<T> Clone for SharedView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SharedView<'_, T> {}

impl<'s, T> SharedView<'s, T> {
    pub fn items(&self) -> &'s [T] {
        self.items
    }
}

impl<T> Range for SharedView<'_, T> {
    type Value = T;
    type Cursor = usize;
    type Kind = kind::Shared;
    type Reference<'a>
        = &'a T
    where
        Self: 'a;

    #[inline(always)]
    fn begin(&mut self) -> usize {
        0
    }

    #[inline(always)]
    fn end(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    fn next(&mut self, cursor: &mut usize) {
        *cursor += 1;
    }

    #[inline(always)]
    fn read<'a>(&'a mut self, cursor: &usize) -> &'a T {
        &self.items[*cursor]
    }
}

impl<T> ForwardRange for SharedView<'_, T> {}

impl<T> SizedRange for SharedView<'_, T> {
    #[inline(always)]
    fn size(&self) -> usize {
        self.items.len()
    }
}

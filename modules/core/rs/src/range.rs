use impl_tools::autoimpl;

use crate::kind::{Kind, Store};
use crate::ranges::{OwningView, RefView, SharedView};
use crate::reference::Reference;

/// Single-pass sequence producer driven through an external cursor.
///
/// The range owns the cursor protocol: cursors are created by [`Range::begin`], moved forward by
/// [`Range::next`] and dereferenced by [`Range::read`]. A cursor is only meaningful for the range
/// that produced it. Reading at the end cursor breaks the range contract, and the outcome is
/// whatever the range does in that case (slice-backed ranges panic).
#[autoimpl(for <T: trait + ?Sized> &mut T)]
pub trait Range {
    /// Element type of the sequence.
    type Value;

    /// Position within the sequence.
    type Cursor: PartialEq;

    /// Kind of every reference handed out by [`Range::read`].
    type Kind: Kind;

    /// What [`Range::read`] hands out.
    type Reference<'a>: Reference<Target = Self::Value, Kind = Self::Kind>
    where
        Self: 'a;

    fn begin(&mut self) -> Self::Cursor;

    fn end(&self) -> Self::Cursor;

    fn next(&mut self, cursor: &mut Self::Cursor);

    fn read<'a>(&'a mut self, cursor: &Self::Cursor) -> Self::Reference<'a>;

    /// Transfer-capable access. Ranges that know a better way to hand out transferable references
    /// override it, the rest recast the result of [`Range::read`].
    fn iter_move<'a>(
        &'a mut self,
        cursor: &Self::Cursor,
    ) -> <Self::Reference<'a> as Reference>::Transfer {
        self.read(cursor).into_transfer()
    }

    #[inline(always)]
    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        *cursor == self.end()
    }
}

/// Reference produced by [`Range::iter_move`].
pub type Transferred<'a, R> = <<R as Range>::Reference<'a> as Reference>::Transfer;

/// Range that can be traversed any number of times, each traversal observing the same elements.
pub trait ForwardRange: Range<Cursor: Clone> {}

/// Range that knows its number of elements without traversing it.
#[allow(clippy::len_without_is_empty)]
#[autoimpl(for <T: trait + ?Sized> &mut T)]
pub trait SizedRange: Range {
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<R: ForwardRange + ?Sized> ForwardRange for &mut R {}

/// Conversion into a [`Range`] that views can hold by value.
///
/// Temporary containers are moved into an owning range, borrowed containers become borrowing
/// handles and ranges are passed through untouched.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an input `Range`",
    label = "expected a range or a container that can be viewed as one",
    note = "views accept `Vec<T>`, `&Vec<T>`, `&mut Vec<T>`, slices, arrays and any type implementing `Range`"
)]
pub trait IntoRange {
    type Range: Range;

    fn into_range(self) -> Self::Range;
}

impl<R: Range> IntoRange for R {
    type Range = R;

    #[inline(always)]
    fn into_range(self) -> R {
        self
    }
}

impl<T> IntoRange for Vec<T> {
    type Range = OwningView<T>;

    fn into_range(self) -> Self::Range {
        OwningView::from(self)
    }
}

impl<'s, T> IntoRange for &'s mut Vec<T> {
    type Range = RefView<'s, T>;

    fn into_range(self) -> Self::Range {
        RefView::from(self.as_mut_slice())
    }
}

impl<'s, T> IntoRange for &'s mut [T] {
    type Range = RefView<'s, T>;

    fn into_range(self) -> Self::Range {
        RefView::from(self)
    }
}

impl<'s, T, const N: usize> IntoRange for &'s mut [T; N] {
    type Range = RefView<'s, T>;

    fn into_range(self) -> Self::Range {
        RefView::from(self.as_mut_slice())
    }
}

impl<'s, T> IntoRange for &'s Vec<T> {
    type Range = SharedView<'s, T>;

    fn into_range(self) -> Self::Range {
        SharedView::from(self.as_slice())
    }
}

impl<'s, T> IntoRange for &'s [T] {
    type Range = SharedView<'s, T>;

    fn into_range(self) -> Self::Range {
        SharedView::from(self)
    }
}

impl<'s, T, const N: usize> IntoRange for &'s [T; N] {
    type Range = SharedView<'s, T>;

    fn into_range(self) -> Self::Range {
        SharedView::from(self.as_slice())
    }
}

/// Number of steps from the beginning of the range to its end.
pub fn distance(input: impl IntoRange) -> usize {
    let mut range = input.into_range();
    let mut cursor = range.begin();
    let mut steps = 0;
    while !range.is_end(&cursor) {
        range.next(&mut cursor);
        steps += 1;
    }
    steps
}

/// Store every element of the range into `saveto`, returning the number of stored elements.
///
/// Each element is moved when the range hands out transferable references or values and copied
/// otherwise, see [`Store`]. Moving needs `Default` for the relocated-from state, copying needs
/// `Clone`.
pub fn relocate_into<I>(input: I, saveto: &mut Vec<<I::Range as Range>::Value>) -> usize
where
    I: IntoRange,
    <I::Range as Range>::Value: Store<<I::Range as Range>::Kind>,
{
    let mut range = input.into_range();
    let mut cursor = range.begin();
    let mut stored = 0;
    while !range.is_end(&cursor) {
        saveto.push(range.read(&cursor).store());
        range.next(&mut cursor);
        stored += 1;
    }
    stored
}

/// Same as [`relocate_into`], but collects into a fresh vector.
pub fn relocate<I>(input: I) -> Vec<<I::Range as Range>::Value>
where
    I: IntoRange,
    <I::Range as Range>::Value: Store<<I::Range as Range>::Kind>,
{
    let mut saveto = Vec::new();
    relocate_into(input, &mut saveto);
    saveto
}

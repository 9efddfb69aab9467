use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::kind::Kind;
use crate::range::{ForwardRange, Range, SizedRange, Transferred};
use crate::reference::Reference;

/// Access policy of a [`ViewAdaptor`].
///
/// A concrete view only decides what reading at a cursor of the adapted range means. Cursor
/// plumbing (begin, end, next) always goes straight to the adapted range.
pub trait Adaptor<R: Range> {
    type Kind: Kind;

    /// What reads through the adaptor hand out.
    type Reference<'a>: Reference<Target = R::Value, Kind = Self::Kind>
    where
        R: 'a;

    fn read<'a>(&self, base: &'a mut R, cursor: &R::Cursor) -> Self::Reference<'a>;

    /// Transfer-capable access used by consumers going through [`Range::iter_move`].
    fn indirect_move<'a>(
        &self,
        base: &'a mut R,
        cursor: &R::Cursor,
    ) -> <Self::Reference<'a> as Reference>::Transfer {
        self.read(base, cursor).into_transfer()
    }

    #[inline(always)]
    fn size(&self, base: &R) -> usize
    where
        R: SizedRange,
    {
        base.size()
    }
}

/// Range adapting another range through an access policy.
///
/// The view is `Clone`, `Copy` or `Default` whenever both the adapted range and the policy are, and
/// forwards the [`ForwardRange`] and [`SizedRange`] capabilities of the adapted range.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Constructor, Dissolve, Getters)]
pub struct ViewAdaptor<R, P> {
    base: R,
    policy: P,
}

impl<R, P: Default> ViewAdaptor<R, P> {
    /// Adapt `base` with the default-constructed policy.
    pub fn adapt(base: R) -> Self {
        Self {
            base,
            policy: P::default(),
        }
    }
}

impl<R, P> ViewAdaptor<R, P> {
    pub fn into_base(self) -> R {
        self.base
    }
}

impl<R: Range, P: Adaptor<R>> Range for ViewAdaptor<R, P> {
    type Value = R::Value;
    type Cursor = R::Cursor;
    type Kind = P::Kind;
    type Reference<'a>
        = P::Reference<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn begin(&mut self) -> Self::Cursor {
        self.base.begin()
    }

    #[inline(always)]
    fn end(&self) -> Self::Cursor {
        self.base.end()
    }

    #[inline(always)]
    fn next(&mut self, cursor: &mut Self::Cursor) {
        self.base.next(cursor)
    }

    #[inline(always)]
    fn read<'a>(&'a mut self, cursor: &Self::Cursor) -> Self::Reference<'a> {
        self.policy.read(&mut self.base, cursor)
    }

    #[inline(always)]
    fn iter_move<'a>(&'a mut self, cursor: &Self::Cursor) -> Transferred<'a, Self> {
        self.policy.indirect_move(&mut self.base, cursor)
    }

    #[inline(always)]
    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        self.base.is_end(cursor)
    }
}

impl<R: ForwardRange, P: Adaptor<R>> ForwardRange for ViewAdaptor<R, P> {}

impl<R: SizedRange, P: Adaptor<R>> SizedRange for ViewAdaptor<R, P> {
    #[inline(always)]
    fn size(&self) -> usize {
        self.policy.size(&self.base)
    }
}

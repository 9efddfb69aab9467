use rangeview_core_rs::{Adaptor, Kind, Range, Reference, Transferred, ViewAdaptor};

/// Access policy of [`MoveView`].
///
/// Both access hooks go through the transfer-capable access of the adapted range
/// ([`Range::iter_move`]), which falls back to recasting the ordinary reference when the range
/// doesn't provide its own.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct MoveAdaptor;

impl<R: Range> Adaptor<R> for MoveAdaptor {
    type Kind = <R::Kind as Kind>::Transfer;
    type Reference<'a>
        = Transferred<'a, R>
    where
        R: 'a;

    #[inline(always)]
    fn read<'a>(&self, base: &'a mut R, cursor: &R::Cursor) -> Self::Reference<'a> {
        base.iter_move(cursor)
    }

    // Must stay identical to `read`, some consumers only ever go through this hook.
    #[inline(always)]
    fn indirect_move<'a>(
        &self,
        base: &'a mut R,
        cursor: &R::Cursor,
    ) -> <Self::Reference<'a> as Reference>::Transfer {
        base.iter_move(cursor).into_transfer()
    }
}

/// View of a range whose reads hand out transferable references instead of borrows.
///
/// The view holds nothing but the adapted range and never touches the elements. An element is
/// relocated only when the receiver of the reference moves it out, leaving the relocated-from
/// state behind in the adapted range. The view is sized exactly when the adapted range is.
pub type MoveView<R> = ViewAdaptor<R, MoveAdaptor>;

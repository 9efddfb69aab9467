//! Type-level reference kinds.
//!
//! Every [`Reference`](crate::Reference) and every [`Range`](crate::Range) names one of the markers
//! below. Views compute the kind they hand out from the kind of the adapted range, and consumers
//! bound on [`Store`] to find out what storing an element of that kind requires.

use std::mem;

use crate::reference::ReferenceKind;

pub trait Kind {
    const KIND: ReferenceKind;

    /// Kind of the reference after it was recast as transferable.
    type Transfer: Kind;

    /// What storing a reference of this kind reads from.
    type Source<'r, T: 'r>;
}

/// Shared borrow, see [`ReferenceKind::Shared`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Shared;

/// Exclusive borrow, see [`ReferenceKind::Exclusive`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Exclusive;

/// Transferable borrow, see [`ReferenceKind::Transfer`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Transfer;

/// Produced value, see [`ReferenceKind::Value`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Value;

impl Kind for Shared {
    const KIND: ReferenceKind = ReferenceKind::Shared;
    type Transfer = Shared;
    type Source<'r, T: 'r> = &'r T;
}

impl Kind for Exclusive {
    const KIND: ReferenceKind = ReferenceKind::Exclusive;
    type Transfer = Transfer;
    type Source<'r, T: 'r> = &'r T;
}

impl Kind for Transfer {
    const KIND: ReferenceKind = ReferenceKind::Transfer;
    type Transfer = Transfer;
    type Source<'r, T: 'r> = &'r mut T;
}

impl Kind for Value {
    const KIND: ReferenceKind = ReferenceKind::Value;
    type Transfer = Value;
    type Source<'r, T: 'r> = T;
}

/// Elements that can be put into a new owner from a reference of kind `K`.
///
/// Borrows copy, so storing from them needs `Clone`. Transfers relocate and leave
/// `Default::default()` behind. Produced values are moved as is and need nothing.
pub trait Store<K: Kind>: Sized {
    fn store_from<'r>(source: K::Source<'r, Self>) -> Self
    where
        Self: 'r;
}

impl<T: Clone> Store<Shared> for T {
    #[inline(always)]
    fn store_from<'r>(source: &'r T) -> T
    where
        T: 'r,
    {
        source.clone()
    }
}

impl<T: Clone> Store<Exclusive> for T {
    #[inline(always)]
    fn store_from<'r>(source: &'r T) -> T
    where
        T: 'r,
    {
        source.clone()
    }
}

impl<T: Default> Store<Transfer> for T {
    #[inline(always)]
    fn store_from<'r>(source: &'r mut T) -> T
    where
        T: 'r,
    {
        mem::take(source)
    }
}

impl<T> Store<Value> for T {
    #[inline(always)]
    fn store_from<'r>(source: T) -> T
    where
        T: 'r,
    {
        source
    }
}

use std::mem;
use std::ops::{Deref, DerefMut};

use derive_more::From;
use impl_tools::autoimpl;

use crate::kind::{self, Kind, Store};

/// Category of the reference a range read hands out.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum ReferenceKind {
    /// Shared borrow, the element can only be copied out.
    Shared,
    /// Exclusive borrow, the element can be modified but not relocated.
    Exclusive,
    /// Transferable borrow, the receiver may relocate the element.
    Transfer,
    /// Produced value, owned by the receiver.
    Value,
}

/// Trait for everything a range read can return.
///
/// The reference kind is fixed by the implementing type, so views compute the kind they hand out
/// once, as an associated type, and never per call.
pub trait Reference: Sized {
    /// Element the reference points to.
    type Target;

    type Kind: Kind;

    /// Transferable counterpart of this reference.
    type Transfer: Reference<Target = Self::Target, Kind = <Self::Kind as Kind>::Transfer>;

    /// Shared access to the referenced element.
    fn get(&self) -> &Self::Target;

    /// Recast the reference as transferable.
    fn into_transfer(self) -> Self::Transfer;

    /// Store the referenced element into a new owner.
    /// Transferable references and values are moved, everything else is copied, see [`Store`].
    fn store(self) -> Self::Target
    where
        Self::Target: Store<Self::Kind>;
}

impl<'a, T> Reference for &'a T {
    type Target = T;
    type Kind = kind::Shared;
    // A shared borrow can't be relocated from, the recast keeps it as is.
    type Transfer = &'a T;

    #[inline(always)]
    fn get(&self) -> &T {
        self
    }

    #[inline(always)]
    fn into_transfer(self) -> Self::Transfer {
        self
    }

    #[inline(always)]
    fn store(self) -> T
    where
        T: Store<kind::Shared>,
    {
        <T as Store<kind::Shared>>::store_from(self)
    }
}

impl<'a, T> Reference for &'a mut T {
    type Target = T;
    type Kind = kind::Exclusive;
    type Transfer = Transfer<'a, T>;

    #[inline(always)]
    fn get(&self) -> &T {
        self
    }

    #[inline(always)]
    fn into_transfer(self) -> Self::Transfer {
        Transfer(self)
    }

    #[inline(always)]
    fn store(self) -> T
    where
        T: Store<kind::Exclusive>,
    {
        <T as Store<kind::Exclusive>>::store_from(&*self)
    }
}

/// Transferable reference to an element living inside a range.
///
/// Obtaining a `Transfer` doesn't touch the element. It is relocated only when the receiver calls
/// [`Transfer::take`], [`Transfer::replace`] or [`Reference::store`], which leave the
/// relocated-from slot in a valid state (`Default::default()` or the replacement).
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Transfer<'a, T>(&'a mut T);

impl<'a, T> Transfer<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self(target)
    }

    /// Relocate the element, leaving `Default::default()` behind.
    pub fn take(self) -> T
    where
        T: Default,
    {
        mem::take(self.0)
    }

    /// Relocate the element, leaving `value` behind.
    pub fn replace(self, value: T) -> T {
        mem::replace(self.0, value)
    }

    /// Give up the transfer and use the element in place.
    pub fn into_mut(self) -> &'a mut T {
        self.0
    }
}

impl<T> Deref for Transfer<'_, T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &*self.0
    }
}

impl<T> DerefMut for Transfer<'_, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.0
    }
}

impl<T> Reference for Transfer<'_, T> {
    type Target = T;
    type Kind = kind::Transfer;
    type Transfer = Self;

    #[inline(always)]
    fn get(&self) -> &T {
        &*self.0
    }

    #[inline(always)]
    fn into_transfer(self) -> Self::Transfer {
        self
    }

    #[inline(always)]
    fn store(self) -> T
    where
        T: Store<kind::Transfer>,
    {
        <T as Store<kind::Transfer>>::store_from(self.0)
    }
}

/// Value produced on demand by a range that has no storage to borrow from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, From)]
#[autoimpl(Deref, DerefMut using self.0)]
pub struct Owned<T>(T);

impl<T> Owned<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Reference for Owned<T> {
    type Target = T;
    type Kind = kind::Value;
    type Transfer = Self;

    #[inline(always)]
    fn get(&self) -> &T {
        &self.0
    }

    #[inline(always)]
    fn into_transfer(self) -> Self::Transfer {
        self
    }

    #[inline(always)]
    fn store(self) -> T
    where
        T: Store<kind::Value>,
    {
        <T as Store<kind::Value>>::store_from(self.0)
    }
}

/// Kind of the reference `value` is, handy when the type can't be named.
pub fn kind_of<R: Reference>(_: &R) -> ReferenceKind {
    <R::Kind as Kind>::KIND
}

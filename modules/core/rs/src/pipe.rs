use derive_getters::Dissolve;
use derive_more::Constructor;

/// Adaptor object turning an input into a view.
///
/// Plain functions and closures are adaptor objects as well, so `view::move_` works both as
/// `view::move_(input)` and as `input.pipe(view::move_)`.
pub trait ViewFn<I> {
    type Output;

    fn apply(&self, input: I) -> Self::Output;
}

impl<I, O, F> ViewFn<I> for F
where
    F: Fn(I) -> O,
{
    type Output = O;

    #[inline(always)]
    fn apply(&self, input: I) -> O {
        self(input)
    }
}

/// Two adaptors applied one after another, `first` then `second`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Constructor, Dissolve)]
pub struct Composed<A, B> {
    first: A,
    second: B,
}

impl<I, A, B> ViewFn<I> for Composed<A, B>
where
    A: ViewFn<I>,
    B: ViewFn<A::Output>,
{
    type Output = B::Output;

    #[inline(always)]
    fn apply(&self, input: I) -> B::Output {
        self.second.apply(self.first.apply(input))
    }
}

/// Pipe-style application of adaptor objects: `input.pipe(adaptor)` is `adaptor.apply(input)`.
pub trait Pipe: Sized {
    #[inline(always)]
    fn pipe<F: ViewFn<Self>>(self, adaptor: F) -> F::Output {
        adaptor.apply(self)
    }
}

impl<T> Pipe for T {}

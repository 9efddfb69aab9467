use rangeview_core_rs::{IntoRange, ViewFn};

use crate::MoveView;

/// View of `input` whose reads hand out transferable references.
///
/// Temporary containers are moved into the view, borrowed ones are referenced. The function can be
/// called directly or used as the right-hand side of [`Pipe::pipe`](rangeview_core_rs::Pipe::pipe),
/// both forms build the same view.
///
/// ```
/// use rangeview_core_rs::{Pipe, Range, SizedRange};
/// use rangeview_views_rs::view;
///
/// let mut words = vec![String::from("a"), String::from("bb")];
/// let mut moved = (&mut words).pipe(view::move_);
/// assert_eq!(moved.size(), 2);
///
/// let cursor = moved.begin();
/// assert_eq!(moved.read(&cursor).take(), "a");
/// assert_eq!(words, ["", "bb"]);
/// ```
///
/// Inputs that aren't ranges are rejected at compile time:
///
/// ```compile_fail
/// use rangeview_views_rs::view;
///
/// view::move_(42u32);
/// ```
///
/// And so is asking an unsized view for its size:
///
/// ```compile_fail
/// use rangeview_core_rs::ranges::Pull;
/// use rangeview_core_rs::SizedRange;
/// use rangeview_views_rs::view;
///
/// view::move_(Pull::new(0..3)).size();
/// ```
pub fn move_<I: IntoRange>(input: I) -> MoveView<I::Range> {
    log::trace!("view::move_ over {}", std::any::type_name::<I::Range>());
    MoveView::adapt(input.into_range())
}

/// Adaptor object building [`MoveView`]s, see [`move_`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct MoveFn;

impl<I: IntoRange> ViewFn<I> for MoveFn {
    type Output = MoveView<I::Range>;

    #[inline(always)]
    fn apply(&self, input: I) -> Self::Output {
        move_(input)
    }
}

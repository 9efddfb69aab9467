use eyre::Result;

use rangeview_core_rs::kind;
use rangeview_core_rs::range::{distance, relocate};
use rangeview_core_rs::ranges::{Generate, OwningView, Pull, RefView};
use rangeview_core_rs::reference::kind_of;
use rangeview_core_rs::{
    Adaptor, ForwardRange, IntoRange, Owned, Pipe, Range, Reference, ReferenceKind, SizedRange,
    ViewAdaptor,
};

/// Policy clamping every read value from above, handing out produced values.
#[derive(Copy, Clone, Default)]
struct Clamped;

impl<R> Adaptor<R> for Clamped
where
    R: Range,
    R::Value: Ord + Copy + From<u8>,
{
    type Kind = kind::Value;
    type Reference<'a>
        = Owned<R::Value>
    where
        R: 'a;

    fn read<'a>(&self, base: &'a mut R, cursor: &R::Cursor) -> Self::Reference<'a> {
        let value = *base.read(cursor).get();
        value.min(R::Value::from(10)).into()
    }
}

fn clamped<T>(input: Vec<T>) -> ViewAdaptor<OwningView<T>, Clamped> {
    ViewAdaptor::adapt(input.into_range())
}

#[test]
fn custom_policy_over_owned_range() {
    let mut view = clamped(vec![1u32, 20, 3, 40]);
    assert_eq!(view.size(), 4);
    assert_eq!(distance(&mut view), 4);

    let cursor = view.begin();
    assert_eq!(kind_of(&view.read(&cursor)), ReferenceKind::Value);
    assert_eq!(kind_of(&view.iter_move(&cursor)), ReferenceKind::Value);
    assert_eq!(relocate(&mut view), [1, 10, 3, 10]);

    // Reads produce values, the adapted range is never modified
    assert_eq!(view.into_base().into_inner(), [1, 20, 3, 40]);
}

#[test]
fn custom_policy_composes_with_pipe() -> Result<()> {
    let mut items = [5u8, 50, 15, 1];
    let clamped = RefView::subrange(&mut items, 1, 3)?.pipe(ViewAdaptor::<_, Clamped>::adapt);
    assert_eq!(clamped.size(), 2);
    assert_eq!(relocate(clamped), [10, 10]);
    assert_eq!(items, [5, 50, 15, 1]);
    Ok(())
}

#[test]
fn single_pass_range_is_consumed() {
    let mut range = Pull::new(vec![3, 1, 2]);
    assert_eq!(relocate(&mut range), [3, 1, 2]);

    // The second traversal starts where the first one stopped
    assert_eq!(distance(&mut range), 0);
    assert!(relocate(range).is_empty());
}

#[test]
fn forward_ranges_can_be_traversed_twice() {
    fn twice<R: ForwardRange>(mut range: R) -> (usize, usize) {
        let first = range.begin();
        let mut cursor = first.clone();
        let mut steps = 0;
        while !range.is_end(&cursor) {
            range.next(&mut cursor);
            steps += 1;
        }

        let mut cursor = first;
        let mut again = 0;
        while !range.is_end(&cursor) {
            range.next(&mut cursor);
            again += 1;
        }
        (steps, again)
    }

    assert_eq!(twice(Generate::new(4, |x: usize| x * x)), (4, 4));
    assert_eq!(twice(vec![1, 2].into_range()), (2, 2));
    assert_eq!(twice(ViewAdaptor::<_, Clamped>::adapt(vec![7u8].into_range())), (1, 1));
}

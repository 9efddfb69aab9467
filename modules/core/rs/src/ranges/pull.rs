use crate::kind;
use crate::range::Range;

/// Position within a [`Pull`] range.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PullCursor {
    Active,
    Exhausted,
}

/// Single-pass range pulling elements from an iterator.
///
/// The current element is cached inside the range, so only one cursor can be live at a time and the
/// range has no notion of its size. `begin` starts the traversal on its first call and returns the
/// current position afterwards.
#[derive(Clone, Debug)]
pub struct Pull<I: Iterator> {
    iterator: I,
    current: Option<I::Item>,
    started: bool,
}

impl<I: Iterator> Pull<I> {
    pub fn new(iterator: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iterator: iterator.into_iter(),
            current: None,
            started: false,
        }
    }

    fn position(&self) -> PullCursor {
        match self.current {
            Some(_) => PullCursor::Active,
            None => PullCursor::Exhausted,
        }
    }
}

impl<I: Iterator> Range for Pull<I> {
    type Value = I::Item;
    type Cursor = PullCursor;
    type Kind = kind::Exclusive;
    type Reference<'a>
        = &'a mut I::Item
    where
        Self: 'a;

    fn begin(&mut self) -> PullCursor {
        if !self.started {
            self.started = true;
            self.current = self.iterator.next();
        }
        self.position()
    }

    #[inline(always)]
    fn end(&self) -> PullCursor {
        PullCursor::Exhausted
    }

    fn next(&mut self, cursor: &mut PullCursor) {
        self.current = self.iterator.next();
        *cursor = self.position();
    }

    fn read<'a>(&'a mut self, _: &PullCursor) -> &'a mut I::Item {
        match self.current.as_mut() {
            Some(item) => item,
            None => panic!("Attempted to read past the end of a Pull range"),
        }
    }
}

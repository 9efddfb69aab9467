pub use generate::Generate;
pub use pull::{Pull, PullCursor};
pub use slice::{OwningView, RefView, SharedView};

mod generate;
mod pull;
mod slice;

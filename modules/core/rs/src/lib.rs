pub use adaptor::{Adaptor, ViewAdaptor};
pub use kind::{Kind, Store};
pub use pipe::{Composed, Pipe, ViewFn};
pub use range::{ForwardRange, IntoRange, Range, SizedRange, Transferred};
pub use reference::{Owned, Reference, ReferenceKind, Transfer};

mod adaptor;
pub mod kind;
mod pipe;
pub mod range;
pub mod ranges;
pub mod reference;

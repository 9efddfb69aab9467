#![doc = include_str!("../../../../README.md")]

pub use move_view::{MoveAdaptor, MoveView};

mod move_view;
pub mod view;

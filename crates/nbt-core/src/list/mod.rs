pub mod element;
pub mod list;
mod literal;

pub use element::{ElementMut, IterMut};
pub use list::TagList;

pub mod emulator;
pub mod primitives;
pub mod selector;

pub use selector::{LargestFirst, Selection, SelectionError, Selector, select};

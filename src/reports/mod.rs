pub mod grid;
pub mod tables;

pub use grid::{print_frame, print_layout};
pub use tables::{print_attributes, print_roles};

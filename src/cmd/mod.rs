pub mod emit;
pub mod inspect;
pub mod layout;
pub mod preview;

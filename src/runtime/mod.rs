//! Executable model of the embedded widget runtime.
//!
//! The emitted script (`assets/kbd-mini.js`) and this module implement the same
//! state machines. This side is driven by tests with fake stores and fixed
//! window sizes, and by the `preview` command.

pub mod animation;
pub mod drag;
pub mod minimize;
pub mod store;
pub mod widget;

pub use animation::{Animator, Frame};
pub use drag::{DragMachine, DragState, Modifiers, PointerDown};
pub use minimize::MinimizeState;
pub use store::{FailingStore, KeyValueStore, MemoryStore, SavedCoords, StorageKeys, StoreError};
pub use widget::{HostEnv, MountOptions, Widget};

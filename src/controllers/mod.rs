pub mod input;

pub use input::{InputEvent, InputState, KeyCode, PointerTracker, Selection};

//! Input model shared by the front end and the keybinding adapter.

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key};

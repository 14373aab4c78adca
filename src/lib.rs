//! thread-composer: a multi-block text composer.
//!
//! Layout:
//! - core: input model (Key, Command)
//! - kernel: block-list store, gesture debouncing, focus routing, services
//! - tui: terminal front end (editing surfaces, rendering)

pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;

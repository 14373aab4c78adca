//! Terminal front end (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the block-list core has no terminal
//! dependency of its own.

pub mod composer;
pub mod render;
pub mod surface;
pub mod terminal_guard;

pub use composer::Composer;
pub use surface::{BlockSurface, SurfaceArena, SurfaceKey};

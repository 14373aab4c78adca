//! Headless composer core (state/action/focus).

pub mod action;
pub mod block;
pub mod effect;
pub mod focus;
pub mod gesture;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use block::{AuthorTemplate, Block, BlockId};
pub use effect::{FocusIntent, FocusPosition};
pub use focus::{FocusRouter, HandleRegistry, RouteOutcome, SurfaceHost};
pub use gesture::{Activation, GestureDebouncer, SubjectPolicy};
pub use state::ThreadState;
pub use store::{DispatchResult, Store};

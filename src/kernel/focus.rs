//! Focus routing after structural changes.
//!
//! The store only describes where focus should go ([`FocusIntent`]). The
//! router turns that into a command against the editing surface registered
//! for the block, waiting at most one scheduling turn for the surface to
//! mount.

use super::block::BlockId;
use super::effect::{FocusIntent, FocusPosition};
use rustc_hash::FxHashMap;

/// Receiver of surface commands, addressed by opaque handle.
pub trait SurfaceHost {
    type Handle: Copy + Eq + std::fmt::Debug;

    fn focus(&mut self, handle: Self::Handle, position: FocusPosition);

    fn select_all_content(&mut self, handle: Self::Handle);
}

/// Live block id → surface handle mapping, fed by mount/unmount notifications.
#[derive(Debug, Clone)]
pub struct HandleRegistry<H> {
    handles: FxHashMap<BlockId, H>,
}

impl<H: Copy> HandleRegistry<H> {
    pub fn new() -> Self {
        Self {
            handles: FxHashMap::default(),
        }
    }

    pub fn mounted(&mut self, block: BlockId, handle: H) {
        self.handles.insert(block, handle);
    }

    pub fn unmounted(&mut self, block: BlockId) -> Option<H> {
        self.handles.remove(&block)
    }

    pub fn get(&self, block: BlockId) -> Option<H> {
        self.handles.get(&block).copied()
    }

    pub fn contains(&self, block: BlockId) -> bool {
        self.handles.contains_key(&block)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockId, H)> + '_ {
        self.handles.iter().map(|(id, h)| (*id, *h))
    }
}

impl<H: Copy> Default for HandleRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Nothing to do: no intent, or the surface focuses itself on mount.
    Idle,
    Focused(BlockId),
    /// Handle missing; parked until the next turn.
    Deferred(BlockId),
    /// Handle still missing on the retry; command dropped.
    Dropped(BlockId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingFocus {
    block: BlockId,
    position: FocusPosition,
}

#[derive(Debug, Default)]
pub struct FocusRouter {
    pending: Option<PendingFocus>,
}

impl FocusRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<S: SurfaceHost>(
        &mut self,
        intent: Option<FocusIntent>,
        registry: &HandleRegistry<S::Handle>,
        host: &mut S,
    ) -> RouteOutcome {
        let Some(intent) = intent else {
            return RouteOutcome::Idle;
        };

        // A newer intent replaces whatever was still waiting.
        self.pending = None;

        let (block, position) = match intent {
            FocusIntent::Mount(block) => {
                tracing::trace!(%block, "focus left to mount autofocus");
                return RouteOutcome::Idle;
            }
            FocusIntent::Existing { block, position } => (block, position),
        };

        match registry.get(block) {
            Some(handle) => {
                host.focus(handle, position);
                tracing::trace!(%block, ?position, "focus routed");
                RouteOutcome::Focused(block)
            }
            None => {
                self.pending = Some(PendingFocus { block, position });
                tracing::trace!(%block, "focus deferred, surface not mounted");
                RouteOutcome::Deferred(block)
            }
        }
    }

    /// Next scheduling turn: retry a parked command once.
    pub fn turn<S: SurfaceHost>(
        &mut self,
        registry: &HandleRegistry<S::Handle>,
        host: &mut S,
    ) -> RouteOutcome {
        let Some(pending) = self.pending.take() else {
            return RouteOutcome::Idle;
        };

        match registry.get(pending.block) {
            Some(handle) => {
                host.focus(handle, pending.position);
                tracing::trace!(block = %pending.block, "deferred focus routed");
                RouteOutcome::Focused(pending.block)
            }
            None => {
                tracing::trace!(block = %pending.block, "deferred focus dropped");
                RouteOutcome::Dropped(pending.block)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/focus.rs"]
mod tests;

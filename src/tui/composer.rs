//! Composer: wires key input, the block-list store, surfaces and focus routing.
//!
//! One input event is handled to completion per call:
//! 1. key → command (keybindings);
//! 2. gestures go to the store first, plain edits go to the focused surface;
//! 3. the store's focus intent is routed against the current handles;
//! 4. surfaces are reconciled with the block list (mount/unmount);
//! 5. the router gets its deferred turn, then the selection is mirrored.

use std::time::Instant;

use rustc_hash::FxHashSet;

use super::surface::{BlockSurface, SurfaceArena, SurfaceKey};
use crate::core::event::{InputEvent, Key, KeyEvent, KeyEventKind};
use crate::core::Command;
use crate::kernel::services::adapters::{ConfigService, KeybindingService};
use crate::kernel::services::ports::ComposerConfig;
use crate::kernel::{
    Action, AuthorTemplate, BlockId, DispatchResult, FocusIntent, FocusPosition, FocusRouter,
    HandleRegistry, RouteOutcome, Store, SurfaceHost,
};

pub struct Composer {
    store: Store,
    surfaces: SurfaceArena,
    registry: HandleRegistry<SurfaceKey>,
    router: FocusRouter,
    keybindings: KeybindingService,
    config: ComposerConfig,
    /// Block selection as last mirrored into the surfaces.
    mirrored: FxHashSet<BlockId>,
    should_quit: bool,
}

impl Composer {
    pub fn new(config: &ConfigService, keybindings: KeybindingService) -> Self {
        let store = Store::new(config.composer(), AuthorTemplate::default());
        let mut composer = Self {
            store,
            surfaces: SurfaceArena::new(),
            registry: HandleRegistry::new(),
            router: FocusRouter::new(),
            keybindings,
            config: config.composer().clone(),
            mirrored: FxHashSet::default(),
            should_quit: false,
        };
        composer.reconcile();
        composer
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn surfaces(&self) -> &SurfaceArena {
        &self.surfaces
    }

    pub fn registry(&self) -> &HandleRegistry<SurfaceKey> {
        &self.registry
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focused_block(&self) -> Option<BlockId> {
        self.surfaces.focused_block()
    }

    /// Returns whether a redraw is needed.
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::Key(key_event) => self.handle_key(*key_event, now),
            InputEvent::Paste(text) => self.edit_focused(|surface| surface.insert_str(text)),
            InputEvent::Resize(_, _) => true,
            InputEvent::Other => false,
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent, now: Instant) -> bool {
        if event.kind == KeyEventKind::Release {
            return false;
        }
        let key = Key::from(event);
        let Some(command) = self.keybindings.resolve(&key) else {
            return false;
        };
        self.run_command(command, now)
    }

    pub fn run_command(&mut self, command: Command, now: Instant) -> bool {
        if command == Command::Quit {
            self.should_quit = true;
            return true;
        }

        let Some(block) = self.focused_block() else {
            tracing::debug!(command = command.name(), "no focused block, command ignored");
            return false;
        };

        match command {
            Command::SplitGesture => {
                let result = self.store.dispatch(Action::SplitRequested { block, now });
                let edited = !result.consumed && self.edit_focused(|s| s.insert_char('\n'));
                self.apply(result) || edited
            }
            Command::Backspace => {
                let is_empty = self.surfaces.focused_surface().is_some_and(|s| s.is_empty());
                let result = self
                    .store
                    .dispatch(Action::BackspaceRequested { block, is_empty });
                let edited = !result.consumed && self.edit_focused(|s| s.delete_backward());
                self.apply(result) || edited
            }
            Command::SelectAll => {
                let result = self.store.dispatch(Action::SelectAllRequested { block, now });
                self.apply(result)
            }
            Command::InsertChar(ch) => self.edit_focused(|s| s.insert_char(ch)),
            Command::InsertNewline => self.edit_focused(|s| s.insert_char('\n')),
            Command::CursorLeft => self.with_focused(|s| s.move_left()),
            Command::CursorRight => self.with_focused(|s| s.move_right()),
            Command::CursorLineStart => self.with_focused(|s| s.move_line_start()),
            Command::CursorLineEnd => self.with_focused(|s| s.move_line_end()),
            Command::FocusPrevBlock => self.focus_neighbor(block, -1),
            Command::FocusNextBlock => self.focus_neighbor(block, 1),
            Command::Quit => false,
        }
    }

    /// Route, reconcile, deferred turn, mirror selection.
    fn apply(&mut self, result: DispatchResult) -> bool {
        let routed = self
            .router
            .route(result.focus, &self.registry, &mut self.surfaces);
        let reconciled = if result.state_changed {
            self.reconcile()
        } else {
            false
        };
        let turned = self.router.turn(&self.registry, &mut self.surfaces);
        if matches!(turned, RouteOutcome::Dropped(_)) {
            tracing::debug!(?turned, "focus target never mounted");
        }
        self.ensure_focus();
        self.sync_selection();

        result.state_changed || reconciled || !matches!(routed, RouteOutcome::Idle)
    }

    /// Mounts surfaces for new blocks and unmounts those whose block is gone.
    fn reconcile(&mut self) -> bool {
        let mut changed = false;

        let stale: Vec<BlockId> = self
            .registry
            .iter()
            .map(|(id, _)| id)
            .filter(|id| self.store.state().block(*id).is_none())
            .collect();
        for id in stale {
            if let Some(handle) = self.registry.unmounted(id) {
                self.surfaces.unmount(handle);
                changed = true;
            }
        }

        for block in self.store.state().blocks() {
            if self.registry.contains(block.id()) {
                continue;
            }
            let handle = self.surfaces.mount(block.id(), block.content());
            self.registry.mounted(block.id(), handle);
            changed = true;
        }

        changed
    }

    /// Keeps keyboard input going somewhere when no intent claimed focus,
    /// e.g. after the first block was deleted.
    fn ensure_focus(&mut self) {
        if self.surfaces.focused().is_some() {
            return;
        }
        let Some(first) = self.store.state().blocks().first().map(|b| b.id()) else {
            return;
        };
        if let Some(handle) = self.registry.get(first) {
            self.surfaces.focus(handle, FocusPosition::Start);
        }
    }

    /// Mirrors selection changes only. Content typed over a selected block
    /// stays put until that block leaves and re-enters the selection.
    fn sync_selection(&mut self) {
        let current = self.store.state().selection();
        if *current == self.mirrored {
            return;
        }
        let entered: Vec<BlockId> = current.difference(&self.mirrored).copied().collect();
        let left: Vec<BlockId> = self.mirrored.difference(current).copied().collect();
        self.mirrored = current.clone();

        for id in entered {
            if let Some(handle) = self.registry.get(id) {
                self.surfaces.select_all_content(handle);
            }
        }
        for id in left {
            if let Some(handle) = self.registry.get(id) {
                self.surfaces.clear_content_selection(handle);
            }
        }
    }

    fn focus_neighbor(&mut self, block: BlockId, delta: isize) -> bool {
        let state = self.store.state();
        let Some(index) = state.index_of(block) else {
            return false;
        };
        let Some(target) = index
            .checked_add_signed(delta)
            .and_then(|i| state.blocks().get(i))
            .map(|b| b.id())
        else {
            return false;
        };
        let position = if delta < 0 {
            FocusPosition::End
        } else {
            FocusPosition::Start
        };
        let outcome = self.router.route(
            Some(FocusIntent::Existing {
                block: target,
                position,
            }),
            &self.registry,
            &mut self.surfaces,
        );
        // Moving the cursor collapses the visual content selection.
        if let Some(handle) = self.registry.get(target) {
            self.surfaces.clear_content_selection(handle);
        }
        matches!(outcome, RouteOutcome::Focused(_))
    }

    fn with_focused(&mut self, f: impl FnOnce(&mut BlockSurface) -> bool) -> bool {
        let Some(key) = self.surfaces.focused() else {
            return false;
        };
        match self.surfaces.get_mut(key) {
            Some(surface) => f(surface),
            None => false,
        }
    }

    /// Edits the focused surface and reports the new text to the store.
    fn edit_focused(&mut self, f: impl FnOnce(&mut BlockSurface) -> bool) -> bool {
        let Some(key) = self.surfaces.focused() else {
            return false;
        };
        let Some(surface) = self.surfaces.get_mut(key) else {
            return false;
        };
        if !f(surface) {
            return false;
        }
        let block = surface.block();
        let text = surface.text().to_string();
        self.store.dispatch(Action::ContentChanged { block, text });
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/composer.rs"]
mod tests;

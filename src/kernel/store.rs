use std::time::Instant;

use super::block::{AuthorTemplate, Block, BlockId};
use super::effect::FocusIntent;
use super::gesture::GestureDebouncer;
use super::services::ports::ComposerConfig;
use super::{Action, ThreadState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchResult {
    pub focus: Option<FocusIntent>,
    pub state_changed: bool,
    /// The key intent was handled here; the surface must skip its default.
    pub consumed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(focus: Option<FocusIntent>) -> Self {
        Self {
            focus,
            state_changed: true,
            consumed: false,
        }
    }

    fn consumed(mut self) -> Self {
        self.consumed = true;
        self
    }
}

/// Block-list controller: sole writer of the block list and the selection.
pub struct Store {
    state: ThreadState,
    author: AuthorTemplate,
    split: GestureDebouncer,
    select_all: GestureDebouncer,
}

impl Store {
    pub fn new(config: &ComposerConfig, author: AuthorTemplate) -> Self {
        let threshold = config.gesture_threshold();
        Self {
            state: ThreadState::new(&author),
            author,
            split: GestureDebouncer::split(threshold),
            select_all: GestureDebouncer::select_all(threshold),
        }
    }

    pub fn state(&self) -> &ThreadState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ContentChanged { block, text } => self.update_content(block, text),
            Action::SplitRequested { block, now } => self.split_gesture(block, now),
            Action::BackspaceRequested { block, is_empty } => {
                let is_selected = self.state.is_selected(block);
                self.backspace_gesture(block, is_empty, is_selected)
            }
            Action::SelectAllRequested { block, now } => self.select_all_gesture(block, now),
            Action::SelectBlock { block } => self.select_single(block),
            Action::DeleteSelected => self.delete_selected(),
        }
    }

    /// Fresh empty block carrying the configured author.
    pub fn create_item(&self) -> Block {
        Block::new(&self.author)
    }

    pub fn update_content(&mut self, id: BlockId, content: String) -> DispatchResult {
        DispatchResult {
            focus: None,
            state_changed: self.state.set_content(id, content),
            consumed: false,
        }
    }

    pub fn insert_after(&mut self, id: BlockId) -> DispatchResult {
        let block = self.create_item();
        match self.state.insert_after(id, block) {
            Ok(new_id) => {
                tracing::debug!(after = %id, block = %new_id, "block inserted");
                DispatchResult::changed(Some(FocusIntent::Mount(new_id)))
            }
            Err(_) => DispatchResult::unchanged(),
        }
    }

    pub fn delete_one(&mut self, id: BlockId) -> DispatchResult {
        match self.state.remove(id) {
            Some(previous) => {
                tracing::debug!(block = %id, ?previous, "block deleted");
                DispatchResult::changed(previous.map(FocusIntent::end_of))
            }
            None => DispatchResult::unchanged(),
        }
    }

    pub fn delete_selected(&mut self) -> DispatchResult {
        if self.state.selection().is_empty() {
            return DispatchResult::unchanged();
        }

        if self.state.covers_all() {
            let block = self.create_item();
            let id = self.state.reset_to(block);
            tracing::debug!(block = %id, "all blocks deleted, list reset");
            return DispatchResult::changed(None);
        }

        let anchor = self.state.selection_anchor();
        let removed = self.state.remove_selected();
        tracing::debug!(removed, ?anchor, "selected blocks deleted");
        DispatchResult::changed(anchor.map(FocusIntent::end_of))
    }

    pub fn select_single(&mut self, id: BlockId) -> DispatchResult {
        DispatchResult {
            focus: None,
            state_changed: self.state.select_only(id),
            consumed: false,
        }
    }

    pub fn select_all_gesture(&mut self, id: BlockId, now: Instant) -> DispatchResult {
        let state_changed = if self.select_all.classify(Some(id), now).is_repeat() {
            self.state.select_all()
        } else {
            self.state.select_only(id)
        };
        DispatchResult {
            focus: None,
            state_changed,
            consumed: true,
        }
    }

    pub fn split_gesture(&mut self, id: BlockId, now: Instant) -> DispatchResult {
        if !self.split.classify(Some(id), now).is_repeat() {
            return DispatchResult::unchanged();
        }
        self.split.reset();
        self.insert_after(id).consumed()
    }

    pub fn backspace_gesture(
        &mut self,
        id: BlockId,
        is_block_empty: bool,
        is_block_selected: bool,
    ) -> DispatchResult {
        if is_block_selected {
            return self.delete_selected().consumed();
        }
        if is_block_empty {
            return self.delete_one(id).consumed();
        }
        DispatchResult::unchanged()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;

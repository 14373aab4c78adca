use super::block::{AuthorTemplate, Block, BlockId};
use rustc_hash::FxHashSet;

/// Ordered blocks plus the set of selected block ids.
///
/// Invariants kept by every method:
/// - `blocks` is never empty;
/// - block ids are unique;
/// - every selected id names a block in `blocks`.
pub struct ThreadState {
    blocks: Vec<Block>,
    selection: FxHashSet<BlockId>,
}

impl std::fmt::Debug for ThreadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadState")
            .field("blocks", &self.ids())
            .field("selection", &self.selection)
            .finish()
    }
}

impl ThreadState {
    pub fn new(author: &AuthorTemplate) -> Self {
        Self {
            blocks: vec![Block::new(author)],
            selection: FxHashSet::default(),
        }
    }

    /// Builds a state from existing blocks. Falls back to one fresh block when
    /// `blocks` is empty and drops duplicate ids.
    pub fn from_blocks(blocks: Vec<Block>, author: &AuthorTemplate) -> Self {
        let mut seen = FxHashSet::default();
        let mut blocks: Vec<Block> = blocks.into_iter().filter(|b| seen.insert(b.id())).collect();
        if blocks.is_empty() {
            blocks.push(Block::new(author));
        }
        Self {
            blocks,
            selection: FxHashSet::default(),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(Block::id).collect()
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == id)
    }

    pub fn selection(&self) -> &FxHashSet<BlockId> {
        &self.selection
    }

    pub fn is_selected(&self, id: BlockId) -> bool {
        self.selection.contains(&id)
    }

    /// Selected ids in list order.
    pub fn selected_ids(&self) -> Vec<BlockId> {
        self.blocks
            .iter()
            .map(Block::id)
            .filter(|id| self.selection.contains(id))
            .collect()
    }

    pub fn set_content(&mut self, id: BlockId, content: String) -> bool {
        match self.blocks.iter_mut().find(|b| b.id() == id) {
            Some(block) => block.set_content(content),
            None => false,
        }
    }

    /// Inserts `block` right after `id`. Hands the block back if `id` is gone.
    pub fn insert_after(&mut self, id: BlockId, block: Block) -> Result<BlockId, Block> {
        let Some(index) = self.index_of(id) else {
            return Err(block);
        };
        let new_id = block.id();
        self.blocks.insert(index + 1, block);
        Ok(new_id)
    }

    /// Removes one block and returns the id of the block that preceded it.
    /// Refuses (returns `None` without touching anything) when `id` is the
    /// only block left or is not present.
    pub fn remove(&mut self, id: BlockId) -> Option<Option<BlockId>> {
        if self.blocks.len() <= 1 {
            return None;
        }
        let index = self.index_of(id)?;
        let previous = index.checked_sub(1).map(|i| self.blocks[i].id());
        self.blocks.remove(index);
        self.selection.remove(&id);
        Some(previous)
    }

    pub fn covers_all(&self) -> bool {
        !self.selection.is_empty() && self.blocks.iter().all(|b| self.selection.contains(&b.id()))
    }

    /// Block that should take focus once the selection is removed: the block
    /// right before the first selected one, else the first unselected block.
    pub fn selection_anchor(&self) -> Option<BlockId> {
        let first = self
            .blocks
            .iter()
            .position(|b| self.selection.contains(&b.id()))?;
        match first.checked_sub(1) {
            Some(prev) => Some(self.blocks[prev].id()),
            None => self
                .blocks
                .iter()
                .map(Block::id)
                .find(|id| !self.selection.contains(id)),
        }
    }

    /// Drops every selected block and clears the selection. Returns the number
    /// of removed blocks. Does nothing if that would empty the list.
    pub fn remove_selected(&mut self) -> usize {
        if self.selection.is_empty() || self.covers_all() {
            return 0;
        }
        let before = self.blocks.len();
        let selection = std::mem::take(&mut self.selection);
        self.blocks.retain(|b| !selection.contains(&b.id()));
        before - self.blocks.len()
    }

    /// Replaces the whole list with `block` and clears the selection.
    pub fn reset_to(&mut self, block: Block) -> BlockId {
        let id = block.id();
        self.blocks.clear();
        self.blocks.push(block);
        self.selection.clear();
        id
    }

    /// Selection becomes exactly `{id}`. Ignored for unknown ids.
    pub fn select_only(&mut self, id: BlockId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        if self.selection.len() == 1 && self.selection.contains(&id) {
            return false;
        }
        self.selection.clear();
        self.selection.insert(id);
        true
    }

    pub fn select_all(&mut self) -> bool {
        let prev_len = self.selection.len();
        for block in &self.blocks {
            self.selection.insert(block.id());
        }
        self.selection.len() != prev_len
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;

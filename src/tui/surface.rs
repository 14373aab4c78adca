//! Plain-text editing surfaces, one per mounted block.
//!
//! Surfaces live in a slotmap arena. The arena key is the opaque handle the
//! kernel's focus router addresses; a stale key simply misses.

use crate::kernel::{BlockId, FocusPosition, SurfaceHost};
use slotmap::{new_key_type, SlotMap};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

new_key_type! {
    pub struct SurfaceKey;
}

#[derive(Debug, Clone)]
pub struct BlockSurface {
    block: BlockId,
    text: String,
    /// Byte offset, always on a grapheme boundary.
    cursor: usize,
    content_selected: bool,
}

impl BlockSurface {
    pub fn new(block: BlockId, text: &str) -> Self {
        Self {
            block,
            text: text.to_string(),
            cursor: text.len(),
            content_selected: false,
        }
    }

    pub fn block(&self) -> BlockId {
        self.block
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_content_selected(&self) -> bool {
        self.content_selected
    }

    pub fn set_content_selected(&mut self, selected: bool) {
        self.content_selected = selected;
    }

    pub fn place_cursor(&mut self, position: FocusPosition) {
        self.cursor = match position {
            FocusPosition::Start => 0,
            FocusPosition::End => self.text.len(),
        };
        self.content_selected = false;
    }

    /// Inserting over selected content replaces it.
    pub fn insert_str(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        if self.content_selected {
            self.text.clear();
            self.cursor = 0;
            self.content_selected = false;
        }
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf))
    }

    /// Deletes the grapheme before the cursor, or all content when selected.
    pub fn delete_backward(&mut self) -> bool {
        if self.content_selected {
            self.content_selected = false;
            if self.text.is_empty() {
                return false;
            }
            self.text.clear();
            self.cursor = 0;
            return true;
        }
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.content_selected = false;
        match self.prev_boundary() {
            Some(prev) => {
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        self.content_selected = false;
        match self.next_boundary() {
            Some(next) => {
                self.cursor = next;
                true
            }
            None => false,
        }
    }

    pub fn move_line_start(&mut self) -> bool {
        self.content_selected = false;
        let start = self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
        let moved = start != self.cursor;
        self.cursor = start;
        moved
    }

    pub fn move_line_end(&mut self) -> bool {
        self.content_selected = false;
        let end = self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i);
        let moved = end != self.cursor;
        self.cursor = end;
        moved
    }

    /// (line, display column) of the cursor inside the content.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, before[line_start..].width())
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }
}

#[derive(Debug, Default)]
pub struct SurfaceArena {
    surfaces: SlotMap<SurfaceKey, BlockSurface>,
    focused: Option<SurfaceKey>,
}

impl SurfaceArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a surface for `block`. New surfaces take focus with the cursor
    /// at the end of their content.
    pub fn mount(&mut self, block: BlockId, text: &str) -> SurfaceKey {
        let key = self.surfaces.insert(BlockSurface::new(block, text));
        self.focused = Some(key);
        key
    }

    pub fn unmount(&mut self, key: SurfaceKey) -> Option<BlockSurface> {
        if self.focused == Some(key) {
            self.focused = None;
        }
        self.surfaces.remove(key)
    }

    pub fn get(&self, key: SurfaceKey) -> Option<&BlockSurface> {
        self.surfaces.get(key)
    }

    pub fn get_mut(&mut self, key: SurfaceKey) -> Option<&mut BlockSurface> {
        self.surfaces.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn focused(&self) -> Option<SurfaceKey> {
        self.focused.filter(|key| self.surfaces.contains_key(*key))
    }

    pub fn focused_surface(&self) -> Option<&BlockSurface> {
        self.focused().and_then(|key| self.surfaces.get(key))
    }

    pub fn focused_block(&self) -> Option<BlockId> {
        self.focused_surface().map(BlockSurface::block)
    }

    pub fn clear_content_selection(&mut self, key: SurfaceKey) {
        if let Some(surface) = self.surfaces.get_mut(key) {
            surface.set_content_selected(false);
        }
    }
}

impl SurfaceHost for SurfaceArena {
    type Handle = SurfaceKey;

    fn focus(&mut self, handle: SurfaceKey, position: FocusPosition) {
        if let Some(surface) = self.surfaces.get_mut(handle) {
            surface.place_cursor(position);
            self.focused = Some(handle);
        }
    }

    fn select_all_content(&mut self, handle: SurfaceKey) {
        if let Some(surface) = self.surfaces.get_mut(handle) {
            surface.set_content_selected(true);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/surface.rs"]
mod tests;

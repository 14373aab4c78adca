//! Semantic commands: what a key means inside the composer, independent of
//! the physical key.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Cursor ====================
    CursorLeft,
    CursorRight,
    CursorLineStart,
    CursorLineEnd,

    // ==================== Block navigation ====================
    FocusPrevBlock,
    FocusNextBlock,

    // ==================== Editing ====================
    InsertChar(char),
    InsertNewline,
    /// Enter: a newline the first time, a new block when repeated quickly.
    SplitGesture,
    /// Backspace: character delete, or block delete when empty / selected.
    Backspace,
    /// Ctrl+A: select the block, then every block when repeated quickly.
    SelectAll,

    // ==================== System ====================
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::FocusPrevBlock => "focusPrevBlock",
            Command::FocusNextBlock => "focusNextBlock",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::SplitGesture => "splitGesture",
            Command::Backspace => "backspace",
            Command::SelectAll => "selectAll",
            Command::Quit => "quit",
        }
    }

    /// Inverse of [`Command::name`]. `insertChar` has no fixed payload and is
    /// not bindable by name.
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name.trim() {
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "focusPrevBlock" => Command::FocusPrevBlock,
            "focusNextBlock" => Command::FocusNextBlock,
            "insertNewline" => Command::InsertNewline,
            "splitGesture" => Command::SplitGesture,
            "backspace" => Command::Backspace,
            "selectAll" => Command::SelectAll,
            "quit" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;

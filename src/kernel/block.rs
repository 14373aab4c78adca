use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static BLOCK_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque block identifier. Allocated from a process-wide counter, so an id is
/// never handed out twice, even after the block it named has been deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u64);

impl BlockId {
    pub fn next() -> Self {
        Self(BLOCK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// Author identity stamped onto every new block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorTemplate {
    pub display_name: String,
    pub handle: String,
    pub avatar: String,
}

impl Default for AuthorTemplate {
    fn default() -> Self {
        Self {
            display_name: "BEE!RL".to_string(),
            handle: "b33irl".to_string(),
            avatar: "/assets/avatar.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    content: String,
    author: AuthorTemplate,
}

impl Block {
    pub fn new(author: &AuthorTemplate) -> Self {
        Self {
            id: BlockId::next(),
            content: String::new(),
            author: author.clone(),
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn author(&self) -> &AuthorTemplate {
        &self.author
    }

    pub fn display_name(&self) -> &str {
        &self.author.display_name
    }

    pub fn handle(&self) -> &str {
        &self.author.handle
    }

    /// Returns `false` when the content was already `content`.
    pub(crate) fn set_content(&mut self, content: String) -> bool {
        if self.content == content {
            return false;
        }
        self.content = content;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/block.rs"]
mod tests;

use super::block::BlockId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPosition {
    Start,
    End,
}

/// Where input focus should go once a structural change has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    /// A block created by the change. Its surface focuses itself on mount.
    Mount(BlockId),
    /// A block that survived the change; needs an explicit focus command.
    Existing {
        block: BlockId,
        position: FocusPosition,
    },
}

impl FocusIntent {
    pub fn end_of(block: BlockId) -> Self {
        FocusIntent::Existing {
            block,
            position: FocusPosition::End,
        }
    }

    pub fn block(&self) -> BlockId {
        match *self {
            FocusIntent::Mount(block) => block,
            FocusIntent::Existing { block, .. } => block,
        }
    }
}

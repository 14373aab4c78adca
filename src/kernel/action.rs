use std::time::Instant;

use super::block::BlockId;

/// Events emitted by a block's editing surface, tagged with the block id.
#[derive(Debug, Clone)]
pub enum Action {
    ContentChanged {
        block: BlockId,
        text: String,
    },
    SplitRequested {
        block: BlockId,
        now: Instant,
    },
    BackspaceRequested {
        block: BlockId,
        is_empty: bool,
    },
    SelectAllRequested {
        block: BlockId,
        now: Instant,
    },
    SelectBlock {
        block: BlockId,
    },
    DeleteSelected,
}

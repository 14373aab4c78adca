use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposerConfig {
    /// Max gap between two activations of the split / select-all gestures.
    pub gesture_threshold_ms: u64,
    /// Blank rows between rendered blocks.
    pub block_gap: u16,
    pub show_handles: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            gesture_threshold_ms: 500,
            block_gap: 1,
            show_handles: true,
        }
    }
}

impl ComposerConfig {
    pub fn gesture_threshold(&self) -> Duration {
        Duration::from_millis(self.gesture_threshold_ms)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;

//! Double-activation detection for repeat-sensitive key intents.
//!
//! Each gesture kind gets its own [`GestureDebouncer`]; nothing is shared
//! between the split and select-all gestures.

use super::block::BlockId;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    First,
    Repeat,
}

impl Activation {
    pub fn is_repeat(self) -> bool {
        self == Activation::Repeat
    }
}

/// How the subject of two activations must relate for the second one to
/// count as a repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectPolicy {
    /// Only elapsed time matters.
    Any,
    /// Both activations must come from the same block.
    Same,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LastActivation {
    at: Instant,
    subject: Option<BlockId>,
}

#[derive(Debug, Clone)]
pub struct GestureDebouncer {
    name: &'static str,
    policy: SubjectPolicy,
    threshold: Duration,
    last: Option<LastActivation>,
}

impl GestureDebouncer {
    pub const DEFAULT_THRESHOLD_MS: u64 = 500;

    pub fn new(name: &'static str, policy: SubjectPolicy, threshold: Duration) -> Self {
        Self {
            name,
            policy,
            threshold,
            last: None,
        }
    }

    /// Double-enter: subject agnostic.
    pub fn split(threshold: Duration) -> Self {
        Self::new("split", SubjectPolicy::Any, threshold)
    }

    /// Double select-all: the repeat has to come from the same block.
    pub fn select_all(threshold: Duration) -> Self {
        Self::new("select_all", SubjectPolicy::Same, threshold)
    }

    /// Classifies the activation against the previous one, then records it.
    /// The record is updated whatever the outcome.
    pub fn classify(&mut self, subject: Option<BlockId>, now: Instant) -> Activation {
        let activation = match self.last {
            Some(last) => {
                // A timestamp older than the record (clock stepped back) never repeats.
                let in_window = now
                    .checked_duration_since(last.at)
                    .is_some_and(|elapsed| elapsed <= self.threshold);
                let subject_ok = match self.policy {
                    SubjectPolicy::Any => true,
                    SubjectPolicy::Same => last.subject == subject,
                };
                if in_window && subject_ok {
                    Activation::Repeat
                } else {
                    Activation::First
                }
            }
            None => Activation::First,
        };

        self.last = Some(LastActivation { at: now, subject });
        tracing::debug!(gesture = self.name, ?subject, ?activation, "gesture classified");
        activation
    }

    /// Forgets the last activation so the next one is evaluated fresh.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/gesture.rs"]
mod tests;

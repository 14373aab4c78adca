//! Active composer configuration, with user settings layered on the defaults.

use crate::kernel::services::ports::config::ComposerConfig;
use crate::kernel::services::ports::settings::Settings;

pub struct ConfigService {
    composer: ComposerConfig,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            composer: ComposerConfig::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut service = Self::new();
        service.apply_settings(settings);
        service
    }

    pub fn composer(&self) -> &ComposerConfig {
        &self.composer
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        match settings.gesture_threshold_ms {
            Some(0) => {
                tracing::warn!("gesture_threshold_ms = 0 ignored, keeping default");
            }
            Some(ms) => self.composer.gesture_threshold_ms = ms,
            None => {}
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;

use crate::DEFAULT_BACKFILL_ENABLED;

use serde::Deserialize;

/// Demonstration project seeding for the test accounts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackfillConfig {
    pub enabled: bool,
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_BACKFILL_ENABLED,
        }
    }
}

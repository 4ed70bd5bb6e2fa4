use serde::{Deserialize, Serialize};

/// Single process-wide settings record. `version` is bumped on every write
/// so concurrent workers can tell a stale read from a fresh one; readers
/// must fetch it at the start of each assignment attempt rather than cache
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub auto_assign_enabled: bool,
    pub version: i64,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            auto_assign_enabled: true,
            version: 0,
        }
    }
}

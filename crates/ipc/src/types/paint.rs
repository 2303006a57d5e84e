//! Car paint types for IPC messages.

use serde::{Deserialize, Serialize};

/// A named color choice offered by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetInfo {
    pub name: String,
    /// Hex value, e.g. "#1a1a2e"
    pub value: String,
}

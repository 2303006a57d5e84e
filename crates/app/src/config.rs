//! Application configuration and UI bridge selection

use bevy::prelude::*;

/// Where messages to and from the page UI travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeMode {
    /// JSON lines on stdin/stdout, for a host process embedding the page
    Stdio,
    /// No UI attached; outbound messages are only logged
    #[default]
    Log,
}

impl BridgeMode {
    /// Parse from environment variable SHOWROOM_IPC
    pub fn from_env() -> Self {
        Self::parse(std::env::var("SHOWROOM_IPC").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("stdio") => Self::Stdio,
            _ => Self::Log,
        }
    }
}

/// Application configuration resource
#[derive(Resource, Clone, Debug)]
pub struct ShowroomConfig {
    pub bridge_mode: BridgeMode,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            bridge_mode: BridgeMode::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_mode_parse() {
        assert_eq!(BridgeMode::parse(Some("stdio")), BridgeMode::Stdio);
        assert_eq!(BridgeMode::parse(Some("log")), BridgeMode::Log);
        assert_eq!(BridgeMode::parse(Some("websocket")), BridgeMode::Log);
        assert_eq!(BridgeMode::parse(Some("")), BridgeMode::Log);
        assert_eq!(BridgeMode::parse(None), BridgeMode::Log);
    }
}

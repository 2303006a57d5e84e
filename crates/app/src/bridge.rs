//! UI bridge
//!
//! In stdio mode a reader thread parses JSON lines from stdin into a channel
//! drained once per frame, and outbound messages are written to stdout one per
//! line. Logs go to stderr, so stdout carries only protocol traffic.

use std::io::{BufRead, Write};
use std::sync::Mutex;

use bevy::prelude::*;
use showroom_ipc::{BevyToUi, UiToBevy};
use showroom_scene::OutboundUiMessages;
use tokio::sync::mpsc;

use crate::config::{BridgeMode, ShowroomConfig};

#[derive(Resource)]
pub struct UiBridge {
    mode: BridgeMode,
    from_ui: Mutex<mpsc::UnboundedReceiver<UiToBevy>>,
}

impl UiBridge {
    /// Bridge fed by the returned sender
    pub fn new(mode: BridgeMode) -> (mpsc::UnboundedSender<UiToBevy>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            tx,
            Self {
                mode,
                from_ui: Mutex::new(rx),
            },
        )
    }

    /// Bridge reading from stdin and writing to stdout
    pub fn stdio() -> Self {
        let (tx, bridge) = Self::new(BridgeMode::Stdio);
        spawn_stdin_reader(tx);
        bridge
    }

    pub fn mode(&self) -> BridgeMode {
        self.mode
    }

    /// Take every message received since the last call
    pub fn try_recv_all(&self) -> Vec<UiToBevy> {
        let Ok(mut rx) = self.from_ui.lock() else {
            return Vec::new();
        };
        let mut messages = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    pub fn send(&self, msg: &BevyToUi) {
        match self.mode {
            BridgeMode::Stdio => match msg.to_json() {
                Ok(line) => {
                    let mut out = std::io::stdout().lock();
                    if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
                        warn!("Failed to write UI message: {}", err);
                    }
                }
                Err(err) => warn!("Failed to serialize UI message: {}", err),
            },
            BridgeMode::Log => debug!("UI <- {:?}", msg),
        }
    }
}

fn spawn_stdin_reader(tx: mpsc::UnboundedSender<UiToBevy>) {
    let spawned = std::thread::Builder::new()
        .name("ui-bridge-stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("UI bridge read failed: {}", err);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match UiToBevy::from_json(&line) {
                    Ok(msg) => {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                    Err(err) => warn!("Ignoring malformed UI message: {}", err),
                }
            }
            debug!("UI bridge input closed");
        });

    if let Err(err) = spawned {
        error!("Failed to start UI bridge reader: {}", err);
    }
}

pub struct BridgePlugin;

impl Plugin for BridgePlugin {
    fn build(&self, app: &mut App) {
        let mode = app
            .world()
            .get_resource::<ShowroomConfig>()
            .map(|config| config.bridge_mode)
            .unwrap_or_default();

        let bridge = match mode {
            BridgeMode::Stdio => UiBridge::stdio(),
            BridgeMode::Log => UiBridge::new(BridgeMode::Log).1,
        };

        app.insert_resource(bridge)
            .init_resource::<OutboundUiMessages>()
            .add_systems(Last, flush_outbound);

        info!("UI bridge initialized ({:?})", mode);
    }
}

/// Forward everything queued this frame to the UI
pub fn flush_outbound(mut outbound: ResMut<OutboundUiMessages>, bridge: Res<UiBridge>) {
    if outbound.messages.is_empty() {
        return;
    }
    for msg in outbound.drain() {
        bridge.send(&msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_bridge_receives_in_order() {
        let (tx, bridge) = UiBridge::new(BridgeMode::Log);
        tx.send(UiToBevy::Scroll { offset: 10.0 }).unwrap();
        tx.send(UiToBevy::ScrollToTop).unwrap();

        assert_eq!(
            bridge.try_recv_all(),
            vec![UiToBevy::Scroll { offset: 10.0 }, UiToBevy::ScrollToTop]
        );
        assert!(bridge.try_recv_all().is_empty());
    }

    #[test]
    fn test_closed_sender_is_empty() {
        let (tx, bridge) = UiBridge::new(BridgeMode::Log);
        drop(tx);
        assert!(bridge.try_recv_all().is_empty());
    }

    #[test]
    fn test_flush_drains_outbound() {
        let mut world = World::new();
        world.insert_resource(UiBridge::new(BridgeMode::Log).1);
        let mut outbound = OutboundUiMessages::default();
        outbound.send(BevyToUi::ModelLoaded);
        world.insert_resource(outbound);

        world.run_system_once(flush_outbound).unwrap();

        assert!(world.resource::<OutboundUiMessages>().messages.is_empty());
    }
}

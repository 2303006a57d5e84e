//! IPC message protocol for the showroom
//!
//! Defines all message types exchanged between the Bevy scene and the page UI.
//! Messages travel as JSON objects tagged `{"type": ..., "data": ...}`, one
//! message per line on the stdio bridge.

mod error;
mod messages;
mod types;

pub use error::IpcError;
pub use messages::{BevyToUi, UiToBevy};
pub use types::*;

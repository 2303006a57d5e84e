//! Type definitions for IPC messages.

mod page;
mod paint;
mod settings;

pub use page::*;
pub use paint::*;
pub use settings::*;

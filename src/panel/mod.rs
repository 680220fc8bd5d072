//! Per-panel UI state: expand/collapse and the transient copy status.

mod notice;
mod state;

pub use notice::{copy_message, CopyNotice, Scheduler, TimeoutScheduler, CLEAR_AFTER_MS, COPY_FAILED};
pub use state::{PanelAction, PanelState};

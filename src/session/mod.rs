//! Authentication session as seen by the inspector.
//!
//! The PKCE exchange lives in an external client; this module only holds
//! the state it publishes and the entry points it exposes.

mod browser;
mod cell;
mod hook;
mod provider;
mod state;

pub use browser::{BridgeSnapshot, BrowserSessionProvider};
pub use cell::{SessionCell, Subscription};
pub use hook::use_session;
pub use provider::{LoginError, SessionHandle, SessionProvider};
pub use state::SessionState;

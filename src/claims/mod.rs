//! Decoded token claims and how they are shown.

mod clock;
mod format;
mod rows;
mod value;

pub use clock::{BrowserClock, LocaleClock};
pub use format::{format_claim_value, format_timestamp, ABSENT_TEXT, NULL_TEXT};
pub use rows::{claim_rows, ClaimRow, RowKind, TemporalClaim};
pub use value::{ClaimValue, Claims};

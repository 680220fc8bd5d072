mod session_view;
mod token_inspector;
mod user_summary;

pub use session_view::{Screen, SessionView};
pub use token_inspector::{panel_body, visible_token, PanelBody, TokenInspector, TokenInspectorProps};
pub use user_summary::{summary_rows, SummaryRow, UserSummary, UserSummaryProps};

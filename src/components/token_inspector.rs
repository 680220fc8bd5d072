use std::rc::Rc;

use gloo::console::warn;
use serde_json::{Map, Value};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::claims::{claim_rows, BrowserClock, ClaimRow, Claims, LocaleClock, RowKind};
use crate::clipboard;
use crate::panel::{CopyNotice, PanelAction, PanelState, TimeoutScheduler};
use crate::token::decode;

pub const DECODE_ERROR_LABEL: &str = "Error decoding token:";

#[derive(Properties, PartialEq)]
pub struct TokenInspectorProps {
    /// Compact token. Nothing renders when it is missing or empty.
    pub token: Option<AttrValue>,
    pub title: AttrValue,
    /// "ID" or "Access", used in the raw token heading.
    pub kind: AttrValue,
}

/// Collapsible panel with the raw token and its decoded claims.
#[function_component(TokenInspector)]
pub fn token_inspector(props: &TokenInspectorProps) -> Html {
    let panel = use_reducer(PanelState::default);
    let copy_status = use_state(|| None::<String>);

    let notice = {
        let setter = copy_status.setter();
        use_memo((), move |_| CopyNotice::new(TimeoutScheduler, move |m| setter.set(m)))
    };

    let copy = {
        let notice = notice.clone();
        Callback::from(move |(text, label): (String, &'static str)| {
            let notice = Rc::clone(&notice);
            spawn_local(async move {
                let outcome = clipboard::write_text(text).await;
                if let Err(e) = &outcome {
                    warn!(format!("{label}: {e}"));
                }
                notice.report(label, &outcome);
            });
        })
    };

    let Some(token) = visible_token(props.token.as_ref()) else {
        return html! {};
    };

    let on_toggle = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| panel.dispatch(PanelAction::Toggle))
    };

    let on_copy_token = {
        let copy = copy.clone();
        let token = token.to_string();
        Callback::from(move |_: MouseEvent| copy.emit((token.clone(), "Token")))
    };

    let state = *panel;
    let icon_class = classes!("toggle-icon", state.is_expanded().then_some("open"));

    html! {
        <div class="token-container">
            <div class="token-header" onclick={on_toggle}>
                <h3>{ &*props.title }</h3>
                <span class={icon_class}>{ state.toggle_icon() }</span>
            </div>

            if state.is_expanded() {
                <div class="token-content">
                    <div class="token-raw">
                        <strong>{ format!("Raw {} Token:", props.kind) }</strong>
                        <div class="token-text">{ &*token }</div>
                        <button class="copy-button" onclick={on_copy_token}>{ "📋 Copy Token" }</button>
                        if let Some(msg) = (*copy_status).clone() {
                            <div class="copy-status">{ msg }</div>
                        }
                    </div>

                    { body_view(panel_body(&token, &BrowserClock), copy) }
                </div>
            }
        </div>
    }
}

/// The token the panel shows, or `None` when nothing should render.
pub fn visible_token(token: Option<&AttrValue>) -> Option<AttrValue> {
    token.filter(|t| !t.is_empty()).cloned()
}

/// Expanded panel content below the raw token.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Decoded {
        header: Option<Map<String, Value>>,
        claims: Claims,
        rows: Vec<ClaimRow>,
    },
    /// Shown in place of the claims.
    Failed(String),
}

/// Decodes `token` once and lays out what the expanded panel shows.
pub fn panel_body(token: &str, clock: &dyn LocaleClock) -> PanelBody {
    match decode(token) {
        Ok(decoded) => PanelBody::Decoded {
            rows: claim_rows(&decoded.claims, clock),
            header: decoded.header,
            claims: decoded.claims,
        },
        Err(e) => PanelBody::Failed(e.to_string()),
    }
}

fn body_view(body: PanelBody, copy: Callback<(String, &'static str)>) -> Html {
    let (header, claims, rows) = match body {
        PanelBody::Decoded { header, claims, rows } => (header, claims, rows),
        PanelBody::Failed(message) => {
            return html! {
                <div class="error-message">
                    <strong>{ DECODE_ERROR_LABEL }</strong>{ " " }{ message }
                </div>
            };
        }
    };

    let on_copy_claims = {
        let json = claims.to_pretty_json();
        Callback::from(move |_: MouseEvent| copy.emit((json.clone(), "Claims")))
    };

    html! {
        <>
            if let Some(header) = header.as_ref() {
                { header_view(header) }
            }
            <div class="token-claims">
                <h4>{ format!("Decoded Claims ({} claims)", claims.len()) }</h4>
                <div class="claims-grid">
                    { for rows.iter().map(claim_row_view) }
                </div>
                <button class="copy-button claims-copy" onclick={on_copy_claims}>
                    { "📋 Copy All Claims (JSON)" }
                </button>
            </div>
        </>
    }
}

fn header_view(header: &Map<String, Value>) -> Html {
    let text = serde_json::to_string_pretty(header).unwrap_or_default();
    html! {
        <div class="token-header-json">
            <h4>{ "Header" }</h4>
            <div class="claim-value json">{ text }</div>
        </div>
    }
}

fn claim_row_view(row: &ClaimRow) -> Html {
    let value_class = classes!("claim-value", (row.kind == RowKind::Json).then_some("json"));
    html! {
        <div class="claim-item" key={row.name.clone()}>
            <div class="claim-key">{ row.label.clone() }</div>
            <div class={value_class}>{ row.value.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Seconds;

    impl LocaleClock for Seconds {
        fn format_epoch_millis(&self, millis: f64) -> Option<String> {
            Some(format!("{}s", millis as i64 / 1000))
        }
    }

    fn compact(payload: Value) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(json!({"alg": "RS256"}).to_string()),
            URL_SAFE_NO_PAD.encode(payload.to_string())
        )
    }

    #[test]
    fn missing_or_empty_token_renders_nothing() {
        assert_eq!(visible_token(None), None);
        assert_eq!(visible_token(Some(&AttrValue::from(""))), None);
        assert_eq!(
            visible_token(Some(&AttrValue::from("a.b.c"))),
            Some(AttrValue::from("a.b.c"))
        );
    }

    #[test]
    fn malformed_token_shows_the_error_instead_of_claims() {
        match panel_body("not-a-jwt", &Seconds) {
            PanelBody::Failed(message) => assert!(message.starts_with("Invalid token specified"), "{message}"),
            other => panic!("expected a decode failure, got {other:?}"),
        }
    }

    #[test]
    fn decoded_body_lists_header_and_ordered_rows() {
        let body = panel_body(&compact(json!({"sub": "u1", "exp": 60})), &Seconds);
        let PanelBody::Decoded { header, claims, rows } = body else {
            panic!("token should decode");
        };
        assert_eq!(header.and_then(|h| h.get("alg").cloned()), Some(json!("RS256")));
        assert_eq!(claims.len(), 2);
        let shown: Vec<(&str, &str)> = rows.iter().map(|r| (r.label.as_str(), r.value.as_str())).collect();
        assert_eq!(shown, vec![("exp (Expiration Time)", "60 → 60s"), ("sub", "u1")]);
    }
}

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo::console::{error, log, warn};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::cell::SessionCell;
use super::provider::{LoginError, SessionProvider};
use super::state::SessionState;
use crate::config::OAuthConfig;
use crate::token::{self, DecodeError};

#[wasm_bindgen]
extern "C" {
    // Must match the `pkceBridge` object defined in index.html
    #[wasm_bindgen(catch, js_namespace = pkceBridge, js_name = init)]
    fn bridge_init(config_json: &str, on_state: &Closure<dyn FnMut(String)>) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = pkceBridge, js_name = login)]
    fn bridge_login() -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = pkceBridge, js_name = logout)]
    fn bridge_logout() -> Result<(), JsValue>;
}

/// State as pushed by the JS bridge, before the ID token is decoded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeSnapshot {
    pub access_token: Option<String>,
    pub id_token: Option<String>,
    pub is_authenticating: bool,
    pub error: Option<String>,
}

impl BridgeSnapshot {
    /// Builds the session state, decoding the ID token when asked to.
    ///
    /// A decode failure leaves the claims empty and is handed back so the
    /// caller can report it.
    pub fn into_state(self, decode_token: bool) -> (SessionState, Option<DecodeError>) {
        let decoded = match self.id_token.as_deref().filter(|t| !t.is_empty()) {
            Some(t) if decode_token => Some(token::decode(t)),
            _ => None,
        };
        let (claims, problem) = match decoded {
            Some(Ok(d)) => (Some(d.claims), None),
            Some(Err(e)) => (None, Some(e)),
            None => (None, None),
        };
        let state = SessionState {
            access_token: self.access_token,
            id_token: self.id_token,
            id_token_claims: claims,
            is_authenticating: self.is_authenticating,
            error: self.error,
        };
        (state, problem)
    }
}

/// Talks to the PKCE client loaded by `index.html` through `pkceBridge`.
pub struct BrowserSessionProvider {
    cell: SessionCell,
    // keeps the JS -> Rust callback alive for as long as the provider
    _on_state: Closure<dyn FnMut(String)>,
}

impl BrowserSessionProvider {
    pub fn connect(config: &OAuthConfig) -> Self {
        let cell = SessionCell::default();
        let on_state: Closure<dyn FnMut(String)> = {
            let cell = cell.clone();
            let decode_token = config.decode_token;
            Closure::new(move |json: String| {
                match serde_json::from_str::<BridgeSnapshot>(&json) {
                    Ok(snapshot) => {
                        let (state, problem) = snapshot.into_state(decode_token);
                        if let Some(e) = problem {
                            warn!(format!("ID token could not be decoded: {e}"));
                        }
                        cell.publish(state);
                    }
                    Err(e) => error!(format!("Ignoring malformed session update: {e}")),
                }
            })
        };

        let started = config
            .to_bridge_json()
            .map_err(|e| e.to_string())
            .and_then(|json| bridge_init(&json, &on_state).map_err(|e| js_message(&e)));
        match started {
            Ok(()) => log!(format!("PKCE bridge started ({})", config.summary())),
            Err(reason) => {
                error!(format!("PKCE bridge failed to start: {reason}"));
                cell.update(|s| s.error = Some(format!("PKCE client unavailable: {reason}")));
            }
        }

        Self {
            cell,
            _on_state: on_state,
        }
    }
}

impl SessionProvider for BrowserSessionProvider {
    fn session(&self) -> SessionCell {
        self.cell.clone()
    }

    fn login(&self) -> LocalBoxFuture<'static, Result<(), LoginError>> {
        async move {
            let promise = bridge_login().map_err(|e| LoginError::Unavailable(js_message(&e)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| LoginError::Rejected(js_message(&e)))
        }
        .boxed_local()
    }

    fn logout(&self) {
        if let Err(e) = bridge_logout() {
            error!(format!("Logout failed: {}", js_message(&e)));
        }
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use serde_json::json;

    fn id_token(payload: serde_json::Value) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(json!({"alg": "RS256"}).to_string()),
            URL_SAFE_NO_PAD.encode(payload.to_string())
        )
    }

    #[test]
    fn parses_camel_case_snapshot_with_missing_fields() {
        let snap: BridgeSnapshot = serde_json::from_str(r#"{"accessToken":"a","isAuthenticating":true}"#).unwrap();
        assert_eq!(snap.access_token.as_deref(), Some("a"));
        assert_eq!(snap.id_token, None);
        assert!(snap.is_authenticating);
        assert_eq!(snap.error, None);
    }

    #[test]
    fn decodes_id_token_claims() {
        let snap = BridgeSnapshot {
            access_token: Some("access".into()),
            id_token: Some(id_token(json!({"sub": "u1", "name": "Ada"}))),
            ..Default::default()
        };
        let (state, problem) = snap.into_state(true);
        assert!(problem.is_none());
        assert_eq!(state.id_token_claims.as_ref().map(|c| c.len()), Some(2));
        assert!(state.is_authenticated());
    }

    #[test]
    fn skips_decoding_when_disabled() {
        let snap = BridgeSnapshot {
            access_token: Some("access".into()),
            id_token: Some(id_token(json!({"sub": "u1"}))),
            ..Default::default()
        };
        let (state, problem) = snap.into_state(false);
        assert!(problem.is_none());
        assert!(state.id_token_claims.is_none());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn undecodable_id_token_reports_and_stays_signed_out() {
        let snap = BridgeSnapshot {
            access_token: Some("access".into()),
            id_token: Some("not-a-token".into()),
            ..Default::default()
        };
        let (state, problem) = snap.into_state(true);
        assert_eq!(problem, Some(DecodeError::SegmentCount { found: 1 }));
        assert!(state.id_token_claims.is_none());
        assert!(!state.is_authenticated());
        assert_eq!(state.id_token.as_deref(), Some("not-a-token"));
    }
}

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use entra_token_inspector::claims::{claim_rows, LocaleClock, RowKind};
use entra_token_inspector::token::{decode, DecodeError};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Deterministic stand-in for the browser locale formatter.
struct FixedLocale;

impl LocaleClock for FixedLocale {
    fn format_epoch_millis(&self, millis: f64) -> Option<String> {
        match millis as i64 {
            1_700_000_000_000 => Some("11/14/2023, 10:13:20 PM".to_string()),
            other => Some(format!("{other}ms")),
        }
    }
}

fn compact(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(json!({"alg": "RS256", "typ": "JWT", "kid": "k1"}).to_string());
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

#[test]
fn payload_round_trips_through_decode() {
    let payloads = [
        json!({"sub": "u1"}),
        json!({"aud": ["api://a", "api://b"], "roles": ["Admin"], "ver": "2.0", "n": 1.25}),
        json!({"nested": {"deep": {"x": null}}, "flag": false, "iat": 1700000000}),
    ];
    for payload in payloads {
        let decoded = decode(&compact(&payload)).unwrap();
        let reencoded = serde_json::to_value(&decoded.claims).unwrap();
        assert_eq!(reencoded, payload);
    }
}

#[test]
fn issued_at_renders_with_local_time_before_other_claims() {
    let token = compact(&json!({"aud": "api", "iat": 1700000000, "name": "Ada"}));
    let decoded = decode(&token).unwrap();
    let rows = claim_rows(&decoded.claims, &FixedLocale);

    assert_eq!(rows[0].label, "iat (Issued At)");
    assert_eq!(rows[0].value, "1700000000 → 11/14/2023, 10:13:20 PM");
    assert_eq!(rows[0].kind, RowKind::Temporal);
    let rest: Vec<&str> = rows[1..].iter().map(|r| r.name.as_str()).collect();
    assert_eq!(rest, vec!["aud", "name"]);
}

#[test]
fn plain_claims_sort_by_name() {
    let decoded = decode(&compact(&json!({"z": 1, "a": 2, "mid": 3}))).unwrap();
    let order: Vec<String> = claim_rows(&decoded.claims, &FixedLocale)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(order, vec!["a", "mid", "z"]);
}

#[test]
fn short_tokens_fail_without_claims() {
    for token in ["", "onlyone", "header.payload"] {
        let err = decode(token).unwrap_err();
        assert!(matches!(err, DecodeError::SegmentCount { .. }), "{token:?} gave {err:?}");
        assert!(err.to_string().starts_with("Invalid token specified"));
    }
}

#[test]
fn signature_is_not_inspected() {
    let payload = URL_SAFE_NO_PAD.encode(json!({"sub": "u1"}).to_string());
    let decoded = decode(&format!("eyJhbGciOiJub25lIn0.{payload}.%%%not-base64%%%")).unwrap();
    assert_eq!(decoded.claims.len(), 1);
}

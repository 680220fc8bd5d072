use super::clock::LocaleClock;
use super::format::{format_claim_value, format_timestamp};
use super::value::{ClaimValue, Claims};

/// The registered time claims, in the order they are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalClaim {
    IssuedAt,
    Expiration,
    NotBefore,
}

impl TemporalClaim {
    pub const ALL: [Self; 3] = [Self::IssuedAt, Self::Expiration, Self::NotBefore];

    pub fn name(self) -> &'static str {
        match self {
            Self::IssuedAt => "iat",
            Self::Expiration => "exp",
            Self::NotBefore => "nbf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::IssuedAt => "iat (Issued At)",
            Self::Expiration => "exp (Expiration Time)",
            Self::NotBefore => "nbf (Not Before)",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Temporal,
    Json,
    Plain,
}

/// A claim ready to render: its label and display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRow {
    pub name: String,
    pub label: String,
    pub value: String,
    pub kind: RowKind,
}

/// Rows for every claim: `iat`, `exp`, `nbf` first in that order, then the
/// rest sorted by name, ignoring case first.
///
/// A time claim with a falsy value (`0`, `""`, `false`, `null`) gets no row
/// at all, and it is never listed among the other claims either.
pub fn claim_rows(claims: &Claims, clock: &dyn LocaleClock) -> Vec<ClaimRow> {
    let mut rows: Vec<ClaimRow> = TemporalClaim::ALL
        .into_iter()
        .filter_map(|t| {
            let value = claims.get(t.name());
            value.is_truthy().then(|| temporal_row(t, &value, clock))
        })
        .collect();

    let mut rest: Vec<(&str, ClaimValue<'_>)> = claims
        .iter()
        .filter(|(name, _)| TemporalClaim::from_name(name).is_none())
        .collect();
    rest.sort_by(|(a, _), (b, _)| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));

    rows.extend(rest.into_iter().map(|(name, value)| ClaimRow {
        name: name.to_string(),
        label: name.to_string(),
        value: format_claim_value(&value),
        kind: if value.is_json() { RowKind::Json } else { RowKind::Plain },
    }));
    rows
}

fn temporal_row(claim: TemporalClaim, value: &ClaimValue<'_>, clock: &dyn LocaleClock) -> ClaimRow {
    let raw = format_claim_value(value);
    let value = match format_timestamp(value, clock) {
        Some(local) => format!("{raw} → {local}"),
        None => raw,
    };
    ClaimRow {
        name: claim.name().to_string(),
        label: claim.label().to_string(),
        value,
        kind: RowKind::Temporal,
    }
}

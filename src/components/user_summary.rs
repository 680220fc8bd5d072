use yew::prelude::*;

use crate::claims::{format_claim_value, Claims};

// (label, claim name), in display order
const SUMMARY_FIELDS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("Email", "email"),
    ("Username", "preferred_username"),
    ("Subject (sub)", "sub"),
    ("Tenant ID", "tid"),
    ("Object ID", "oid"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Identity rows from ID token claims. Missing or empty claims get no row.
pub fn summary_rows(claims: &Claims) -> Vec<SummaryRow> {
    SUMMARY_FIELDS
        .iter()
        .filter_map(|&(label, name)| {
            let value = claims.get(name);
            value.is_truthy().then(|| SummaryRow {
                label,
                value: format_claim_value(&value),
            })
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct UserSummaryProps {
    pub claims: Claims,
}

#[function_component(UserSummary)]
pub fn user_summary(props: &UserSummaryProps) -> Html {
    html! {
        <div class="user-details">
            { for summary_rows(&props.claims).into_iter().map(|row| html! {
                <div class="user-detail" key={row.label}>
                    <strong>{ row.label }</strong>
                    <span>{ row.value }</span>
                </div>
            }) }
        </div>
    }
}

use crate::claims::Claims;

/// Snapshot of what the PKCE client knows right now.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub id_token: Option<String>,
    pub id_token_claims: Option<Claims>,
    pub is_authenticating: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Needs both a non-empty access token and non-empty ID token claims.
    pub fn is_authenticated(&self) -> bool {
        let has_token = self.access_token.as_deref().is_some_and(|t| !t.is_empty());
        let has_claims = self.id_token_claims.as_ref().is_some_and(|c| !c.is_empty());
        has_token && has_claims
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

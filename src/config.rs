//! OAuth settings for Microsoft Entra, read from the build environment.
//!
//! Values come from `option_env!` at compile time, the way a Vite `.env`
//! is baked into a bundle. Copy `.env.example` and export it before
//! `trunk build`.

use serde::Serialize;
use thiserror::Error;

pub const CLIENT_ID: &str = "OAUTH_CLIENT_ID";
pub const TENANT_ID: &str = "OAUTH_TENANT_ID";
pub const REDIRECT_URI: &str = "OAUTH_REDIRECT_URI";
pub const SCOPES: &str = "OAUTH_SCOPES";
pub const AUTO_LOGIN: &str = "OAUTH_AUTO_LOGIN";
pub const STORAGE: &str = "OAUTH_STORAGE";

pub const PLACEHOLDER_CLIENT_ID: &str = "YOUR_CLIENT_ID_HERE";
pub const PLACEHOLDER_TENANT_ID: &str = "YOUR_TENANT_ID_HERE";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000";
pub const DEFAULT_SCOPES: &str = "openid profile email";

const LOGIN_HOST: &str = "https://login.microsoftonline.com";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("OAUTH_STORAGE must be \"local\" or \"session\", got {0:?}")]
    InvalidStorage(String),
}

/// Where the PKCE client keeps tokens between page loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    #[default]
    Local,
    Session,
}

impl StorageMode {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim() {
            "local" => Ok(Self::Local),
            "session" => Ok(Self::Session),
            other => Err(ConfigError::InvalidStorage(other.to_string())),
        }
    }
}

/// Settings handed to the external PKCE client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
    pub client_id: String,
    pub tenant_id: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub redirect_uri: String,
    /// Space-delimited.
    pub scope: String,
    pub auto_login: bool,
    pub logout_redirect: String,
    pub decode_token: bool,
    pub storage: StorageMode,
}

pub fn authorization_endpoint(tenant_id: &str) -> String {
    format!("{LOGIN_HOST}/{tenant_id}/oauth2/v2.0/authorize")
}

pub fn token_endpoint(tenant_id: &str) -> String {
    format!("{LOGIN_HOST}/{tenant_id}/oauth2/v2.0/token")
}

/// Compile-time environment lookup.
pub fn build_env(key: &str) -> Option<String> {
    let value = match key {
        CLIENT_ID => option_env!("OAUTH_CLIENT_ID"),
        TENANT_ID => option_env!("OAUTH_TENANT_ID"),
        REDIRECT_URI => option_env!("OAUTH_REDIRECT_URI"),
        SCOPES => option_env!("OAUTH_SCOPES"),
        AUTO_LOGIN => option_env!("OAUTH_AUTO_LOGIN"),
        STORAGE => option_env!("OAUTH_STORAGE"),
        _ => None,
    };
    value.map(str::to_string)
}

impl OAuthConfig {
    /// Reads every setting through `lookup`. Empty values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        logout_redirect: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let storage = match non_empty(&lookup, STORAGE) {
            Some(v) => StorageMode::parse(&v)?,
            None => StorageMode::default(),
        };
        Ok(Self::with_storage(lookup, storage, logout_redirect))
    }

    /// Like [`from_lookup`](Self::from_lookup) with the storage mode fixed.
    pub fn with_storage(
        lookup: impl Fn(&str) -> Option<String>,
        storage: StorageMode,
        logout_redirect: impl Into<String>,
    ) -> Self {
        let get = |key: &str, default: &str| non_empty(&lookup, key).unwrap_or_else(|| default.to_string());
        let tenant_id = get(TENANT_ID, PLACEHOLDER_TENANT_ID);

        Self {
            client_id: get(CLIENT_ID, PLACEHOLDER_CLIENT_ID),
            authorization_endpoint: authorization_endpoint(&tenant_id),
            token_endpoint: token_endpoint(&tenant_id),
            tenant_id,
            redirect_uri: get(REDIRECT_URI, DEFAULT_REDIRECT_URI),
            scope: get(SCOPES, DEFAULT_SCOPES),
            auto_login: non_empty(&lookup, AUTO_LOGIN).as_deref() == Some("true"),
            logout_redirect: logout_redirect.into(),
            decode_token: true,
            storage,
        }
    }

    /// True while the client or tenant id is still the template value.
    pub fn is_placeholder(&self) -> bool {
        self.client_id == PLACEHOLDER_CLIENT_ID || self.tenant_id == PLACEHOLDER_TENANT_ID
    }

    /// JSON object in the shape the PKCE bridge expects.
    pub fn to_bridge_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// One line for the console, with the client id shortened.
    pub fn summary(&self) -> String {
        let client: String = self.client_id.chars().take(8).collect();
        format!(
            "client={client}… tenant={} redirect={} scope=\"{}\" storage={:?} auto_login={}",
            self.tenant_id, self.redirect_uri, self.scope, self.storage, self.auto_login
        )
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = OAuthConfig::from_lookup(env(&[]), "http://localhost:3000").unwrap();
        assert_eq!(cfg.client_id, PLACEHOLDER_CLIENT_ID);
        assert_eq!(cfg.tenant_id, PLACEHOLDER_TENANT_ID);
        assert_eq!(cfg.redirect_uri, DEFAULT_REDIRECT_URI);
        assert_eq!(cfg.scope, "openid profile email");
        assert!(!cfg.auto_login);
        assert!(cfg.decode_token);
        assert_eq!(cfg.storage, StorageMode::Local);
        assert!(cfg.is_placeholder());
    }

    #[test]
    fn endpoints_follow_the_tenant() {
        let cfg = OAuthConfig::from_lookup(
            env(&[(TENANT_ID, "contoso-tenant"), (CLIENT_ID, "abc")]),
            "https://app.example",
        )
        .unwrap();
        assert_eq!(
            cfg.authorization_endpoint,
            "https://login.microsoftonline.com/contoso-tenant/oauth2/v2.0/authorize"
        );
        assert_eq!(
            cfg.token_endpoint,
            "https://login.microsoftonline.com/contoso-tenant/oauth2/v2.0/token"
        );
        assert_eq!(cfg.logout_redirect, "https://app.example");
        assert!(!cfg.is_placeholder());
    }

    #[test]
    fn auto_login_only_on_literal_true() {
        let on = OAuthConfig::from_lookup(env(&[(AUTO_LOGIN, "true")]), "o").unwrap();
        let yes = OAuthConfig::from_lookup(env(&[(AUTO_LOGIN, "yes")]), "o").unwrap();
        assert!(on.auto_login);
        assert!(!yes.auto_login);
    }

    #[test]
    fn storage_mode_parses_or_errors() {
        let cfg = OAuthConfig::from_lookup(env(&[(STORAGE, "session")]), "o").unwrap();
        assert_eq!(cfg.storage, StorageMode::Session);

        let err = OAuthConfig::from_lookup(env(&[(STORAGE, "cookie")]), "o").unwrap_err();
        assert_eq!(err, ConfigError::InvalidStorage("cookie".to_string()));
    }

    #[test]
    fn bridge_json_is_camel_case() {
        let cfg = OAuthConfig::from_lookup(env(&[(STORAGE, "session")]), "o").unwrap();
        let v: serde_json::Value = serde_json::from_str(&cfg.to_bridge_json().unwrap()).unwrap();
        assert_eq!(v["clientId"], "YOUR_CLIENT_ID_HERE");
        assert_eq!(v["authorizationEndpoint"], cfg.authorization_endpoint.as_str());
        assert_eq!(v["decodeToken"], true);
        assert_eq!(v["storage"], "session");
        assert_eq!(v["logoutRedirect"], "o");
    }
}

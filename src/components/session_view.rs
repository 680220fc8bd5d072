use gloo::console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::token_inspector::TokenInspector;
use super::user_summary::UserSummary;
use crate::session::{use_session, SessionHandle, SessionState};

/// Which blocks of the page are visible for a given session state.
///
/// The error block does not suppress the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub error: Option<String>,
    pub loading: bool,
    pub login: bool,
    pub authenticated: bool,
}

impl Screen {
    pub fn for_state(state: &SessionState) -> Self {
        let authenticated = state.is_authenticated();
        Self {
            error: state.error().map(str::to_string),
            loading: state.is_authenticating,
            login: !authenticated && !state.is_authenticating,
            authenticated,
        }
    }
}

/// Top-level page: login, loading, errors, and the signed-in inspector.
#[function_component(SessionView)]
pub fn session_view() -> Html {
    let state = use_session();
    let provider = use_context::<SessionHandle>();
    let screen = Screen::for_state(&state);

    let on_login = {
        let provider = provider.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(provider) = provider.clone() else {
                error!("Login unavailable: no session provider");
                return;
            };
            spawn_local(async move {
                if let Err(e) = provider.login().await {
                    error!(format!("Login error: {e}"));
                }
            });
        })
    };

    let on_logout = Callback::from(move |_: MouseEvent| {
        if let Some(provider) = provider.as_ref() {
            provider.logout();
        }
    });

    html! {
        <div class="app">
            <div class="header">
                <h1>{ "🔐 Microsoft Entra OAuth2 PKCE Testing" }</h1>
                <p>{ "Authorization Code Flow with PKCE" }</p>
            </div>

            <div class="content">
                if let Some(message) = screen.error.clone() {
                    <div class="error-message">
                        <strong>{ "Authentication Error:" }</strong>
                        <div class="error-detail">{ message }</div>
                    </div>
                }

                if screen.loading {
                    <div class="loading">{ "Authenticating... Please wait." }</div>
                }

                if screen.login {
                    { login_view(on_login) }
                }

                if screen.authenticated {
                    { authenticated_view(&state, on_logout) }
                }
            </div>
        </div>
    }
}

fn login_view(on_login: Callback<MouseEvent>) -> Html {
    html! {
        <div class="auth-section">
            <h2>{ "Please sign in to test the OAuth2 flow" }</h2>
            <p class="muted">{ "This will initiate the Authorization Code Flow with PKCE to Microsoft Entra" }</p>
            <button class="button" onclick={on_login}>{ "🚀 Login with Microsoft" }</button>

            <div class="notice warning">
                <strong>{ "⚠️ Configuration Required:" }</strong>
                <p>{ "Before building this app, export the variables from " }<code>{ ".env.example" }</code>{ " with your:" }</p>
                <ul>
                    <li>{ "Azure AD Application (Client) ID" }</li>
                    <li>{ "Azure AD Tenant ID" }</li>
                    <li>{ "OAuth Scopes" }</li>
                    <li>{ "Redirect URI (should be http://localhost:3000)" }</li>
                </ul>
                <p>{ "Copy " }<code>{ ".env.example" }</code>{ " to " }<code>{ ".env" }</code>{ ", fill in your values and rebuild." }</p>
            </div>
        </div>
    }
}

fn authenticated_view(state: &SessionState, on_logout: Callback<MouseEvent>) -> Html {
    let claims = state.id_token_claims.clone().unwrap_or_default();
    let id_token = state.id_token.clone().map(AttrValue::from);
    let access_token = state.access_token.clone().map(AttrValue::from);

    html! {
        <>
            <div class="user-info">
                <div class="user-info-head">
                    <h2>{ "✅ Authentication Successful" }</h2>
                    <button class="button secondary" onclick={on_logout}>{ "🚪 Logout" }</button>
                </div>
                <UserSummary {claims} />
            </div>

            <div class="tokens-section">
                <h2>{ "🔑 Token Inspector" }</h2>
                <p class="muted">{ "Click on each token below to view the raw JWT and decoded claims" }</p>

                <TokenInspector token={id_token} title="ID Token" kind="ID" />
                <TokenInspector token={access_token} title="Access Token" kind="Access" />
            </div>

            <div class="notice info">
                <h3>{ "📝 About This Flow" }</h3>
                <p>
                    { "This application demonstrates the OAuth 2.0 Authorization Code Flow with PKCE (Proof Key for Code Exchange). \
                       PKCE enhances security by preventing authorization code interception attacks, making it suitable for public clients \
                       like single-page applications and mobile apps." }
                </p>
                <p>
                    { "The tokens displayed above contain claims about the authenticated user and the granted permissions. \
                       The ID Token contains user identity information, while the Access Token is used to access protected resources." }
                </p>
            </div>
        </>
    }
}

use std::rc::Rc;

use gloo::console::{error, warn};
use yew::prelude::*;

use crate::components::SessionView;
use crate::config::{build_env, OAuthConfig, StorageMode, DEFAULT_REDIRECT_URI};
use crate::session::{BrowserSessionProvider, SessionHandle};

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string())
}

fn load_config() -> OAuthConfig {
    let origin = page_origin();
    let config = OAuthConfig::from_lookup(build_env, origin.clone()).unwrap_or_else(|e| {
        error!(format!("{e}; using local storage"));
        OAuthConfig::with_storage(build_env, StorageMode::Local, origin)
    });
    if config.is_placeholder() {
        warn!("OAuth client/tenant id not configured; set OAUTH_CLIENT_ID and OAUTH_TENANT_ID and rebuild");
    }
    config
}

#[function_component(App)]
pub fn app() -> Html {
    let handle = use_memo((), |_| {
        let config = load_config();
        SessionHandle::new(Rc::new(BrowserSessionProvider::connect(&config)))
    });

    html! {
        <ContextProvider<SessionHandle> context={(*handle).clone()}>
            <SessionView />
        </ContextProvider<SessionHandle>>
    }
}

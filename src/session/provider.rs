use std::ops::Deref;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use thiserror::Error;

use super::cell::SessionCell;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoginError {
    #[error("Login failed: {0}")]
    Rejected(String),

    #[error("PKCE client unavailable: {0}")]
    Unavailable(String),
}

/// The external PKCE client: owns the flow, token storage and refresh.
pub trait SessionProvider {
    fn session(&self) -> SessionCell;

    /// Starts the authorization redirect. Progress and the final outcome
    /// arrive through [`session`](Self::session).
    fn login(&self) -> LocalBoxFuture<'static, Result<(), LoginError>>;

    fn logout(&self);
}

/// Shared provider handle for Yew context.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionProvider>);

impl SessionHandle {
    pub fn new(provider: Rc<dyn SessionProvider>) -> Self {
        Self(provider)
    }
}

impl Deref for SessionHandle {
    type Target = dyn SessionProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

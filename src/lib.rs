//! Entra token inspector (Rust + Yew + WASM).
//!
//! Signs in against Microsoft Entra through an external PKCE client and
//! shows the raw and decoded ID and access tokens it hands back.

pub mod app;
pub mod claims;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod panel;
pub mod session;
pub mod token;

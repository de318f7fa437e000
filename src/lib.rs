//! Warden - Minimal Web Request-Handling Toolkit
//!
//! Declarative route compilation, registry-based controller/action dispatch
//! gated by session authentication, CSRF token issuance/validation, and
//! layout-aware view composition, behind a small HTTP/1.1 shell.

pub mod config;
pub mod db;
pub mod dispatch;
pub mod http;
pub mod routing;
pub mod server;
pub mod session;
pub mod view;

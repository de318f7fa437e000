//! Request dispatch.
//!
//! The dispatch loop orchestrates one request end-to-end:
//!
//! ```text
//!        ┌──────────────┐
//!        │   Routing    │ ← Resolve path against the route table
//!        └──────┬───────┘
//!               │ resolved          no route / no controller / no action
//!               ▼                          ▼
//!        ┌──────────────┐          ┌───────────────┐
//!        │ Dispatching  │────────→ │ Recovering404 │
//!        └──────┬───────┘          └───────┬───────┘
//!               │ found                    │ 404 page
//!               ▼                          │
//!        ┌──────────────┐                  │
//!        │ Authorizing  │──────────┐       │
//!        └──────┬───────┘          │ unauthenticated
//!               │ allowed          ▼       │
//!               │          ┌──────────────────┐
//!               │          │  RecoveringAuth  │ ← one re-dispatch to the
//!               ▼          └────────┬─────────┘   login target, gate skipped
//!        ┌──────────────┐           │
//!        │  Executing   │ ←─────────┘
//!        └──────┬───────┘
//!               ▼                          ▼
//!        ┌─────────────────────────────────────┐
//!        │             Responding              │ ← single exit; the response
//!        └─────────────────────────────────────┘   is emitted exactly once
//! ```
//!
//! `NotFound` and `Unauthorized` are the only conditions recovered here; any
//! other collaborator failure is fatal and propagates to the connection
//! boundary unhandled.

pub mod app;
pub mod controller;

use thiserror::Error;

/// Error kinds the dispatch loop recovers from locally.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No matching route, no registered controller, or no registered action.
    /// Surfaced as a 404 page.
    #[error("not found: {0}")]
    NotFound(String),

    /// A gated action was hit with an unauthenticated session. Never surfaced
    /// directly; triggers exactly one re-dispatch to the login target.
    #[error("unauthorized action")]
    Unauthorized,

    /// Collaborator failure inside a handler. Not recovered; fatal.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub use app::App;
pub use controller::{ActionFn, Context, Controller, ControllerFactory, Params, Registry};

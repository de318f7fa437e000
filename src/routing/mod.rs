//! Route compilation and path resolution.
//!
//! Routes are declared as `(pattern, target)` pairs where `pattern` uses
//! `/literal/:name` syntax and `target` names at least a `controller` and an
//! `action`. Declarations are compiled once at startup into an ordered,
//! immutable table of anchored matchers; resolution scans the table in
//! declaration order and the first full match wins.
//!
//! ```text
//! Route Compilation (at startup):
//!     ("/user/:id", {controller: user, action: show})
//!         → ^/user/(?P<id>[^/]+)$
//!
//! Resolution (per request):
//!     "/user/42" → {controller: user, action: show, id: 42}
//! ```

pub mod compiler;
pub mod router;

pub use compiler::{target, CompiledRoute, Target};
pub use router::{ResolvedParams, Router};

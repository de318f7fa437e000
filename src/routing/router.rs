use std::collections::HashMap;

use crate::routing::compiler::{self, CompiledRoute, Target};

/// Resolution result: the route's target map extended with captured segments.
pub type ResolvedParams = HashMap<String, String>;

/// Ordered, immutable route table. Built once at startup and shared
/// read-only across requests.
pub struct Router {
    routes: Vec<CompiledRoute>,
}

impl Router {
    pub fn new<'a, I>(definitions: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Target)>,
    {
        Ok(Self {
            routes: compiler::compile(definitions)?,
        })
    }

    /// Resolves a path to the first declared route that matches it in full.
    ///
    /// The path is normalized to start with `/` before matching. Captured
    /// segments are merged into a copy of the route's target map with the raw
    /// matched substrings, undecoded; captures never override the reserved
    /// `controller` and `action` keys.
    pub fn resolve(&self, path: &str) -> Option<ResolvedParams> {
        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        for route in &self.routes {
            let Some(captures) = route.matcher.captures(&normalized) else {
                continue;
            };

            let mut params = route.target.clone();
            for name in route.matcher.capture_names().flatten() {
                if name == "controller" || name == "action" {
                    continue;
                }
                if let Some(value) = captures.name(name) {
                    params.insert(name.to_string(), value.as_str().to_string());
                }
            }

            return Some(params);
        }

        None
    }
}

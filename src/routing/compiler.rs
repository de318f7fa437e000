use std::collections::HashMap;

use anyhow::Context as _;
use regex::Regex;

/// Target map of a route declaration. Carries at least `controller` and
/// `action`; resolution later extends a copy of it with captured segments.
pub type Target = HashMap<String, String>;

/// Builds the minimal target map for a route declaration.
pub fn target(controller: &str, action: &str) -> Target {
    let mut map = HashMap::new();
    map.insert("controller".to_string(), controller.to_string());
    map.insert("action".to_string(), action.to_string());
    map
}

/// A single compiled route: an anchored matcher plus the declared target.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub matcher: Regex,
    pub target: Target,
}

/// Compiles route declarations into matchers, preserving declaration order.
///
/// Each pattern is split on `/`. A segment starting with `:` becomes a named
/// capture group matching one or more non-separator characters, so an empty
/// segment never matches. Any other segment is embedded into the matcher
/// verbatim; literal segments containing regex metacharacters are the
/// caller's responsibility.
pub fn compile<'a, I>(definitions: I) -> anyhow::Result<Vec<CompiledRoute>>
where
    I: IntoIterator<Item = (&'a str, Target)>,
{
    let mut routes = Vec::new();

    for (pattern, target) in definitions {
        for key in ["controller", "action"] {
            if !target.contains_key(key) {
                anyhow::bail!("route {pattern} is missing the {key} key in its target");
            }
        }

        let segments: Vec<String> = pattern
            .trim_start_matches('/')
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => format!("(?P<{name}>[^/]+)"),
                None => segment.to_string(),
            })
            .collect();

        // Anchored at both ends so a route matches the whole path, never a prefix.
        let source = format!("^/{}$", segments.join("/"));
        let matcher = Regex::new(&source)
            .with_context(|| format!("failed to compile route pattern {pattern}"))?;

        routes.push(CompiledRoute { matcher, target });
    }

    Ok(routes)
}

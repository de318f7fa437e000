//! View composition.
//!
//! Rendering is an explicit two-step composition: a content-producing
//! template returns a string, and an optional layout template wraps it,
//! receiving the inner content under the `content` variable.

use std::collections::HashMap;

/// Variables handed to a template.
pub type Vars = HashMap<String, String>;

/// A content-producing step. Receives the variables, returns markup.
pub type Template = fn(&Vars) -> String;

/// Renders `template` with `vars`, then wraps the result in `layout` if one
/// is given. The layout sees every variable the template saw, plus the inner
/// content under `content`.
pub fn render(template: Template, vars: &Vars, layout: Option<Template>) -> String {
    let content = template(vars);

    match layout {
        Some(layout) => {
            let mut layout_vars = vars.clone();
            layout_vars.insert("content".to_string(), content);
            layout(&layout_vars)
        }
        None => content,
    }
}

/// HTML-escapes `& < > " '`.
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

use warden::view::{escape, render, Vars};

fn page(vars: &Vars) -> String {
    format!("<p>{}</p>", vars.get("name").map(String::as_str).unwrap_or(""))
}

fn layout(vars: &Vars) -> String {
    format!(
        "<html><body>{}</body></html>",
        vars.get("content").map(String::as_str).unwrap_or("")
    )
}

#[test]
fn test_render_without_layout_returns_content() {
    let mut vars = Vars::new();
    vars.insert("name".to_string(), "bob".to_string());

    assert_eq!(render(page, &vars, None), "<p>bob</p>");
}

#[test]
fn test_render_wraps_content_in_layout() {
    let mut vars = Vars::new();
    vars.insert("name".to_string(), "bob".to_string());

    assert_eq!(
        render(page, &vars, Some(layout)),
        "<html><body><p>bob</p></body></html>"
    );
}

#[test]
fn test_layout_sees_template_variables() {
    fn titled_layout(vars: &Vars) -> String {
        format!(
            "{}|{}",
            vars.get("title").map(String::as_str).unwrap_or(""),
            vars.get("content").map(String::as_str).unwrap_or("")
        )
    }

    let mut vars = Vars::new();
    vars.insert("title".to_string(), "Home".to_string());
    vars.insert("name".to_string(), "bob".to_string());

    assert_eq!(render(page, &vars, Some(titled_layout)), "Home|<p>bob</p>");
}

#[test]
fn test_escape_html_special_characters() {
    assert_eq!(
        escape("<script>alert(\"x&y's\")</script>"),
        "&lt;script&gt;alert(&quot;x&amp;y&#039;s&quot;)&lt;/script&gt;"
    );
}

#[test]
fn test_escape_leaves_plain_text_untouched() {
    assert_eq!(escape("plain text 123"), "plain text 123");
}

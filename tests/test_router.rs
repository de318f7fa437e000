use std::collections::HashMap;

use warden::routing::{compiler, target, Router};

fn user_show_table() -> Router {
    Router::new([("/user/:id", target("user", "show"))]).unwrap()
}

#[test]
fn test_resolve_capture_segment() {
    let router = user_show_table();

    let params = router.resolve("/user/42").unwrap();

    assert_eq!(params.get("controller").unwrap(), "user");
    assert_eq!(params.get("action").unwrap(), "show");
    assert_eq!(params.get("id").unwrap(), "42");
}

#[test]
fn test_resolve_normalizes_missing_leading_slash() {
    let router = user_show_table();

    let params = router.resolve("user/42").unwrap();

    assert_eq!(params.get("controller").unwrap(), "user");
    assert_eq!(params.get("action").unwrap(), "show");
    assert_eq!(params.get("id").unwrap(), "42");
}

#[test]
fn test_resolve_empty_capture_never_matches() {
    let router = user_show_table();

    assert!(router.resolve("/user/").is_none());
}

#[test]
fn test_resolve_no_match() {
    let router = user_show_table();

    assert!(router.resolve("/nope").is_none());
}

#[test]
fn test_resolve_requires_full_match() {
    let router = user_show_table();

    // A prefix match is not a match
    assert!(router.resolve("/user/42/posts").is_none());
}

#[test]
fn test_resolve_first_match_wins_in_declaration_order() {
    let router = Router::new([
        ("/user/new", target("user", "create")),
        ("/user/:id", target("user", "show")),
    ])
    .unwrap();

    let params = router.resolve("/user/new").unwrap();
    assert_eq!(params.get("action").unwrap(), "create");

    let params = router.resolve("/user/7").unwrap();
    assert_eq!(params.get("action").unwrap(), "show");
    assert_eq!(params.get("id").unwrap(), "7");
}

#[test]
fn test_resolve_declaration_order_shadows_later_routes() {
    // Reversed declaration: the capture route shadows the literal one
    let router = Router::new([
        ("/user/:id", target("user", "show")),
        ("/user/new", target("user", "create")),
    ])
    .unwrap();

    let params = router.resolve("/user/new").unwrap();
    assert_eq!(params.get("action").unwrap(), "show");
    assert_eq!(params.get("id").unwrap(), "new");
}

#[test]
fn test_resolve_capture_is_raw_and_undecoded() {
    let router = user_show_table();

    let params = router.resolve("/user/%34%32").unwrap();
    assert_eq!(params.get("id").unwrap(), "%34%32");
}

#[test]
fn test_resolve_root_route() {
    let router = Router::new([("/", target("home", "index"))]).unwrap();

    let params = router.resolve("/").unwrap();
    assert_eq!(params.get("controller").unwrap(), "home");
}

#[test]
fn test_resolve_capture_never_overrides_reserved_keys() {
    let router = Router::new([("/go/:action", target("pages", "view"))]).unwrap();

    let params = router.resolve("/go/delete").unwrap();

    // The declared action wins over the captured segment
    assert_eq!(params.get("action").unwrap(), "view");
    assert_eq!(params.get("controller").unwrap(), "pages");
}

#[test]
fn test_compile_is_deterministic() {
    let first = compiler::compile([
        ("/user/:id", target("user", "show")),
        ("/status", target("status", "index")),
    ])
    .unwrap();
    let second = compiler::compile([
        ("/user/:id", target("user", "show")),
        ("/status", target("status", "index")),
    ])
    .unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.matcher.as_str(), b.matcher.as_str());
    }
}

#[test]
fn test_compile_preserves_declaration_order() {
    let routes = compiler::compile([
        ("/a", target("a", "index")),
        ("/b", target("b", "index")),
        ("/c", target("c", "index")),
    ])
    .unwrap();

    let controllers: Vec<&str> = routes
        .iter()
        .map(|r| r.target.get("controller").unwrap().as_str())
        .collect();
    assert_eq!(controllers, ["a", "b", "c"]);
}

#[test]
fn test_compile_rejects_target_without_action() {
    let mut incomplete = HashMap::new();
    incomplete.insert("controller".to_string(), "user".to_string());

    assert!(compiler::compile([("/user", incomplete)]).is_err());
}

#[test]
fn test_resolve_multiple_captures() {
    let router = Router::new([("/blog/:year/:slug", target("blog", "entry"))]).unwrap();

    let params = router.resolve("/blog/2021/hello-world").unwrap();
    assert_eq!(params.get("year").unwrap(), "2021");
    assert_eq!(params.get("slug").unwrap(), "hello-world");
}

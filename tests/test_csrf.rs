use warden::dispatch::controller::{check_csrf_token, generate_csrf_token};
use warden::session::Session;

#[test]
fn test_tokens_are_unique_per_issuance() {
    let mut session = Session::new();

    let first = generate_csrf_token(&mut session, "login");
    let second = generate_csrf_token(&mut session, "login");

    assert_ne!(first, second);
}

#[test]
fn test_check_consumes_token_single_use() {
    let mut session = Session::new();

    let token = generate_csrf_token(&mut session, "login");

    assert!(check_csrf_token(&mut session, "login", &token));
    // Already consumed
    assert!(!check_csrf_token(&mut session, "login", &token));
}

#[test]
fn test_check_unknown_token_fails_without_side_effect() {
    let mut session = Session::new();

    let token = generate_csrf_token(&mut session, "login");

    assert!(!check_csrf_token(&mut session, "login", "bogus"));
    // The outstanding token survives a failed check
    assert!(check_csrf_token(&mut session, "login", &token));
}

#[test]
fn test_eleventh_token_evicts_the_oldest() {
    let mut session = Session::new();

    let mut tokens = Vec::new();
    for _ in 0..11 {
        tokens.push(generate_csrf_token(&mut session, "f"));
    }

    // The first issued token is gone
    assert!(!check_csrf_token(&mut session, "f", &tokens[0]));

    // The ten most recent all validate
    for token in &tokens[1..] {
        assert!(check_csrf_token(&mut session, "f", token));
    }
}

#[test]
fn test_token_sets_are_isolated_per_form_name() {
    let mut session = Session::new();

    let login_token = generate_csrf_token(&mut session, "login");
    let post_token = generate_csrf_token(&mut session, "post");

    assert!(!check_csrf_token(&mut session, "post", &login_token));
    assert!(check_csrf_token(&mut session, "login", &login_token));
    assert!(check_csrf_token(&mut session, "post", &post_token));
}

#[test]
fn test_second_token_validates_once_then_fails() {
    let mut session = Session::new();

    let _first = generate_csrf_token(&mut session, "login");
    let second = generate_csrf_token(&mut session, "login");

    assert!(check_csrf_token(&mut session, "login", &second));
    assert!(!check_csrf_token(&mut session, "login", &second));
}

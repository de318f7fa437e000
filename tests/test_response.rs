use warden::http::response::Response;

#[test]
fn test_response_defaults_to_200_ok() {
    let response = Response::new();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.status_text(), "OK");
    assert_eq!(response.content(), "");
    assert!(response.headers().is_empty());
}

#[test]
fn test_response_set_status() {
    let mut response = Response::new();

    response.set_status(404, "Not Found");

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.status_text(), "Not Found");
}

#[test]
fn test_response_set_header_replaces_existing() {
    let mut response = Response::new();

    response.set_header("Content-Type", "text/plain");
    response.set_header("Content-Type", "text/html; charset=utf-8");

    assert_eq!(
        response.header("Content-Type"),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(response.headers().len(), 1);
}

#[test]
fn test_response_set_content() {
    let mut response = Response::new();

    response.set_content("<p>hello</p>");

    assert_eq!(response.content(), "<p>hello</p>");
}

use std::collections::HashMap;

/// A response under construction: status line, headers, and body string.
///
/// Defaults to `200 OK` with no headers and an empty body. The dispatch loop
/// fills it in; the writer serializes and sends it exactly once.
#[derive(Debug)]
pub struct Response {
    status_code: u16,
    status_text: String,
    headers: HashMap<String, String>,
    body: String,
}

impl Response {
    pub fn new() -> Self {
        Self {
            status_code: 200,
            status_text: "OK".to_string(),
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    pub fn set_status(&mut self, code: u16, text: impl Into<String>) {
        self.status_code = code;
        self.status_text = text.into();
    }

    /// Adds or replaces a header.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn set_content(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn content(&self) -> &str {
        &self.body
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

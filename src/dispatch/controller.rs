//! Controllers, the action registry, and per-request helpers.
//!
//! A controller is a named bundle of action handlers. Lookup is an explicit
//! registry both ways: controller-name string to factory, and action-name
//! string to handler function. Registration happens at startup; nothing is
//! probed at runtime.

use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;
use crate::db::DbHandle;
use crate::dispatch::DispatchError;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::routing::ResolvedParams;
use crate::session::Session;

/// Parameters handed to an action handler (the resolved route params).
pub type Params = ResolvedParams;

/// An action handler: produces the response content for one request.
pub type ActionFn = fn(&mut Context<'_>, &Params) -> Result<String, DispatchError>;

/// Shared per-request state handed to every action handler.
pub struct Context<'a> {
    pub request: &'a Request,
    pub response: &'a mut Response,
    pub session: &'a mut Session,
    pub db: &'a mut DbHandle,
    pub config: &'a Config,
}

impl Context<'_> {
    /// Issues a fresh single-use CSRF token for `form_name`.
    pub fn generate_csrf_token(&mut self, form_name: &str) -> String {
        generate_csrf_token(self.session, form_name)
    }

    /// Consumes `token` for `form_name` if it is outstanding.
    pub fn check_csrf_token(&mut self, form_name: &str, token: &str) -> bool {
        check_csrf_token(self.session, form_name, token)
    }

    /// Sets up a 302 redirect to `url`. Paths are resolved against the
    /// request host.
    pub fn redirect(&mut self, url: &str) {
        let location = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            let host = self.request.header("Host").unwrap_or("localhost");
            format!("http://{host}{url}")
        };

        self.response.set_status(302, "Found");
        self.response.set_header("Location", location);
    }

    /// Builds the error a handler returns to forward the request to the
    /// 404 page.
    pub fn forward404(&self, detail: &str) -> DispatchError {
        DispatchError::NotFound(format!("forwarded to 404 page: {detail}"))
    }
}

/// A named bundle of action handlers with an authorization gate.
pub trait Controller {
    fn name(&self) -> &'static str;

    /// Explicit action registry: action-name string to handler.
    fn action(&self, name: &str) -> Option<ActionFn>;

    /// Action names requiring an authenticated session.
    fn auth_actions(&self) -> &'static [&'static str] {
        &[]
    }

    /// Resolves and runs one action.
    ///
    /// A missing handler is a `NotFound`. When `enforce_auth` is set, a gated
    /// action with an unauthenticated session fails with `Unauthorized`
    /// before the handler body runs; the dispatch loop clears the flag for
    /// the login re-dispatch.
    fn run(
        &self,
        ctx: &mut Context<'_>,
        action: &str,
        params: &Params,
        enforce_auth: bool,
    ) -> Result<String, DispatchError> {
        let handler = self.action(action).ok_or_else(|| {
            DispatchError::NotFound(format!(
                "action {action} is not registered on the {} controller",
                self.name()
            ))
        })?;

        if enforce_auth
            && self.auth_actions().contains(&action)
            && !ctx.session.is_authenticated()
        {
            return Err(DispatchError::Unauthorized);
        }

        handler(ctx, params)
    }
}

/// Produces a controller instance for one request.
pub type ControllerFactory = fn() -> Box<dyn Controller>;

/// Startup-time registry mapping controller names to factories.
#[derive(Default)]
pub struct Registry {
    controllers: HashMap<String, ControllerFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, factory: ControllerFactory) {
        self.controllers.insert(name.into(), factory);
    }

    pub fn controller(&self, name: &str) -> Option<Box<dyn Controller>> {
        self.controllers.get(name).map(|factory| factory())
    }
}

const CSRF_KEY_PREFIX: &str = "csrf_tokens/";
const MAX_TOKENS_PER_FORM: usize = 10;

fn token_list(session: &Session, key: &str) -> Vec<String> {
    session.get_as(key).unwrap_or_default()
}

/// Issues a token for `form_name` and stores it in the session.
///
/// At most ten tokens are outstanding per form name; issuing an eleventh
/// evicts the oldest. Covers the same action opened in several tabs at once.
pub fn generate_csrf_token(session: &mut Session, form_name: &str) -> String {
    let key = format!("{CSRF_KEY_PREFIX}{form_name}");
    let mut tokens = token_list(session, &key);

    if tokens.len() >= MAX_TOKENS_PER_FORM {
        tokens.remove(0);
    }

    let token = Uuid::new_v4().simple().to_string();
    tokens.push(token.clone());
    session.set(key, Value::from(tokens));

    token
}

/// Checks `token` against the session's outstanding tokens for `form_name`.
///
/// A matching token is removed before reporting success, so every token
/// validates at most once. A miss has no side effect.
pub fn check_csrf_token(session: &mut Session, form_name: &str, token: &str) -> bool {
    let key = format!("{CSRF_KEY_PREFIX}{form_name}");
    let mut tokens = token_list(session, &key);

    match tokens.iter().position(|t| t == token) {
        Some(pos) => {
            tokens.remove(pos);
            session.set(key, Value::from(tokens));
            true
        }
        None => false,
    }
}

use tracing::{debug, warn};

use crate::config::Config;
use crate::db::{DataAccessFactory, DbHandle};
use crate::dispatch::controller::{Context, Params, Registry};
use crate::dispatch::DispatchError;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::routing::{Router, Target};
use crate::session::Session;
use crate::view;

/// The application core: route table, controller registry, and the dispatch
/// loop. Built once at startup, immutable, shared read-only across requests.
pub struct App {
    router: Router,
    registry: Registry,
    config: Config,
    db_factory: DataAccessFactory,
}

impl App {
    pub fn new<'a, I>(
        config: Config,
        definitions: I,
        registry: Registry,
        db_factory: DataAccessFactory,
    ) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Target)>,
    {
        Ok(Self {
            router: Router::new(definitions)?,
            registry,
            config,
            db_factory,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Runs one request through resolve → authorize → execute → recover and
    /// returns the response to emit.
    ///
    /// `NotFound` becomes a 404 page. `Unauthorized` triggers exactly one
    /// re-dispatch to the configured login target with the auth gate skipped;
    /// the login target must never itself be gated. Anything else is fatal
    /// and propagates to the caller with no partial response.
    pub fn handle(&self, request: &Request, session: &mut Session) -> anyhow::Result<Response> {
        let mut response = Response::new();
        let mut db = DbHandle::new(self.db_factory.clone());
        let mut ctx = Context {
            request,
            response: &mut response,
            session,
            db: &mut db,
            config: &self.config,
        };

        let path = request.path_info();
        let outcome = match self.router.resolve(&path) {
            Some(params) => {
                let controller = params.get("controller").cloned().unwrap_or_default();
                let action = params.get("action").cloned().unwrap_or_default();
                self.run_action(&mut ctx, &controller, &action, &params, true)
            }
            None => Err(DispatchError::NotFound(format!("no route found for {path}"))),
        };

        match outcome {
            Ok(content) => {
                ctx.response.set_content(content);
            }
            Err(DispatchError::NotFound(detail)) => {
                warn!(path = %path, detail = %detail, "not found");
                self.render_404_page(ctx.response, &detail);
            }
            Err(DispatchError::Unauthorized) => {
                let controller = self.config.login_controller.clone();
                let action = self.config.login_action.clone();
                debug!(controller = %controller, action = %action,
                    "unauthenticated, re-dispatching to login target");

                // One re-dispatch, gate skipped. A failure here is fatal;
                // there is no second recovery.
                let content = self
                    .run_action(&mut ctx, &controller, &action, &Params::new(), false)
                    .map_err(|e| anyhow::anyhow!("login re-dispatch failed: {e}"))?;
                ctx.response.set_content(content);
            }
            Err(DispatchError::Internal(e)) => return Err(e),
        }

        Ok(response)
    }

    /// Steps 2–5 of the loop: controller lookup, construction, action lookup,
    /// gate check, handler execution.
    fn run_action(
        &self,
        ctx: &mut Context<'_>,
        controller_name: &str,
        action: &str,
        params: &Params,
        enforce_auth: bool,
    ) -> Result<String, DispatchError> {
        let controller = self.registry.controller(controller_name).ok_or_else(|| {
            DispatchError::NotFound(format!("controller {controller_name} is not registered"))
        })?;

        debug!(controller = controller_name, action = action, "running action");
        controller.run(ctx, action, params, enforce_auth)
    }

    /// 404 page. Debug mode carries the raw diagnostic; otherwise a generic
    /// message. Either way the text is escaped into the page.
    fn render_404_page(&self, response: &mut Response, detail: &str) {
        let message = if self.config.debug { detail } else { "Page not found." };
        let message = view::escape(message);

        response.set_status(404, "Not Found");
        response.set_header("Content-Type", "text/html; charset=utf-8");
        response.set_content(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\" />\n    <title>404</title>\n</head>\n<body>\n    {message}\n</body>\n</html>\n"
        ));
    }
}

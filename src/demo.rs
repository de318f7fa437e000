//! Demo application wired onto the framework: a sign-in flow and a user page.
//!
//! Doubles as the reference for how an application registers its routes and
//! controllers at startup.

use std::collections::HashMap;

use warden::db::Row;
use warden::dispatch::{ActionFn, Context, Controller, DispatchError, Params, Registry};
use warden::routing::{target, Target};
use warden::view;

pub fn routes() -> Vec<(&'static str, Target)> {
    vec![
        ("/", target("account", "index")),
        ("/account", target("account", "index")),
        ("/account/signin", target("account", "signin")),
        ("/account/authenticate", target("account", "authenticate")),
        ("/account/signout", target("account", "signout")),
        ("/user/:id", target("user", "show")),
    ]
}

pub fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register("account", || Box::new(AccountController));
    registry.register("user", || Box::new(UserController));
    registry
}

pub fn seed_users() -> Vec<Row> {
    let mut user = HashMap::new();
    user.insert("id".to_string(), "1".to_string());
    user.insert("name".to_string(), "admin".to_string());
    vec![user]
}

fn layout(vars: &view::Vars) -> String {
    let content = vars.get("content").map(String::as_str).unwrap_or("");
    let title = vars.get("title").map(String::as_str).unwrap_or("warden");
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\" /><title>{}</title></head>\n<body>\n{content}\n</body>\n</html>\n",
        view::escape(title)
    )
}

struct AccountController;

impl Controller for AccountController {
    fn name(&self) -> &'static str {
        "account"
    }

    fn action(&self, name: &str) -> Option<ActionFn> {
        match name {
            "index" => Some(account_index),
            "signin" => Some(account_signin),
            "authenticate" => Some(account_authenticate),
            "signout" => Some(account_signout),
            _ => None,
        }
    }

    fn auth_actions(&self) -> &'static [&'static str] {
        &["index", "signout"]
    }
}

fn account_index(_ctx: &mut Context<'_>, _params: &Params) -> Result<String, DispatchError> {
    let mut vars = view::Vars::new();
    vars.insert("title".to_string(), "Home".to_string());

    Ok(view::render(
        |_| "<p>Signed in.</p>\n<a href=\"/account/signout\">Sign out</a>".to_string(),
        &vars,
        Some(layout),
    ))
}

fn account_signin(ctx: &mut Context<'_>, _params: &Params) -> Result<String, DispatchError> {
    let token = ctx.generate_csrf_token("account/signin");
    let mut vars = view::Vars::new();
    vars.insert("title".to_string(), "Sign in".to_string());
    vars.insert("token".to_string(), token);

    Ok(view::render(signin_form, &vars, Some(layout)))
}

fn signin_form(vars: &view::Vars) -> String {
    let token = vars.get("token").map(String::as_str).unwrap_or("");
    format!(
        "<form action=\"/account/authenticate\" method=\"post\">\n\
         <input type=\"hidden\" name=\"_token\" value=\"{}\" />\n\
         <input type=\"text\" name=\"name\" />\n\
         <input type=\"submit\" value=\"Sign in\" />\n</form>",
        view::escape(token)
    )
}

fn account_authenticate(ctx: &mut Context<'_>, params: &Params) -> Result<String, DispatchError> {
    if !ctx.request.is_post() {
        return Err(ctx.forward404("authenticate accepts POST only"));
    }

    let token = ctx.request.post_param("_token").unwrap_or_default();
    if !ctx.check_csrf_token("account/signin", &token) {
        ctx.redirect("/account/signin");
        return Ok(String::new());
    }

    let name = ctx.request.post_param("name").unwrap_or_default();
    let rows = ctx
        .db
        .execute("SELECT id, name FROM user WHERE name = ?", &[&name])?;

    match rows.iter().find(|row| row.get("name") == Some(&name)) {
        Some(_) => {
            ctx.session.set_authenticated(true);
            ctx.redirect("/account");
            Ok(String::new())
        }
        None => account_signin(ctx, params),
    }
}

fn account_signout(ctx: &mut Context<'_>, _params: &Params) -> Result<String, DispatchError> {
    ctx.session.clear();
    ctx.session.set_authenticated(false);
    ctx.redirect("/account/signin");
    Ok(String::new())
}

struct UserController;

impl Controller for UserController {
    fn name(&self) -> &'static str {
        "user"
    }

    fn action(&self, name: &str) -> Option<ActionFn> {
        match name {
            "show" => Some(user_show),
            _ => None,
        }
    }
}

fn user_show(ctx: &mut Context<'_>, params: &Params) -> Result<String, DispatchError> {
    let id = params.get("id").cloned().unwrap_or_default();
    let rows = ctx
        .db
        .execute("SELECT id, name FROM user WHERE id = ?", &[&id])?;

    let user = rows
        .iter()
        .find(|row| row.get("id") == Some(&id))
        .ok_or_else(|| ctx.forward404(&format!("no user with id {id}")))?;

    let name = user.get("name").map(String::as_str).unwrap_or("");
    let mut vars = view::Vars::new();
    vars.insert("title".to_string(), format!("User {id}"));
    vars.insert("name".to_string(), view::escape(name));

    Ok(view::render(
        |vars| format!("<h1>{}</h1>", vars.get("name").map(String::as_str).unwrap_or("")),
        &vars,
        Some(layout),
    ))
}

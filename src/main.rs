mod demo;

use std::sync::Arc;

use warden::config::Config;
use warden::db::{DataAccess, FixedRows};
use warden::dispatch::App;
use warden::server;
use warden::session::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let app = Arc::new(App::new(
        cfg,
        demo::routes(),
        demo::registry(),
        Arc::new(|| Box::new(FixedRows::new(demo::seed_users())) as Box<dyn DataAccess>),
    )?);
    let sessions = Arc::new(SessionStore::new());

    tokio::select! {
        res = server::listener::run(app, sessions) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::dispatch::App;
use crate::http::connection::Connection;
use crate::session::SessionStore;

pub async fn run(app: Arc<App>, sessions: Arc<SessionStore>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&app.config().listen_addr).await?;
    info!("Listening on {}", app.config().listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;

        let app = app.clone();
        let sessions = sessions.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, app, sessions);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

/// Runtime configuration, loaded from the environment.
///
/// - `LISTEN`: listen address (default `127.0.0.1:8080`)
/// - `DEBUG`: `1` or `true` puts 404 pages in diagnostic mode
/// - `LOGIN_CONTROLLER` / `LOGIN_ACTION`: the fixed target an unauthorized
///   request is re-dispatched to (default `account` / `signin`)
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub debug: bool,
    pub login_controller: String,
    pub login_action: String,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let debug = std::env::var("DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let login_controller =
            std::env::var("LOGIN_CONTROLLER")
                .unwrap_or_else(|_| "account".to_string());

        let login_action =
            std::env::var("LOGIN_ACTION")
                .unwrap_or_else(|_| "signin".to_string());

        Self { listen_addr, debug, login_controller, login_action }
    }
}

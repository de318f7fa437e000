use warden::config::Config;

#[test]
fn test_config_default_address() {
    // When LISTEN env var is not set, should use default
    unsafe {
        std::env::remove_var("LISTEN");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
}

#[test]
fn test_config_default_login_target() {
    unsafe {
        std::env::remove_var("LOGIN_CONTROLLER");
        std::env::remove_var("LOGIN_ACTION");
    }
    let cfg = Config::load();
    assert_eq!(cfg.login_controller, "account");
    assert_eq!(cfg.login_action, "signin");
}

#[test]
fn test_config_debug_defaults_off() {
    unsafe {
        std::env::remove_var("DEBUG");
    }
    let cfg = Config::load();
    assert!(!cfg.debug);
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::load();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.login_controller, cfg2.login_controller);
}

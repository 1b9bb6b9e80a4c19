use flight_data_web::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

const BIN: &str = "flight-data-web";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("FLIGHT_DATA_SERVER__PORT");
        env::remove_var("FLIGHT_DATA_ROUTES__REGISTER");
        env::remove_var("FLIGHT_DATA_SESSION__JWT_SECRET");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("APP_LOCALE");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("defaults should load");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.static_prefix, "/static");
    assert_eq!(config.app.url, "");
    assert_eq!(config.app.dashboard_path, "/dashboard");
    assert_eq!(config.routes.get("login").map(String::as_str), Some("/login"));
    assert_eq!(config.routes.get("register").map(String::as_str), Some("/register"));
    assert_eq!(config.session.jwt_secret, "");
    assert_eq!(config.session.cookie_name, "flight_data_session");
    assert_eq!(config.i18n.locale, "en");
    assert_eq!(config.i18n.fallback_locale, "en");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("FLIGHT_DATA_SERVER__PORT", "9090");
        env::set_var("FLIGHT_DATA_SESSION__JWT_SECRET", "s3cret");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.session.jwt_secret, "s3cret");

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_disables_route() {
    clear_env_vars();
    unsafe {
        env::set_var("FLIGHT_DATA_ROUTES__REGISTER", "");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.routes.get("register").map(String::as_str), Some(""));

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    write!(
        file,
        r#"
server:
  port: 7070
routes:
  login: /auth/sign-in
i18n:
  locale: es
"#
    )
    .expect("Failed to write temp config");

    // Tell AppConfig to use this file via Env Var (mocking CLI arg indirectly)
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.routes.get("login").map(String::as_str), Some("/auth/sign-in"));
    assert_eq!(config.routes.get("register").map(String::as_str), Some("/register"));
    assert_eq!(config.i18n.locale, "es");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_overrides_env_and_file() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(file, "server:\n  port: 7070").expect("Failed to write temp config");

    unsafe {
        env::set_var("FLIGHT_DATA_SERVER__PORT", "9090");
    }

    let path = file.path().to_string_lossy().into_owned();
    let config = AppConfig::load_from_args([BIN, "--config", &path, "--port", "5050", "--locale", "fr"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 5050);
    assert_eq!(config.i18n.locale, "fr");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    // Create ./config.yaml
    let config_content = r#"
server:
  port: 6060
    "#;
    let cwd_path = "config.yaml";
    fs::write(cwd_path, config_content).expect("Failed to write ./config.yaml");

    // No Env var, No CLI flag: should pick up ./config.yaml
    let config = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment prefix for layered settings, e.g. `FLIGHT_DATA_SERVER__PORT=8000`.
pub const ENV_PREFIX: &str = "FLIGHT_DATA";

/// Config file picked up from the working directory when no path is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Locale used for page labels
    #[arg(long, env = "APP_LOCALE")]
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub app: AppSection,
    /// Named routes. An empty path leaves the route unregistered.
    pub routes: HashMap<String, String>,
    pub session: SessionConfig,
    pub i18n: I18nConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub static_dir: String,
    pub static_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    /// Base used by `url()`; empty keeps generated links relative.
    pub url: String,
    pub dashboard_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// HS256 secret for session tokens. Empty disables authentication.
    pub jwt_secret: String,
    pub cookie_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct I18nConfig {
    pub locale: String,
    pub fallback_locale: String,
    pub lang_dir: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        // 1. Defaults
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "static")?
            .set_default("server.static_prefix", "/static")?
            .set_default("app.url", "")?
            .set_default("app.dashboard_path", "/dashboard")?
            .set_default("routes.login", "/login")?
            .set_default("routes.register", "/register")?
            .set_default("session.jwt_secret", "")?
            .set_default("session.cookie_name", "flight_data_session")?
            .set_default("i18n.locale", "en")?
            .set_default("i18n.fallback_locale", "en")?
            .set_default("i18n.lang_dir", "lang")?;

        // 2. Config file: explicit path, else ./config.yaml when present
        match &cli.config {
            Some(path) => builder = builder.add_source(File::from(Path::new(path))),
            None if Path::new(CWD_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::from(Path::new(CWD_CONFIG_FILE)));
            }
            None => {}
        }

        // 3. Prefixed environment, e.g. FLIGHT_DATA_ROUTES__REGISTER=""
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (and their clap-level env vars) win over everything
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(locale) = cli.locale {
            builder = builder.set_override("i18n.locale", locale)?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = AppConfig::load_from_args(["flight-data-web", "--port", "4100", "--host", "127.0.0.1"])
            .expect("config from args");
        assert_eq!(config.bind_addr(), "127.0.0.1:4100");
    }

    #[test]
    fn test_unknown_flag_is_config_error() {
        let err = AppConfig::load_from_args(["flight-data-web", "--no-such-flag"]).unwrap_err();
        assert!(matches!(err, AppError::Config(config::ConfigError::Message(_))));
    }
}

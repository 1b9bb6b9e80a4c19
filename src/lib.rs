//! Flight Data Web
//!
//! Guest-facing pages for the Flight Data aviation-management product,
//! rendered server-side with Leptos and served by Axum.
//!
//! # Architecture
//!
//! - **Server**: Axum router with tracing and a non-blocking session layer
//! - **UI**: Leptos SSR components rendered to strings per request
//! - **Collaborators**: route table, translator, clock and session verifier,
//!   each behind a small type so pages stay pure functions of their inputs
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`i18n`]: Label translation catalogs
//! - [`routes`]: Named routes and URL building
//! - [`session`]: Visitor sessions
//! - [`ui`]: Components and pages
#![recursion_limit = "256"]

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::default_trait_access)]

pub mod clock;
pub mod config;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod server;
pub mod session;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::i18n::{Catalog, SharedTranslator};
use crate::routes::RouteTable;
use crate::session::{SessionVerifier, Visitor};
use crate::ui::layout::LayoutOptions;
use crate::ui::welcome::{NavLinks, WelcomeContext};

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Named routes for link building.
    pub routes: Arc<RouteTable>,
    /// Label translator for the configured locale.
    pub translator: SharedTranslator,
    /// Source of the copyright year.
    pub clock: Arc<dyn Clock>,
    /// Session token verifier.
    pub sessions: Arc<SessionVerifier>,
}

impl AppState {
    /// Build state from configuration, loading the translation catalog.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let catalog = Catalog::load_with_fallback(
            &config.i18n.lang_dir,
            &config.i18n.locale,
            &config.i18n.fallback_locale,
        )?;

        Ok(Self {
            routes: Arc::new(RouteTable::from_config(&config.app.url, &config.routes)),
            translator: Arc::new(catalog),
            clock: Arc::new(SystemClock),
            sessions: Arc::new(SessionVerifier::from_config(&config.session)),
            config,
        })
    }

    /// Replace the translator.
    #[must_use]
    pub fn with_translator(mut self, translator: SharedTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Replace the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Landing page inputs for one request.
    pub fn welcome_context(&self, visitor: &Visitor) -> WelcomeContext {
        WelcomeContext {
            links: NavLinks::from_routes(&self.routes, &self.config.app.dashboard_path),
            authenticated: visitor.is_authenticated(),
            year: self.clock.year(),
            translator: Arc::clone(&self.translator),
        }
    }

    /// Guest layout settings.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::new(
            self.config.i18n.locale.as_str(),
            &self.config.server.static_prefix,
        )
    }
}

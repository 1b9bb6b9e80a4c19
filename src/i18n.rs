//! Label translation.
//!
//! Page labels are looked up by their literal English text. Catalogs are flat
//! JSON objects stored as `<lang_dir>/<locale>.json`:
//!
//! ```json
//! { "Sign In": "Iniciar sesión", "Get Started": "Comenzar" }
//! ```
//!
//! Lookup order is the active locale, then the fallback locale, then the key
//! itself, so an absent or partial catalog never hides a label.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AppError;

/// Resolves a source string to its display string.
pub trait Translate: Send + Sync + fmt::Debug {
    fn resolve(&self, key: &str) -> String;
}

/// Locale the page labels are written in. A missing catalog for it is expected.
pub const SOURCE_LOCALE: &str = "en";

/// Translator shared between requests.
pub type SharedTranslator = Arc<dyn Translate>;

/// Returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn resolve(&self, key: &str) -> String {
        key.to_owned()
    }
}

/// Translations for one locale, optionally backed by a fallback locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
    fallback: Option<Box<Catalog>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
            fallback: None,
        }
    }

    /// Add entries, replacing existing keys.
    #[must_use]
    pub fn with_entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Consult `fallback` for keys this catalog lacks.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Catalog) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Parse a flat JSON object. `origin` names the source in errors.
    pub fn from_json_str(
        locale: impl Into<String>,
        origin: &str,
        json: &str,
    ) -> Result<Self, AppError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| AppError::CatalogParse {
                origin: origin.to_owned(),
                source,
            })?;
        Ok(Self::new(locale).with_entries(entries))
    }

    /// Load `<lang_dir>/<locale>.json`.
    ///
    /// A missing file yields an empty catalog and logs a warning, unless the
    /// locale is [`SOURCE_LOCALE`]. Unreadable or malformed files are errors.
    pub fn load(lang_dir: &Path, locale: &str) -> Result<Self, AppError> {
        let path = lang_dir.join(format!("{locale}.json"));
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && locale == SOURCE_LOCALE => {
                debug!(
                    name: "i18n.catalog.missing",
                    path = %path.display(),
                    locale,
                    "No catalog for the source locale, labels render as written"
                );
                return Ok(Self::new(locale));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    name: "i18n.catalog.missing",
                    path = %path.display(),
                    locale,
                    "Translation catalog not found, labels fall back to source text"
                );
                return Ok(Self::new(locale));
            }
            Err(source) => return Err(AppError::CatalogRead { path, source }),
        };

        let catalog = Self::from_json_str(locale, &path.display().to_string(), &json)?;
        debug!(
            name: "i18n.catalog.loaded",
            path = %path.display(),
            locale,
            entries = catalog.len(),
            "Translation catalog loaded"
        );
        Ok(catalog)
    }

    /// Load `locale`, chained to `fallback_locale` when the two differ.
    pub fn load_with_fallback(
        lang_dir: &Path,
        locale: &str,
        fallback_locale: &str,
    ) -> Result<Self, AppError> {
        let catalog = Self::load(lang_dir, locale)?;
        if fallback_locale.is_empty() || fallback_locale == locale {
            return Ok(catalog);
        }
        Ok(catalog.with_fallback(Self::load(lang_dir, fallback_locale)?))
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of entries in this locale, excluding the fallback.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .or_else(|| self.fallback.as_deref().and_then(|f| f.lookup(key)))
    }
}

impl Translate for Catalog {
    fn resolve(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_owned()
    }
}

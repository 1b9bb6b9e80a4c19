//! Named routes and URL building.
//!
//! The page never hard-codes where "login" or "register" live. It asks the
//! [`RouteTable`] whether a route is registered and, if so, for its URL.

use std::collections::HashMap;

/// Route name for the sign-in screen.
pub const LOGIN: &str = "login";
/// Route name for account registration.
pub const REGISTER: &str = "register";

/// Registered named routes plus the base for absolute URLs.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    base_url: String,
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Create a table with no routes. An empty `base_url` keeps URLs relative.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            routes: HashMap::new(),
        }
    }

    /// Register `name` at `path`. An empty path leaves the route unregistered.
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        if !path.trim().is_empty() {
            self.routes.insert(name.into(), path);
        }
        self
    }

    /// Build from the `app.url` base and the `routes` config map.
    pub fn from_config(base_url: &str, routes: &HashMap<String, String>) -> Self {
        routes
            .iter()
            .fold(Self::new(base_url), |table, (name, path)| {
                table.with_route(name.as_str(), path.as_str())
            })
    }

    pub fn has(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// URL of a named route, `None` when it is not registered.
    pub fn route(&self, name: &str) -> Option<String> {
        self.routes.get(name).map(|path| self.url(path))
    }

    /// URL for a plain path.
    ///
    /// Absolute `http(s)://` inputs pass through untouched.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        let path = path.trim_start_matches('/');
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_and_route() {
        let routes = RouteTable::new("").with_route(LOGIN, "/login");

        assert!(routes.has(LOGIN));
        assert!(!routes.has(REGISTER));
        assert_eq!(routes.route(LOGIN).as_deref(), Some("/login"));
        assert_eq!(routes.route(REGISTER), None);
    }

    #[test]
    fn test_empty_path_is_unregistered() {
        let routes = RouteTable::new("").with_route(REGISTER, "  ");
        assert!(!routes.has(REGISTER));
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let routes = RouteTable::new("https://flights.example.com/");

        assert_eq!(routes.url("/dashboard"), "https://flights.example.com/dashboard");
        assert_eq!(routes.url("dashboard"), "https://flights.example.com/dashboard");
    }

    #[test]
    fn test_relative_url_without_base() {
        let routes = RouteTable::new("");
        assert_eq!(routes.url("dashboard"), "/dashboard");
        assert_eq!(routes.url("/"), "/");
    }

    #[test]
    fn test_absolute_url_passes_through() {
        let routes = RouteTable::new("https://flights.example.com")
            .with_route(LOGIN, "https://sso.example.com/login");

        assert_eq!(routes.route(LOGIN).as_deref(), Some("https://sso.example.com/login"));
    }

    #[test]
    fn test_from_config() {
        let map = HashMap::from([
            ("login".to_string(), "/auth/login".to_string()),
            ("register".to_string(), String::new()),
        ]);
        let routes = RouteTable::from_config("", &map);

        assert_eq!(routes.route(LOGIN).as_deref(), Some("/auth/login"));
        assert!(!routes.has(REGISTER));
    }
}

//! Visitor sessions.
//!
//! Guest pages only need to know *whether* a visitor is signed in. A session
//! is an HS256 token issued by the application's auth service, presented
//! either as `Authorization: Bearer <token>` or in the session cookie.
//! Anything else (no token, bad signature, expired) is a guest. Pages never
//! reject a request on session grounds.
//!
//! # Architecture
//!
//! - [`SessionVerifier`]: decodes tokens with a cached key
//! - [`Visitor`]: result attached to each request
//! - [`middleware::session_middleware`]: Axum layer that does the attaching

mod claims;
pub mod middleware;

pub use claims::{UserClaims, UserContext};

use std::fmt;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use crate::config::SessionConfig;

/// Who is making the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Visitor {
    #[default]
    Guest,
    Authenticated(UserContext),
}

impl Visitor {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserContext> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Guest => None,
        }
    }
}

/// Validates session tokens.
#[derive(Clone)]
pub struct SessionVerifier {
    key: Option<DecodingKey>,
    validation: Validation,
    cookie_name: String,
}

impl fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionVerifier")
            .field("enabled", &self.key.is_some())
            .field("cookie_name", &self.cookie_name)
            .finish_non_exhaustive()
    }
}

impl SessionVerifier {
    /// An empty `secret` disables sessions: every visitor is a guest.
    pub fn new(secret: &str, cookie_name: impl Into<String>) -> Self {
        let key = (!secret.is_empty()).then(|| DecodingKey::from_secret(secret.as_bytes()));
        Self {
            key,
            validation: Validation::new(Algorithm::HS256),
            cookie_name: cookie_name.into(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.jwt_secret, config.cookie_name.as_str())
    }

    pub fn is_enabled(&self) -> bool {
        self.key.is_some()
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Decode a token, `None` if it is not a valid session.
    pub fn verify(&self, token: &str) -> Option<UserContext> {
        let key = self.key.as_ref()?;
        match decode::<UserClaims>(token, key, &self.validation) {
            Ok(data) => Some(data.claims.into()),
            Err(e) => {
                debug!(name: "session.token.rejected", error = %e, "Session token rejected");
                None
            }
        }
    }

    /// Resolve the visitor from request headers.
    ///
    /// The bearer header takes precedence over the cookie.
    pub fn visitor(&self, headers: &HeaderMap) -> Visitor {
        if !self.is_enabled() {
            return Visitor::Guest;
        }

        let bearer = headers
            .typed_get::<Authorization<Bearer>>()
            .map(|auth| auth.token().to_owned());
        let token = bearer.or_else(|| {
            CookieJar::from_headers(headers)
                .get(&self.cookie_name)
                .map(|cookie| cookie.value().to_owned())
        });

        token
            .and_then(|token| self.verify(&token))
            .map_or(Visitor::Guest, Visitor::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret";

    fn token(secret: &str, exp: usize) -> String {
        let claims = UserClaims {
            sub: "pilot-7".to_string(),
            name: Some("Avery".to_string()),
            roles: None,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn far_future() -> usize {
        usize::try_from(chrono::Utc::now().timestamp()).unwrap() + 3600
    }

    fn headers(name: header::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        let verifier = SessionVerifier::new(SECRET, "sid");
        let headers = headers(
            header::AUTHORIZATION,
            &format!("Bearer {}", token(SECRET, far_future())),
        );

        let visitor = verifier.visitor(&headers);
        assert!(visitor.is_authenticated());
        assert_eq!(visitor.user().unwrap().user_id, "pilot-7");
    }

    #[test]
    fn test_cookie_token() {
        let verifier = SessionVerifier::new(SECRET, "sid");
        let headers = headers(
            header::COOKIE,
            &format!("theme=dark; sid={}", token(SECRET, far_future())),
        );

        assert!(verifier.visitor(&headers).is_authenticated());
    }

    #[test]
    fn test_wrong_secret_is_guest() {
        let verifier = SessionVerifier::new(SECRET, "sid");
        let headers = headers(
            header::AUTHORIZATION,
            &format!("Bearer {}", token("other-secret", far_future())),
        );

        assert_eq!(verifier.visitor(&headers), Visitor::Guest);
    }

    #[test]
    fn test_expired_token_is_guest() {
        let verifier = SessionVerifier::new(SECRET, "sid");
        let headers = headers(header::COOKIE, &format!("sid={}", token(SECRET, 1_000)));

        assert_eq!(verifier.visitor(&headers), Visitor::Guest);
    }

    #[test]
    fn test_disabled_without_secret() {
        let verifier = SessionVerifier::new("", "sid");
        let headers = headers(
            header::AUTHORIZATION,
            &format!("Bearer {}", token(SECRET, far_future())),
        );

        assert!(!verifier.is_enabled());
        assert_eq!(verifier.visitor(&headers), Visitor::Guest);
    }

    #[test]
    fn test_cookie_name_from_config() {
        let verifier = SessionVerifier::from_config(&SessionConfig {
            jwt_secret: SECRET.to_string(),
            cookie_name: "crew_session".to_string(),
        });
        let headers = headers(
            header::COOKIE,
            &format!("{}={}", verifier.cookie_name(), token(SECRET, far_future())),
        );

        assert_eq!(verifier.cookie_name(), "crew_session");
        assert!(verifier.visitor(&headers).is_authenticated());
    }

    #[test]
    fn test_no_credentials_is_guest() {
        let verifier = SessionVerifier::new(SECRET, "sid");
        assert_eq!(verifier.visitor(&HeaderMap::new()), Visitor::Guest);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserClaims {
    pub sub: String, // User ID (Subject)
    pub name: Option<String>,
    pub roles: Option<Vec<String>>,
    pub exp: usize, // Expiration time (UNIX timestamp)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: String,
    pub claims: UserClaims,
}

impl From<UserClaims> for UserContext {
    fn from(claims: UserClaims) -> Self {
        Self {
            user_id: claims.sub.clone(),
            claims,
        }
    }
}

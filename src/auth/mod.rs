use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roles granted elevated scheduling permissions.
pub const ADMIN_ROLES: [&str; 2] = ["facilitator", "supervisor"];

const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(sub: Uuid, name: String, roles: Vec<String>) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(SESSION_TTL_HOURS)).timestamp();

        Self {
            sub,
            name,
            roles,
            exp,
            iat: now.timestamp(),
        }
    }
}

/// Caller is an admin when the role set intersects the admin allow-list.
/// Empty role sets and plain participants are non-admin.
pub fn is_admin(roles: &[String]) -> bool {
    roles.iter().any(|r| ADMIN_ROLES.contains(&r.as_str()))
}

/// Capability resolved once at session load and carried by value from there,
/// instead of re-checking the role list at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Admin,
    Participant,
}

impl AccessLevel {
    pub fn from_roles(roles: &[String]) -> Self {
        if is_admin(roles) {
            AccessLevel::Admin
        } else {
            AccessLevel::Participant
        }
    }
}

/// Authenticated-caller context for one request.
///
/// `token` is the raw bearer string the caller presented; backend calls forward
/// it verbatim and must never take a token from any other client-supplied field.
#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: Uuid,
    pub name: String,
    pub roles: Vec<String>,
    pub access: AccessLevel,
    pub token: String,
}

impl Session {
    pub fn from_claims(claims: Claims, token: String) -> Self {
        let access = AccessLevel::from_roles(&claims.roles);
        Self {
            user_id: claims.sub,
            name: claims.name,
            roles: claims.roles,
            access,
            token,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("session secret not configured")]
    MissingSecret,
    #[error("invalid session token: {0}")]
    Invalid(String),
    #[error("token generation error: {0}")]
    Generation(String),
}

pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|e| TokenError::Invalid(e.to_string()))?;

    Ok(token_data.claims)
}

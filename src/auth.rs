use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use crate::fixtures::User;

pub const REFRESH_COOKIE: &str = "jwt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub id: u32,
    pub username: String,
    pub real_name: String,
    pub roles: Vec<String>,
    pub iat: u64,
    pub exp: u64,
}

impl AuthConfig {
    fn secret(&self, kind: TokenKind) -> &[u8] {
        match kind {
            TokenKind::Access => self.access_token_secret.as_bytes(),
            TokenKind::Refresh => self.refresh_token_secret.as_bytes(),
        }
    }

    fn ttl_secs(&self, kind: TokenKind) -> u64 {
        match kind {
            TokenKind::Access => self.access_token_ttl_secs,
            TokenKind::Refresh => self.refresh_token_ttl_secs,
        }
    }
}

fn now_secs() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

pub fn issue_token(config: &AuthConfig, user: &User, kind: TokenKind) -> AppResult<String> {
    let iat = now_secs();
    let claims = Claims {
        id: user.id,
        username: user.username.clone(),
        real_name: user.real_name.clone(),
        roles: user.roles.clone(),
        iat,
        exp: iat + config.ttl_secs(kind),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret(kind)),
    )?;
    Ok(token)
}

pub fn verify_token(config: &AuthConfig, token: &str, kind: TokenKind) -> AppResult<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret(kind)),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}

/// Token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

pub fn refresh_cookie(token: &str, max_age_secs: u64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=None; Secure",
        REFRESH_COOKIE, token, max_age_secs
    )
}

pub fn clear_refresh_cookie() -> String {
    refresh_cookie("", 0)
}

/// Resolves the bearer token to a known user. Every failure is a 401.
pub fn authenticate<'a>(headers: &HeaderMap, state: &'a AppState) -> AppResult<&'a User> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized)?;
    let claims = verify_token(&state.config.auth, token, TokenKind::Access).map_err(|e| {
        tracing::debug!("Rejected access token: {}", e);
        AppError::Unauthorized
    })?;
    state.fixtures.user(&claims.username).ok_or(AppError::Unauthorized)
}

/// Extractor for routes that need a signed-in user.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, state).map(|user| AuthUser(user.clone()))
    }
}

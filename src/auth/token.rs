//! Signed bearer tokens for the admin API.
//!
//! A token is `v1.<user_id>.<expires_at>.<nonce>.<signature>` where the
//! signature is HMAC-SHA256 over `<purpose>.<user_id>.<expires_at>.<nonce>`,
//! hex-encoded. The purpose string ("access" or "refresh") is part of the
//! signed payload, so a refresh token can never pass as an access token even
//! if the two secrets are configured to the same value. The nonce makes every
//! minted token distinct; without it, two refreshes inside the same second
//! would issue byte-identical tokens and defeat single-use rotation.
//! Verification is stateless; the refresh flow additionally checks the token
//! against the slot stored on the user row.

use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

use crate::errors::AppError;

pub const ACCESS_TTL_SECS: i64 = 15 * 60;
pub const REFRESH_TTL_SECS: i64 = 7 * 24 * 60 * 60;

const ACCESS_PURPOSE: &str = "access";
const REFRESH_PURPOSE: &str = "refresh";

/// Issue a short-lived access token for the given user.
pub fn mint_access(secret: &str, user_id: i64) -> Result<String, AppError> {
    mint(secret, ACCESS_PURPOSE, user_id, ACCESS_TTL_SECS)
}

/// Issue a long-lived refresh token. The caller is responsible for
/// persisting it as the user's single refresh-token slot.
pub fn mint_refresh(secret: &str, user_id: i64) -> Result<String, AppError> {
    mint(secret, REFRESH_PURPOSE, user_id, REFRESH_TTL_SECS)
}

/// Verify an access token and return the user id it carries.
pub fn verify_access(secret: &str, token: &str) -> Result<i64, AppError> {
    verify_at(secret, ACCESS_PURPOSE, token, Utc::now().timestamp())
}

/// Verify a refresh token and return the user id it carries.
pub fn verify_refresh(secret: &str, token: &str) -> Result<i64, AppError> {
    verify_at(secret, REFRESH_PURPOSE, token, Utc::now().timestamp())
}

fn mint(secret: &str, purpose: &str, user_id: i64, ttl_secs: i64) -> Result<String, AppError> {
    let expires_at = Utc::now().timestamp() + ttl_secs;
    let mut rng = rand::rng();
    let nonce = hex::encode(rng.random::<[u8; 8]>());
    mint_at(secret, purpose, user_id, expires_at, &nonce)
}

fn mint_at(
    secret: &str,
    purpose: &str,
    user_id: i64,
    expires_at: i64,
    nonce: &str,
) -> Result<String, AppError> {
    let sig = sign(secret, purpose, user_id, expires_at, nonce)?;
    Ok(format!("v1.{user_id}.{expires_at}.{nonce}.{sig}"))
}

fn verify_at(secret: &str, purpose: &str, token: &str, now: i64) -> Result<i64, AppError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 5 || parts[0] != "v1" {
        return Err(AppError::InvalidToken);
    }
    let user_id: i64 = parts[1].parse().map_err(|_| AppError::InvalidToken)?;
    let expires_at: i64 = parts[2].parse().map_err(|_| AppError::InvalidToken)?;

    // Check the signature before the expiry so a forged-but-expired token
    // reports the same error as a forged-and-fresh one.
    let expected = sign(secret, purpose, user_id, expires_at, parts[3])?;
    if !constant_time_eq(&expected, parts[4]) {
        return Err(AppError::InvalidToken);
    }
    if expires_at <= now {
        return Err(AppError::InvalidToken);
    }
    Ok(user_id)
}

fn sign(
    secret: &str,
    purpose: &str,
    user_id: i64,
    expires_at: i64,
    nonce: &str,
) -> Result<String, AppError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::Hash(e.to_string()))?;
    let payload = format!("{purpose}.{user_id}.{expires_at}.{nonce}");
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn mint_then_verify_returns_user_id() {
        let token = mint_access(SECRET, 42).unwrap();
        assert_eq!(verify_access(SECRET, &token).unwrap(), 42);
    }

    #[test]
    fn minting_twice_yields_distinct_tokens() {
        let a = mint_refresh(SECRET, 42).unwrap();
        let b = mint_refresh(SECRET, 42).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn refresh_token_is_not_an_access_token() {
        let token = mint_refresh(SECRET, 42).unwrap();
        assert!(verify_access(SECRET, &token).is_err());
        assert_eq!(verify_refresh(SECRET, &token).unwrap(), 42);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = mint_access(SECRET, 42).unwrap();
        assert!(verify_access("other-secret", &token).is_err());
    }

    #[test]
    fn tampered_user_id_is_rejected() {
        let token = mint_access(SECRET, 42).unwrap();
        let forged = token.replacen("42", "43", 1);
        assert!(verify_access(SECRET, &forged).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let past = Utc::now().timestamp() - 10;
        let token = mint_at(SECRET, "access", 42, past, "abcd").unwrap();
        assert!(verify_access(SECRET, &token).is_err());
    }

    #[test]
    fn expiry_cannot_be_extended_without_resigning() {
        let past = Utc::now().timestamp() - 10;
        let token = mint_at(SECRET, "access", 42, past, "abcd").unwrap();
        let future = Utc::now().timestamp() + 1000;
        let parts: Vec<&str> = token.split('.').collect();
        let forged = format!(
            "{}.{}.{}.{}.{}",
            parts[0], parts[1], future, parts[3], parts[4]
        );
        assert!(verify_access(SECRET, &forged).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        for bad in [
            "",
            "v1",
            "v1.a.b.c.d",
            "v1.1.2.3",
            "v2.1.99999999999.aa.bb",
            "not a token",
        ] {
            assert!(verify_access(SECRET, bad).is_err(), "accepted: {bad}");
        }
    }
}

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Identity claim carried by the portal's bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

lazy_static! {
    // Resolved once per process; never rotated at runtime.
    static ref ACCESS_TOKEN_SECRET: String = std::env::var("ACCESS_TOKEN_SECRET")
        .unwrap_or_else(|_| "default-secret-change-me".to_string());
}

const TOKEN_TTL_HOURS: i64 = 1;

/// Sign a 1-hour access token for the given email.
pub fn issue_access_token(email: &str) -> Result<String, String> {
    let now = Utc::now();
    let iat = now.timestamp() as usize;
    let exp = (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;

    let claims = Claims {
        email: email.to_string(),
        iat,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(ACCESS_TOKEN_SECRET.as_bytes()),
    )
    .map_err(|e| format!("Failed to generate token: {}", e))
}

/// Decode a bearer token, checking signature and expiry.
pub fn verify_access_token(token: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(ACCESS_TOKEN_SECRET.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Invalid token: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let token = issue_access_token("patient@example.com").unwrap();
        let claims = verify_access_token(&token).unwrap();

        assert_eq!(claims.email, "patient@example.com");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        // Well past the 60s leeway jsonwebtoken applies by default
        let iat = (Utc::now() - Duration::hours(3)).timestamp() as usize;
        let exp = (Utc::now() - Duration::hours(2)).timestamp() as usize;

        let claims = Claims {
            email: "late@example.com".to_string(),
            iat,
            exp,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(ACCESS_TOKEN_SECRET.as_bytes()),
        )
        .unwrap();

        assert!(verify_access_token(&token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = issue_access_token("patient@example.com").unwrap();

        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        parts[1] = format!("{}AA", parts[1]);
        let tampered = parts.join(".");

        assert!(verify_access_token(&tampered).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_access_token("not-a-jwt").is_err());
    }
}

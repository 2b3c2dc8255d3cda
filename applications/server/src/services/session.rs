/// Session service - signed tokens carrying the authenticated user
use crate::error::{Result, ServerError};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use porter_core::UserRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted session lifetime (one year)
pub const MAX_SESSION_MINUTES: u64 = 525_600;

#[derive(Debug, Clone)]
pub struct SessionService {
    secret: String,
    lifetime: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (username)
    pub uid: i64,    // Store record id
    pub email: String,
    pub iat: i64, // Issued at, doubles as the login time
    pub exp: i64, // Expiration time
    pub jti: String,
}

impl Claims {
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Login time as `dd/mm/YYYY HH:MM:SS` (UTC)
    pub fn login_time(&self) -> String {
        DateTime::<Utc>::from_timestamp(self.iat, 0)
            .map(|t| t.format("%d/%m/%Y %H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

impl SessionService {
    /// Lifetimes above `MAX_SESSION_MINUTES` are clamped to it
    pub fn new(secret: String, lifetime_minutes: u64) -> Self {
        let minutes = i64::try_from(lifetime_minutes.min(MAX_SESSION_MINUTES)).unwrap_or(0);
        Self {
            secret,
            lifetime: Duration::minutes(minutes),
        }
    }

    /// Session lifetime in seconds
    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime.num_seconds()
    }

    /// Issue a session token for an authenticated record
    pub fn issue(&self, record: &UserRecord) -> Result<(String, Claims)> {
        let now = Utc::now();
        let exp = now + self.lifetime;

        let claims = Claims {
            sub: record.username.clone(),
            uid: record.id,
            email: record.email.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = self.encode_claims(&claims)?;
        Ok((token, claims))
    }

    /// Verify and decode a session token
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        if token_data.claims.sub.is_empty() {
            return Err(ServerError::Unauthorized("Session has no subject".to_string()));
        }
        Ok(token_data.claims)
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String> {
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), claims, &encoding_key).map_err(signing_error)
    }
}

/// Failing to sign is a server fault, not a rejected session
fn signing_error(err: jsonwebtoken::errors::Error) -> ServerError {
    ServerError::Internal(format!("Failed to sign session token: {}", err))
}

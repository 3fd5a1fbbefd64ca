use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::app::AppError;
use crate::database::models::user::UserRecord;

/// Tokens expire one hour after issue
pub const TOKEN_LIFETIME_SECS: i64 = 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    username: String,
    id: String,
    iat: i64,
    exp: i64,
}

/// The principal bound into a verified bearer token
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: String,
    pub username: String,
}

/** Signing and verification keys for bearer tokens, derived once from the
process secret and shared through `AppState` */
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /** Issues a signed token binding the user's username and id */
    pub fn issue(&self, user: &UserRecord) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            username: user.username.clone(),
            id: user.id.clone(),
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| AppError::Storage(format!("token signing failed: {}", err)))
    }

    /** Verifies a presented token and yields the bound identity. Malformed,
    expired and wrongly-signed tokens all come back as the same
    authentication failure. */
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AppError::Authentication(String::from("token invalid")))?;

        Ok(Identity {
            id: data.claims.id,
            username: data.claims.username,
        })
    }
}

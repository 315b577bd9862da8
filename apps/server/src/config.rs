//! Server configuration, read from the environment at startup.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Runtime configuration.
///
/// `TRADESIM_JWT_SECRET` holds the base64-encoded token signing key. When it
/// is unset a random key is generated, which invalidates all sessions on
/// restart.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub jwt_secret: Vec<u8>,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let listen_addr =
            std::env::var("TRADESIM_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let db_path =
            std::env::var("TRADESIM_DB_PATH").unwrap_or_else(|_| "tradesim.db".to_string());

        let jwt_secret = match std::env::var("TRADESIM_JWT_SECRET") {
            Ok(encoded) => BASE64
                .decode(encoded.trim())
                .map_err(|e| anyhow::anyhow!("TRADESIM_JWT_SECRET is not valid base64: {e}"))?,
            Err(_) => {
                tracing::warn!(
                    "TRADESIM_JWT_SECRET not set; using a random key, sessions will not survive a restart"
                );
                let mut bytes = [0u8; 32];
                OsRng.fill_bytes(&mut bytes);
                bytes.to_vec()
            }
        };

        let token_ttl_hours = std::env::var("TRADESIM_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        Ok(Self {
            listen_addr,
            db_path,
            jwt_secret,
            token_ttl_hours,
        })
    }
}

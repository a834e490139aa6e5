//! Embedded default database URI.
//!
//! The compiled-in value is base64 text supplied at build time through
//! `FALLBACK_CONNECTOR_EMBEDDED_DB_URI`. Without it the crate embeds an
//! encoding of [`LOCAL_DEFAULT_DATABASE_URI`]; no credentials live in source.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Used whenever the embedded value cannot be decoded.
pub const LOCAL_DEFAULT_DATABASE_URI: &str = "mongodb://localhost:27017/copytrading";

/// base64 of [`LOCAL_DEFAULT_DATABASE_URI`].
const PLACEHOLDER_EMBEDDED_DB_URI: &str = "bW9uZ29kYjovL2xvY2FsaG9zdDoyNzAxNy9jb3B5dHJhZGluZw==";

/// The embedded value as compiled into this binary (still encoded).
pub fn embedded_database_uri() -> &'static str {
    option_env!("FALLBACK_CONNECTOR_EMBEDDED_DB_URI").unwrap_or(PLACEHOLDER_EMBEDDED_DB_URI)
}

/// Decode an embedded value, falling back to the local default.
///
/// Never fails: malformed base64 or non UTF-8 content yields
/// [`LOCAL_DEFAULT_DATABASE_URI`].
pub fn decode_embedded(encoded: &str) -> String {
    match STANDARD.decode(encoded.trim()) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::debug!(error = %e, "Embedded URI is not UTF-8, using local default");
                LOCAL_DEFAULT_DATABASE_URI.to_string()
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, "Embedded URI is not valid base64, using local default");
            LOCAL_DEFAULT_DATABASE_URI.to_string()
        }
    }
}

//! Ordered candidate lists for each operation class.

use crate::endpoint::candidate::Endpoint;
use crate::endpoint::encoding::decode_embedded;

/// Scheme prefixes a database candidate must start with.
pub const ACCEPTED_DATABASE_SCHEMES: [&str; 2] = ["mongodb://", "mongodb+srv://"];

/// Public Polygon RPC endpoints tried after the configured primary, in order.
pub const PUBLIC_RPC_FALLBACKS: [&str; 3] = [
    "https://polygon.llamarpc.com",
    "https://polygon-bor-rpc.publicnode.com",
    "https://rpc.ankr.com/polygon",
];

/// Return true if `uri` is non-empty and uses an accepted database scheme.
pub fn is_valid_database_uri(uri: &str) -> bool {
    !uri.is_empty() && Endpoint::new(uri).has_scheme(&ACCEPTED_DATABASE_SCHEMES)
}

/// Build the database candidate list: decoded embedded value, then the override.
///
/// Invalid entries are dropped. Duplicates are kept.
pub fn resolve_database_candidates(embedded_encoded: &str, uri_override: Option<&str>) -> Vec<Endpoint> {
    let decoded = decode_embedded(embedded_encoded);

    [Some(decoded.as_str()), uri_override]
        .into_iter()
        .flatten()
        .filter_map(|raw| {
            if is_valid_database_uri(raw) {
                Some(Endpoint::new(raw))
            } else {
                tracing::debug!(candidate = %Endpoint::new(raw), "Dropping database candidate with unsupported scheme");
                None
            }
        })
        .collect()
}

/// Build the RPC candidate list: the primary, then each fallback in order.
///
/// Empty entries are dropped; URLs are not parsed here.
pub fn resolve_rpc_candidates<S: AsRef<str>>(primary: Option<&str>, fallbacks: &[S]) -> Vec<Endpoint> {
    primary
        .into_iter()
        .chain(fallbacks.iter().map(AsRef::as_ref))
        .enumerate()
        .filter_map(|(position, raw)| {
            let url = raw.trim();
            if url.is_empty() {
                tracing::debug!(position = position, "Dropping empty RPC candidate");
                None
            } else {
                Some(Endpoint::new(url))
            }
        })
        .collect()
}

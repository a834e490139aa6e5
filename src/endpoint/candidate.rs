//! A single candidate connection target.

use std::fmt;
use url::Url;

/// An immutable connection descriptor (database URI or RPC URL).
///
/// `Display` never prints a password. Use [`Endpoint::as_str`] when the
/// full string has to be handed to a driver.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Wrap a raw connection string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw connection string, credentials included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return true if the string starts with one of the given scheme prefixes.
    pub fn has_scheme(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|prefix| self.0.starts_with(prefix))
    }

    /// A printable form with the password replaced.
    pub fn redacted(&self) -> String {
        match Url::parse(&self.0) {
            Ok(mut url) if url.password().is_some() => {
                // set_password only fails for cannot-be-a-base URLs, which carry no password
                let _ = url.set_password(Some("****"));
                url.to_string()
            }
            Ok(_) => self.0.clone(),
            Err(_) => redact_userinfo(&self.0),
        }
    }
}

/// Fallback redaction for strings `url` cannot parse.
fn redact_userinfo(raw: &str) -> String {
    let Some(scheme_end) = raw.find("://") else {
        return raw.to_string();
    };
    let rest = &raw[scheme_end + 3..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => match rest[..at].find(':') {
            Some(colon) => format!(
                "{}{}:****{}",
                &raw[..scheme_end + 3],
                &rest[..colon],
                &rest[at..]
            ),
            None => raw.to_string(),
        },
        None => raw.to_string(),
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Endpoint").field(&self.redacted()).finish()
    }
}

impl From<&str> for Endpoint {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Endpoint {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

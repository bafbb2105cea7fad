//! # Credential resolution
//!
//! The bearer token is resolved fresh on every outgoing request rather than
//! captured at client construction, so a login that lands a token file while
//! the app is running is picked up without a restart.
//!
//! Resolution order: persisted token file, then the configured dev fallback.
//! Absence is a legal state — the request goes out unauthenticated and the
//! backend decides what that is worth.

use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

/// Resolves the bearer credential attached to outgoing requests.
///
/// Injected into the `ApiClient` at construction so tests can substitute a
/// fixed token (or none) without touching the filesystem.
pub trait CredentialProvider: Send + Sync {
    /// Returns the token to present, or `None` to dispatch unauthenticated.
    fn bearer_token(&self) -> Option<String>;
}

/// Production provider: a persisted token file with a config-supplied
/// fallback. The file stands in for the browser-world `access_token` slot
/// and wins over the fallback when both exist.
pub struct StoredTokenProvider {
    token_path: Option<PathBuf>,
    fallback: Option<String>,
}

impl StoredTokenProvider {
    pub fn new(token_path: Option<PathBuf>, fallback: Option<String>) -> Self {
        Self { token_path, fallback }
    }

    /// Default token file location: `~/.taskdeck/access_token`.
    pub fn default_token_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".taskdeck").join("access_token"))
    }

    fn persisted_token(&self) -> Option<String> {
        let path = self.token_path.as_ref()?;
        match fs::read_to_string(path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    warn!("Token file {} is empty, ignoring", path.display());
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read token file {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl CredentialProvider for StoredTokenProvider {
    fn bearer_token(&self) -> Option<String> {
        if let Some(token) = self.persisted_token() {
            debug!("Using persisted access token");
            return Some(token);
        }
        if self.fallback.is_some() {
            debug!("Using fallback dev token");
        }
        self.fallback.clone()
    }
}

/// A fixed credential, mainly for tests and one-off scripting.
pub struct StaticCredential(pub Option<String>);

impl CredentialProvider for StaticCredential {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_token_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "taskdeck-token-test-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let mut f = fs::File::create(&path).unwrap();
        write!(f, "{}", contents).unwrap();
        path
    }

    #[test]
    fn test_persisted_token_wins_over_fallback() {
        let path = temp_token_file("stored-token\n");
        let provider =
            StoredTokenProvider::new(Some(path.clone()), Some("fallback-token".to_string()));
        assert_eq!(provider.bearer_token().as_deref(), Some("stored-token"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let provider = StoredTokenProvider::new(
            Some(PathBuf::from("/nonexistent/taskdeck/access_token")),
            Some("fallback-token".to_string()),
        );
        assert_eq!(provider.bearer_token().as_deref(), Some("fallback-token"));
    }

    #[test]
    fn test_empty_file_counts_as_absent() {
        let path = temp_token_file("   \n");
        let provider = StoredTokenProvider::new(Some(path.clone()), None);
        assert!(provider.bearer_token().is_none());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_no_sources_means_no_token() {
        let provider = StoredTokenProvider::new(None, None);
        assert!(provider.bearer_token().is_none());
    }

    #[test]
    fn test_static_credential() {
        assert_eq!(
            StaticCredential(Some("abc".to_string())).bearer_token().as_deref(),
            Some("abc")
        );
        assert!(StaticCredential(None).bearer_token().is_none());
    }
}

use std::fs;
use std::path::PathBuf;

use tracing::debug;

/// Persists the opaque session token to client-local storage so a new
/// process can resume an established session.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store rooted at the console's data directory (`~/.opsdeck/token`).
    pub fn default_location() -> Result<Self, crate::errors::ConfigError> {
        Ok(Self::new(crate::config::console_dir()?.join("token")))
    }

    /// Load the persisted token. A missing or empty file means no session.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim().to_string();
                if token.is_empty() { None } else { Some(token) }
            }
            Err(_) => None,
        }
    }

    pub fn save(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        debug!(event = "console.session.token_persisted");
        Ok(())
    }

    /// Remove the persisted token. Removing an absent file is a no-op.
    pub fn clear(&self) -> std::io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

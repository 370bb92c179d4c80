//! Configuration directory resolution
//!
//! The console never reads the environment directly; it asks an injected
//! [`ConfigPaths`] where its files live.

use std::path::{Path, PathBuf};

/// Application directory name under `~/.config`
pub const APP_DIR_NAME: &str = "cll";

/// Directory name of the base layer shared with other tools
pub const SHARED_DIR_NAME: &str = "shared";

/// Alias file name inside both directories
pub const ALIASES_FILE: &str = "aliases";

/// Front-end settings file name inside the application directory
pub const CONFIG_FILE: &str = "config.json";

/// Where configuration files are read from and written to
pub trait ConfigPaths: Send + Sync {
    /// Per-user application directory, holding `config.json` and `aliases`
    fn config_dir(&self) -> PathBuf;

    /// Shared directory holding the read-only base-layer `aliases`
    fn shared_dir(&self) -> PathBuf;

    /// Application-local alias file
    fn local_aliases(&self) -> PathBuf {
        self.config_dir().join(ALIASES_FILE)
    }

    /// Shared alias file
    fn shared_aliases(&self) -> PathBuf {
        self.shared_dir().join(ALIASES_FILE)
    }

    /// Front-end settings file
    fn config_file(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE)
    }
}

/// Directories under the user's home, `~/.config/cll` and `~/.config/shared`
///
/// Falls back to the current directory when no home directory is known.
#[derive(Debug, Clone)]
pub struct HomeConfigPaths {
    base: PathBuf,
}

impl HomeConfigPaths {
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_home(&home)
    }

    /// Resolve against an explicit home directory
    pub fn with_home(home: &Path) -> Self {
        Self {
            base: home.join(".config"),
        }
    }
}

impl Default for HomeConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPaths for HomeConfigPaths {
    fn config_dir(&self) -> PathBuf {
        self.base.join(APP_DIR_NAME)
    }

    fn shared_dir(&self) -> PathBuf {
        self.base.join(SHARED_DIR_NAME)
    }
}

/// Explicit directories, used by tests and `--config-dir`
#[derive(Debug, Clone)]
pub struct FixedConfigPaths {
    config_dir: PathBuf,
    shared_dir: PathBuf,
}

impl FixedConfigPaths {
    pub fn new(config_dir: impl Into<PathBuf>, shared_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            shared_dir: shared_dir.into(),
        }
    }
}

impl ConfigPaths for FixedConfigPaths {
    fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    fn shared_dir(&self) -> PathBuf {
        self.shared_dir.clone()
    }
}

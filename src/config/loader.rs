//! Configuration File Loading
//!
//! Reads and writes the alias files, loads `config.json`, and creates the
//! configuration directory with default content on first run.

use super::paths::ConfigPaths;
use super::ConsoleConfig;
use crate::aliases::{is_valid_alias_name, AliasTable};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Header written at the top of every saved alias file
const ALIASES_HEADER: &str = "# Console Aliases\n# Format: alias_name=command\n";

/// Aliases written to a freshly created directory
const DEFAULT_ALIASES: [(&str, &str); 5] = [
    ("ll", "ls -la"),
    ("la", "ls -la"),
    ("...", "cd ../.."),
    ("cls", "clear"),
    ("q", "quit"),
];

/// Loads and saves console configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse an alias file
    ///
    /// A missing file yields an empty mapping. Invalid UTF-8 is replaced
    /// rather than rejected. Blank lines, `#` comments and lines without `=`
    /// are skipped; only the first `=` splits a line.
    pub fn load_aliases(path: &Path) -> Result<BTreeMap<String, String>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No alias file at {}", path.display());
                return Ok(BTreeMap::new());
            }
            Err(e) => {
                return Err(Error::ConfigLoadFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        // Alias files may be written by other tools in a legacy encoding
        let content = String::from_utf8_lossy(&bytes);
        Ok(parse_aliases(&content, path))
    }

    /// Write `aliases` to `path`, replacing the file
    pub fn save_aliases(path: &Path, aliases: &BTreeMap<String, String>) -> Result<()> {
        let mut content = String::from(ALIASES_HEADER);
        for (name, value) in aliases {
            content.push_str(name);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }

        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
        };
        write().map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!("Saved {} aliases to {}", aliases.len(), path.display());
        Ok(())
    }

    /// Build the alias table: shared file first, then the local file on top
    ///
    /// An unreadable shared file is logged and treated as empty; only the
    /// local file can fail the load.
    pub fn load_alias_table(paths: &dyn ConfigPaths) -> Result<AliasTable> {
        let shared_file = paths.shared_aliases();
        let shared = match Self::load_aliases(&shared_file) {
            Ok(shared) => shared,
            Err(e) => {
                // The shared layer belongs to other tools; never fail on it
                warn!("{}. Ignoring shared aliases", e);
                BTreeMap::new()
            }
        };
        let mut table = AliasTable::from(shared);
        table.merge(Self::load_aliases(&paths.local_aliases())?);
        info!(
            "Loaded {} aliases from {}",
            table.len(),
            paths.config_dir().display()
        );
        Ok(table)
    }

    /// Load and validate `config.json`, defaults when the file is missing
    pub fn load_console_config(path: &Path) -> Result<ConsoleConfig> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ConsoleConfig::default()),
            Err(e) => {
                return Err(Error::ConfigLoadFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        let config: ConsoleConfig =
            serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: "JSON".to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Create the configuration directory with default files
    ///
    /// Does nothing when the directory already exists. Returns whether it
    /// was created.
    pub fn bootstrap(paths: &dyn ConfigPaths) -> Result<bool> {
        let config_dir = paths.config_dir();
        if config_dir.exists() {
            return Ok(false);
        }

        fs::create_dir_all(&config_dir)?;

        let config_file = paths.config_file();
        if !config_file.exists() {
            let json = serde_json::to_string_pretty(&ConsoleConfig::default())?;
            fs::write(&config_file, json + "\n")?;
        }

        let alias_file = paths.local_aliases();
        if !alias_file.exists() {
            let defaults: BTreeMap<String, String> = DEFAULT_ALIASES
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            Self::save_aliases(&alias_file, &defaults)?;
        }

        info!("Created configuration directory {}", config_dir.display());
        Ok(true)
    }
}

fn parse_aliases(content: &str, path: &Path) -> BTreeMap<String, String> {
    let mut aliases = BTreeMap::new();

    for line in content.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        if !is_valid_alias_name(name) {
            warn!("Skipping alias '{}' in {}: invalid name", name, path.display());
            continue;
        }

        aliases.insert(name.to_string(), value.to_string());
    }

    aliases
}

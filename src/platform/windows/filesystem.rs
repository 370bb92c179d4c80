//! Windows program lookup

use crate::error::{Error, Result};
use crate::platform::traits::ProgramLocator;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Extensions `cmd` will launch directly
const EXECUTABLE_EXTENSIONS: [&str; 5] = ["exe", "bat", "cmd", "ps1", "com"];

pub struct WindowsFilesystem;

impl WindowsFilesystem {
    pub fn new() -> Self {
        Self
    }

    /// Scan PATH by hand when `where` is unavailable
    fn scan_path(&self, program: &str) -> Option<PathBuf> {
        let path_env = env::var_os("PATH")?;
        env::split_paths(&path_env).find_map(|dir| {
            EXECUTABLE_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{}.{}", program, ext)))
                .find(|candidate| is_executable(candidate))
        })
    }
}

fn is_executable(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| EXECUTABLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

impl ProgramLocator for WindowsFilesystem {
    fn find_program(&self, program: &str) -> Result<Option<PathBuf>> {
        let output = Command::new("where")
            .arg(program)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output();

        if let Ok(output) = output {
            if output.status.success() {
                let listing =
                    String::from_utf8(output.stdout).map_err(|e| Error::ProgramLookupFailed {
                        program: program.to_string(),
                        reason: format!("unreadable where output: {}", e),
                    })?;

                // 'where' lists every match, the first one wins
                let first = listing.lines().next().unwrap_or("").trim();
                if !first.is_empty() && Path::new(first).exists() {
                    return Ok(Some(PathBuf::from(first)));
                }
            }
        }

        Ok(self.scan_path(program))
    }
}

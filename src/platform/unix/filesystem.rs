//! Unix program lookup

use crate::error::{Error, Result};
use crate::platform::traits::ProgramLocator;
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub struct UnixFilesystem;

impl UnixFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ProgramLocator for UnixFilesystem {
    fn find_program(&self, program: &str) -> Result<Option<PathBuf>> {
        // Use 'which' to find the program
        let output = Command::new("which")
            .arg(program)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| Error::ProgramLookupFailed {
                program: program.to_string(),
                reason: format!("failed to run which: {}", e),
            })?;

        if !output.status.success() {
            return Ok(None);
        }

        let path_str = String::from_utf8_lossy(&output.stdout);
        let first_line = path_str.lines().next().unwrap_or("").trim();
        if first_line.is_empty() {
            return Ok(None);
        }

        let path = PathBuf::from(first_line);
        if path.exists() {
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }
}

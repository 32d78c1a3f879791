//! Where rendered tables go: standard output or an output file.
//!
//! An output file is truncated once, when the target is prepared, and then
//! appended to once per table. Each append opens and closes the file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::error::BlasetablesError;
use crate::Result;

/// How long to wait before clobbering an existing output file
pub const OVERWRITE_GRACE_PERIOD: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Prepare a target before any table is rendered.
    ///
    /// With no path, tables go to standard output. Otherwise the parent
    /// directory must exist; an existing file is overwritten after a
    /// warning and a `grace` pause.
    pub fn prepare(path: Option<&Path>, grace: Duration) -> Result<Self> {
        let Some(path) = path else {
            return Ok(OutputTarget::Stdout);
        };

        if path.exists() {
            warn!("overwriting existing file {}", path.display());
            if !grace.is_zero() {
                warn!("waiting {} seconds before proceeding", grace.as_secs());
                thread::sleep(grace);
            }
        } else {
            let parent = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            if !parent.is_dir() {
                let shown = fs::canonicalize(&parent).unwrap_or(parent);
                return Err(BlasetablesError::DirectoryNotFound(shown));
            }
        }

        fs::write(path, "")?;
        debug!("writing tables to {}", path.display());
        Ok(OutputTarget::File(path.to_path_buf()))
    }

    /// Emit one rendered table.
    pub fn emit(&self, text: &str) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(text.as_bytes())?;
                handle.flush()?;
            }
            OutputTarget::File(path) => {
                let mut file = OpenOptions::new().append(true).open(path)?;
                file.write_all(text.as_bytes())?;
            }
        }
        Ok(())
    }
}

//! Command executors that handle the actual logic for each command

pub mod apply;
pub mod export;
pub mod import;
pub mod list;
pub mod render;
pub mod spin;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use miette::Result;

use crate::error::WheelError;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Write `content` to `path`, or to stdout when `to_stdout` is set
pub(crate) fn write_output(path: &Path, to_stdout: bool, content: &str) -> Result<(), WheelError> {
    if to_stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    fs::write(path, content).map_err(|source| WheelError::FileWriteError {
        path: path.to_path_buf(),
        source,
    })
}

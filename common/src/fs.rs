use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub trait FsExt {
    /// Resolves a relative path against the current working directory. Absolute paths are
    /// returned unchanged.
    fn relative_to_cwd(&self) -> Result<PathBuf>;
}

impl<P: AsRef<Path> + ?Sized> FsExt for P {
    fn relative_to_cwd(&self) -> Result<PathBuf> {
        let path = self.as_ref();

        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        let cwd_dir = std::env::current_dir().context("Failed to read the working directory")?;

        Ok(cwd_dir.join(path))
    }
}

// src/file.rs

use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::Path,
};

use crate::error::{Error, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::file(
            dir,
            std::io::Error::new(ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::file(dir, e))?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Write `contents` to a file that must not exist yet.
pub fn write_new(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::file(path, e))?;
    file.write_all(contents.as_bytes()).map_err(|e| Error::file(path, e))
}

/// Create an empty file unless one is already there.
/// Returns whether a file was created.
pub fn touch(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    write_new(path, "")?;
    Ok(true)
}

/// Create or truncate `path` with `contents`.
pub fn overwrite(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| Error::file(path, e))
}

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file(path, e))
}

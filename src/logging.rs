//! File logging setup.
//!
//! The terminal UI owns stdout, so tracing output goes to
//! `~/.treasure-hunt/treasure-hunt.log` unless a path is given.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "treasure-hunt.log";
pub const LOG_ENV_VAR: &str = "TREASURE_HUNT_LOG";
const DEFAULT_FILTER: &str = "info";

/// Get the ~/.treasure-hunt/ directory path, creating it if needed.
pub fn app_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".treasure-hunt");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn default_log_path() -> io::Result<PathBuf> {
    Ok(app_dir()?.join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build the env filter from `TREASURE_HUNT_LOG`, then `RUST_LOG`, then `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Returns the file being written.
pub fn init(path: Option<&Path>) -> io::Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_log_path()?,
    };
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = std::env::temp_dir().join("treasure_hunt_log_test");
        let path = dir.join("nested").join("hunt.log");
        let _ = fs::remove_dir_all(&dir);

        open_log_file(&path).expect("log file should open");
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}

//! Log file location and tracing setup.
//!
//! The terminal belongs to the UI, so tracing output goes to a file. A log
//! file that cannot be opened never stops the quiz; the caller gets the
//! error back and shows it as a warning instead.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// `<cache dir>/compquest/compquest.log`, or `./compquest.log` when the
/// platform has no cache directory.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("compquest"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("compquest.log")
}

/// Open `path` for appending. Creates parent directories if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Route tracing to `path` (RUST_LOG controls the level, default `info`).
///
/// On error nothing is installed and events are dropped.
pub fn init(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_in_app_dir() {
        let path = default_log_path();
        assert_eq!(path.file_name().unwrap(), "compquest.log");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("compquest.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unopenable_path_is_error_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is expected.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let err = open_log_file(&blocker.join("compquest.log")).unwrap_err();
        assert!(err.to_string().contains("creating log directory"));
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compquest.log");
        std::fs::write(&path, "first\n").unwrap();
        {
            use std::io::Write;
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "second").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}

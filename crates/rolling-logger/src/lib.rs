//! Rolling File Logger
//!
//! Daily log files for Tauri applications: `<app>-<YYYY-MM-DD>.log` in the
//! app log directory, oldest files pruned past the retention window.
//! Installs a tracing-subscriber pipeline; `log` macros are captured
//! through the tracing-log bridge.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;

/// Days of logs kept on disk
const MAX_LOG_FILES: usize = 7;

/// Initialize the global logger, writing to a dated file under `log_dir`.
///
/// Safe to call once per process; a second call reports the subscriber
/// conflict as an error instead of panicking.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> io::Result<()> {
    let log_dir = log_dir.as_ref();
    fs::create_dir_all(log_dir)?;
    prune_old_logs(log_dir, app_name)?;

    #[cfg(target_os = "android")]
    return init_android(app_name);

    #[cfg(not(target_os = "android"))]
    init_file(log_dir, app_name)
}

#[cfg(target_os = "android")]
fn init_android(app_name: &str) -> io::Result<()> {
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(app_name)
            .with_max_level(log::LevelFilter::Info),
    );
    Ok(())
}

#[cfg(not(target_os = "android"))]
fn init_file(log_dir: &Path, app_name: &str) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(current_log_path(log_dir, app_name))?;

    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

/// Today's log file path
pub fn current_log_path(log_dir: &Path, app_name: &str) -> PathBuf {
    log_dir.join(format!("{}-{}.log", app_name, Local::now().format("%Y-%m-%d")))
}

/// Delete dated log files beyond the retention window.
/// File names sort lexicographically by date, so plain sorting suffices.
fn prune_old_logs(log_dir: &Path, app_name: &str) -> io::Result<()> {
    let prefix = format!("{}-", app_name);
    let mut logs: Vec<PathBuf> = fs::read_dir(log_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(&prefix) && n.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();

    logs.sort();
    if logs.len() >= MAX_LOG_FILES {
        for stale in &logs[..logs.len() + 1 - MAX_LOG_FILES] {
            let _ = fs::remove_file(stale);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_keeps_retention_window() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=10 {
            let name = format!("App-2026-01-{:02}.log", day);
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        // unrelated files are left alone
        fs::write(dir.path().join("other.txt"), b"x").unwrap();

        prune_old_logs(dir.path(), "App").unwrap();

        let mut remaining: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(".log"))
            .collect();
        remaining.sort();
        assert_eq!(remaining.len(), MAX_LOG_FILES - 1);
        assert_eq!(remaining.first().unwrap(), "App-2026-01-05.log");
        assert!(dir.path().join("other.txt").exists());
    }

    #[test]
    fn test_init_logger_writes_to_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        init_logger(dir.path(), "TestApp").unwrap();
        log::info!("hello from the test");

        let path = current_log_path(dir.path(), "TestApp");
        assert!(path.exists());
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("hello from the test"));
    }
}

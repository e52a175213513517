//! Logging utilities for FireTracker
//! Sets up the env_logger backend and handles log file cleanup for 7-day retention

use crate::utils::get_logs_dir;
use log::info;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::time::{Duration, SystemTime};

const LOG_RETENTION_DAYS: u64 = 7;

/// Installs the global logger. `RUST_LOG` overrides the default `info` filter.
/// Logs go to a dated file in the logs dir unless `to_stderr` is set.
pub fn init_logging(to_stderr: bool) -> Result<(), String> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if !to_stderr {
        let logs_dir = get_logs_dir();
        fs::create_dir_all(&logs_dir)
            .map_err(|e| format!("Failed to create logs directory {:?}: {}", logs_dir, e))?;

        let path = logs_dir.join(format!(
            "firetracker-{}.log",
            chrono::Local::now().format("%Y-%m-%d")
        ));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| format!("Failed to open log file {:?}: {}", path, e))?;

        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .map_err(|e| format!("Failed to initialize logger: {}", e))
}

pub fn cleanup_old_logs() {
    cleanup_logs_in(&get_logs_dir(), SystemTime::now());
}

fn cleanup_logs_in(logs_dir: &Path, now: SystemTime) {
    if !logs_dir.exists() {
        return;
    }

    let retention = Duration::from_secs(LOG_RETENTION_DAYS * 24 * 60 * 60);

    if let Ok(entries) = fs::read_dir(logs_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "log") {
                if let Ok(meta) = fs::metadata(&path) {
                    if let Ok(modified) = meta.modified() {
                        if let Ok(age) = now.duration_since(modified) {
                            if age > retention {
                                if fs::remove_file(&path).is_ok() {
                                    info!("Cleaned up old log: {:?}", path.file_name());
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_expired_log_files_are_removed() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("firetracker-2024-01-01.log");
        let other = dir.path().join("history.jsonl");
        fs::write(&log, "old").unwrap();
        fs::write(&other, "keep").unwrap();

        // Nothing is old yet
        cleanup_logs_in(dir.path(), SystemTime::now());
        assert!(log.exists());

        let later = SystemTime::now() + Duration::from_secs((LOG_RETENTION_DAYS + 1) * 24 * 60 * 60);
        cleanup_logs_in(dir.path(), later);
        assert!(!log.exists());
        assert!(other.exists());
    }
}

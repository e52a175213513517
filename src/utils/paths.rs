use log::info;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

static APP_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

pub const DATA_DIR_ENV: &str = "FIRETRACKER_DATA_DIR";

pub fn get_app_data_dir() -> PathBuf {
    APP_DATA_DIR
        .get_or_init(|| {
            if let Ok(dir) = env::var(DATA_DIR_ENV) {
                if !dir.trim().is_empty() {
                    return PathBuf::from(dir);
                }
            }
            let base_dir = dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."));
            base_dir.join("FireTracker")
        })
        .clone()
}

pub fn get_data_dir() -> PathBuf {
    get_app_data_dir().join("data")
}

pub fn get_logs_dir() -> PathBuf {
    get_app_data_dir().join("logs")
}

pub fn get_settings_json_path() -> PathBuf {
    get_data_dir().join("settings.json")
}

pub fn get_history_jsonl_path() -> PathBuf {
    get_data_dir().join("history.jsonl")
}

pub fn initialize_data_directories() -> Result<(), String> {
    let directories = [get_data_dir(), get_logs_dir()];

    for dir in &directories {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                format!("Failed to create directory {:?}: {}", dir, e)
            })?;
            info!("Created directory: {:?}", dir);
        }
    }

    info!("Data directories initialized at: {:?}", get_app_data_dir());
    Ok(())
}

pub mod auth;
pub mod commands;
pub mod error;
mod file_manager;
pub mod history;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod source;
pub mod state;
pub mod utils;

use file_manager::{initialize_json_file, initialize_json_lines_file};
use models::Settings;
use utils::{get_history_jsonl_path, get_settings_json_path, initialize_data_directories};

pub use error::{LookupError, StoreError};
pub use state::AppState;

/// Creates the data directories, `settings.json` and the history table if
/// they are missing, then returns the settings on disk.
pub fn initialize_app_data() -> Result<Settings, String> {
    // Create directory structure
    initialize_data_directories()?;

    initialize_json_file(&get_settings_json_path(), &Settings::default())?;

    let history_path = get_history_jsonl_path();
    initialize_json_lines_file(&history_path)
        .map_err(|e| format!("Failed to create history file {:?}: {}", history_path, e))?;

    let settings = commands::settings::get_settings()?;

    log::info!("App data initialized successfully");
    Ok(settings)
}

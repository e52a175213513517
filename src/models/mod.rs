// Data models (structs)
pub mod auth;
pub mod history;
pub mod profile;
pub mod settings;

pub use auth::*;
pub use history::*;
pub use profile::*;
pub use settings::*;

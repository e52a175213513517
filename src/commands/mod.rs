// Command handlers for the dashboard frontend - one file per domain
pub mod auth;
pub mod history;
pub mod search;
pub mod settings;

use clap::{Parser, Subcommand};
use firetracker_lib::auth::CallerClaim;
use firetracker_lib::commands::auth::{get_auth_status, require_identity};
use firetracker_lib::commands::history::get_search_history;
use firetracker_lib::commands::search::{search_player, SearchResponse};
use firetracker_lib::commands::settings::{get_settings, update_settings, UpdateSettingsParams};
use firetracker_lib::models::SourceMode;
use firetracker_lib::{initialize_app_data, logging, AppState};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "firetracker")]
#[command(about = "Look up player profiles and browse your search history", long_about = None)]
struct Cli {
    /// E-mail asserted by the sign-in provider
    #[arg(long, global = true)]
    identity: Option<String>,

    /// Display name asserted by the sign-in provider
    #[arg(long, global = true)]
    name: Option<String>,

    /// Log to stderr instead of the log file
    #[arg(long, global = true)]
    log_stderr: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a player by UID
    Search {
        uid: String,
        #[arg(long)]
        region: Option<String>,
    },
    /// Show your past searches, newest first
    History {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show who you are signed in as
    Whoami,
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    Show,
    Set {
        #[arg(long, value_parser = parse_source_mode)]
        source_mode: Option<SourceMode>,
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        timeout: Option<u64>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        mock_latency_ms: Option<u64>,
        /// 0 shows all rows
        #[arg(long)]
        history_limit: Option<u32>,
        /// Comma separated; pass an empty string for demo mode
        #[arg(long, value_delimiter = ',')]
        allowed_emails: Option<Vec<String>>,
    },
}

fn parse_source_mode(s: &str) -> Result<SourceMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "live" => Ok(SourceMode::Live),
        "mock" => Ok(SourceMode::Mock),
        other => Err(format!("expected live or mock, got {}", other)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode output: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode, String> {
    let settings = initialize_app_data()?;

    let command = match cli.command {
        Command::Settings { command } => {
            match command {
                SettingsCommand::Show => print_json(&get_settings()?)?,
                SettingsCommand::Set {
                    source_mode,
                    endpoint,
                    timeout,
                    region,
                    mock_latency_ms,
                    history_limit,
                    allowed_emails,
                } => {
                    let params = UpdateSettingsParams {
                        source_mode,
                        live_endpoint: endpoint,
                        request_timeout_secs: timeout,
                        default_region: region,
                        mock_latency_ms,
                        history_limit,
                        allowed_emails: allowed_emails
                            .map(|emails| emails.into_iter().filter(|e| !e.trim().is_empty()).collect()),
                    };
                    print_json(&update_settings(params)?)?;
                }
            }
            return Ok(ExitCode::SUCCESS);
        }
        other => other,
    };

    let state = AppState::open_default(settings)?;
    let claim = cli.identity.map(|email| CallerClaim {
        email,
        name: cli.name,
    });

    if let Command::Whoami = command {
        print_json(&get_auth_status(&state, claim.as_ref()))?;
        return Ok(ExitCode::SUCCESS);
    }

    let identity = match require_identity(&state, claim.as_ref()) {
        Ok(identity) => identity,
        Err(status) => {
            print_json(&status)?;
            return Ok(ExitCode::from(2));
        }
    };

    match command {
        Command::Search { uid, region } => {
            let response = search_player(&state, &identity, &uid, region.as_deref());
            print_json(&response)?;
            if let SearchResponse::Failed { .. } = response {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::History { limit } => {
            print_json(&get_search_history(&state, &identity, limit))?;
        }
        Command::Whoami | Command::Settings { .. } => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.log_stderr) {
        eprintln!("{}", e);
    }
    logging::cleanup_old_logs();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! civic - CivicTrack CLI
//!
//! A command-line client for reporting environmental incidents and
//! tracking their status.
//!
//! # Examples
//!
//! ```bash
//! # Log in
//! civic auth login --email amina@example.com --password secret
//!
//! # Report an incident at explicit coordinates
//! civic report submit --title "Illegal dumping" --description "Bags by the canal" \
//!     --category waste --lat 30.1 --lng 69.2
//!
//! # List open reports as map markers
//! civic report list --status new --view map
//! ```

mod auth_commands;
mod cli;
mod commands;
mod error;
mod logger;
mod render;
mod report_commands;

#[cfg(test)]
mod tests;

use crate::{
    auth_commands::AuthCommands,
    cli::Cli,
    commands::Commands,
    error::{CliError, CliResult},
    report_commands::ReportCommands,
};

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use ct_client::{
    ApiClient, CommandPositionSource, FixCache, GeocoderClient, GeolocationError, ReportBoard,
    ReportForm, ViewMode, acquire_fix,
};
use ct_config::Config;
use ct_core::{IncidentCategory, NewAccount, PhotoAttachment, Position, StatusFilter, User};
use ct_session::{SessionManager, SessionStore};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let log_file = config.logging.file.as_ref().map(PathBuf::from);
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    match run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: &Config) -> CliResult<()> {
    // Explicit flag > configured base URL
    let base_url = cli.server.as_deref().unwrap_or(&config.api.base_url);

    let api = ApiClient::new(base_url, Duration::from_secs(config.api.timeout_secs))?;
    let store = SessionStore::open(config.session_dir()?);
    let mut manager = SessionManager::open(api, store);
    manager.init();

    match cli.command {
        // Auth commands
        Commands::Auth { action } => match action {
            AuthCommands::Register {
                username,
                email,
                password,
                anonymous,
            } => {
                let account = NewAccount {
                    username,
                    email,
                    password,
                    is_anonymous: anonymous,
                };
                let user = manager.register(&account).await?;
                print_user(user, cli.pretty)
            }
            AuthCommands::Login { email, password } => {
                let user = manager.login(&email, &password).await?;
                print_user(user, cli.pretty)
            }
            AuthCommands::Logout => {
                manager.logout()?;
                println!("Logged out.");
                Ok(())
            }
            AuthCommands::Whoami => match manager.current_user() {
                Some(user) => print_user(user, cli.pretty),
                None => {
                    println!("Not logged in.");
                    Ok(())
                }
            },
        },

        // Report commands
        Commands::Report { action } => match action {
            ReportCommands::Submit {
                title,
                description,
                category,
                photo,
                lat,
                lng,
                search,
                locate,
            } => {
                let args = SubmitArgs {
                    title,
                    description,
                    category,
                    photo,
                    coordinates: lat.zip(lng),
                    search,
                    locate,
                };
                submit(&manager, config, args).await
            }
            ReportCommands::List { status, view } => {
                let user_id = require_user(&manager)?;

                let mut board = ReportBoard::new();
                board.load(manager.api(), &user_id).await?;
                board.filter = status.parse::<StatusFilter>()?;
                board.view = if view == "map" {
                    ViewMode::Map
                } else {
                    ViewMode::Grid
                };

                match board.view {
                    ViewMode::Grid => render::grid(&board),
                    ViewMode::Map => render::map(&board),
                }
                Ok(())
            }
            ReportCommands::Show { id } => {
                let user_id = require_user(&manager)?;

                let mut board = ReportBoard::new();
                board.load(manager.api(), &user_id).await?;

                match board.select(&id) {
                    Some(report) => {
                        render::detail(report);
                        Ok(())
                    }
                    None => Err(CliError::usage(format!("no report with id {}", id))),
                }
            }
        },
    }
}

/// The submit command's fields, with the coordinate pair already zipped.
struct SubmitArgs {
    title: String,
    description: String,
    category: String,
    photo: Option<PathBuf>,
    coordinates: Option<(f64, f64)>,
    search: Option<String>,
    locate: bool,
}

/// Compose a draft, resolve its location through the requested producer,
/// and upload it.
async fn submit(manager: &SessionManager, config: &Config, args: SubmitArgs) -> CliResult<()> {
    let mut form = ReportForm::new();
    form.draft.title = args.title;
    form.draft.description = args.description;
    form.draft.category = args.category.parse::<IncidentCategory>()?;

    if let Some(path) = args.photo {
        let bytes = std::fs::read(&path).map_err(|e| CliError::Io {
            path: path.clone(),
            source: e,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("photo"));
        form.draft.photo = Some(PhotoAttachment::new(file_name, bytes));
    }

    if let Some((lat, lng)) = args.coordinates {
        form.picker.pick_on_map(Position::new(lat, lng));
    } else if let Some(ref query) = args.search {
        let geocoder = GeocoderClient::new(&config.geocoder.base_url, &config.geocoder.user_agent);
        let position = geocoder.search(query).await?;
        form.picker.apply_search_result(position);
    } else if args.locate {
        let source = CommandPositionSource::from_config(&config.geolocation)
            .ok_or(GeolocationError::Unsupported)?;
        let mut cache = FixCache::new();
        let position = acquire_fix(&source, &config.geolocation, &mut cache).await?;
        form.picker.apply_device_fix(position);
    } else {
        return Err(CliError::usage(
            "a location is required: pass --lat/--lng, --search or --locate",
        ));
    }

    form.submit(manager.api(), manager.session()).await?;
    println!("Report submitted.");
    Ok(())
}

fn require_user(manager: &SessionManager) -> CliResult<String> {
    manager
        .current_user()
        .map(|user| user.id.clone())
        .ok_or_else(|| CliError::usage("not logged in; run `civic auth login` first"))
}

fn print_user(user: &User, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(user)?
    } else {
        serde_json::to_string(user)?
    };
    println!("{}", json);
    Ok(())
}

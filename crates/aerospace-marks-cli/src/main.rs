//! aerospace-marks CLI
//!
//! i3/sway-style marks for the AeroSpace window manager: attach text labels
//! to windows, then focus, summon, list or inspect them by label.

mod commands;
mod config;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing::warn;

use aerospace_marks_ipc::{AeroSpaceClient, IpcError, WindowManager};
use aerospace_marks_store::SqliteMarkStore;

use commands::validate_identifier;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "aerospace-marks")]
#[command(about = "Marks for the AeroSpace window manager, i3/sway style")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mark a window with a specific identifier
    ///
    /// Marks are arbitrary labels used to identify certain windows and jump
    /// back to them later. Each identifier can only be set on a single
    /// window at a time since it acts as a unique handle. By default, mark
    /// sets the identifier as the only mark on the window; --add appends it
    /// to the window's current marks instead, and --toggle removes the
    /// identifier if it is already marked anywhere.
    Mark {
        /// The identifier to attach
        identifier: String,

        /// Add the mark instead of replacing the window's current marks
        #[arg(long)]
        add: bool,

        /// Remove the mark if it is already set, otherwise add it
        #[arg(long)]
        toggle: bool,

        /// Window ID to mark (default: focused window)
        #[arg(long)]
        window_id: Option<i64>,
    },

    /// Unmark one or more windows by identifier
    ///
    /// Removes each identifier from the marks table. If no identifier is
    /// given, all marks are removed.
    Unmark {
        /// The identifiers to remove; empty removes everything
        identifiers: Vec<String>,
    },

    /// Get a window by mark (identifier)
    ///
    /// Prints `<window_id> | <app_name> | <window_title>` unless one of the
    /// field selectors is given.
    Get {
        /// The identifier to resolve
        identifier: String,

        /// Print only the window [i]D
        #[arg(short = 'i', long)]
        window_id: bool,

        /// Print only the window [t]itle
        #[arg(short = 't', long)]
        window_title: bool,

        /// Print only the [a]pp name
        #[arg(short = 'a', long)]
        app_name: bool,
    },

    /// List all marked windows
    #[command(alias = "ls")]
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Move focus to a window by mark (identifier)
    Focus {
        /// The identifier of the window to focus
        identifier: String,
    },

    /// Summon a marked window to the current workspace
    Summon {
        /// The identifier of the window to summon
        identifier: String,

        /// Focus the window after summoning
        #[arg(short, long)]
        focus: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Display configuration and environment variable help
    Info,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    logging::init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Mark {
            identifier,
            add,
            toggle,
            window_id,
        } => {
            let identifier = validate_identifier(&identifier)?;
            let mut store = open_store()?;
            let mut client = connect_client().await?;

            let result =
                commands::mark::run(&mut store, &mut client, &identifier, add, toggle, window_id)
                    .await;

            release_client(client).await;
            release_store(store);
            result
        }

        Commands::Unmark { identifiers } => {
            let mut store = open_store()?;

            let result = commands::unmark::run(&mut store, &identifiers);

            release_store(store);
            result
        }

        Commands::Get {
            identifier,
            window_id,
            window_title,
            app_name,
        } => {
            let identifier = validate_identifier(&identifier)?;
            let store = open_store()?;
            let mut client = connect_client().await?;

            let result = commands::get::run(
                &store,
                &mut client,
                &identifier,
                window_id,
                window_title,
                app_name,
            )
            .await;

            release_client(client).await;
            release_store(store);
            result
        }

        Commands::List { output } => {
            let store = open_store()?;
            let mut client = connect_client().await?;

            let result = commands::list::run(&store, &mut client, output).await;

            release_client(client).await;
            release_store(store);
            result
        }

        Commands::Focus { identifier } => {
            let identifier = validate_identifier(&identifier)?;
            let store = open_store()?;
            let mut client = connect_client().await?;

            let result = commands::focus::run(&store, &mut client, &identifier).await;

            release_client(client).await;
            release_store(store);
            result
        }

        Commands::Summon {
            identifier,
            focus,
            output,
        } => {
            let identifier = validate_identifier(&identifier)?;
            let store = open_store()?;
            let mut client = connect_client().await?;

            let result =
                commands::summon::run(&store, &mut client, &identifier, focus, output).await;

            release_client(client).await;
            release_store(store);
            result
        }

        Commands::Info => commands::info::run(),
    }
}

fn open_store() -> miette::Result<SqliteMarkStore> {
    SqliteMarkStore::open_default().into_diagnostic()
}

async fn connect_client() -> miette::Result<AeroSpaceClient> {
    AeroSpaceClient::connect().await.into_diagnostic()
}

/// Warn about old servers, then close the connection.
///
/// The version check is informational only: by this point the command has
/// already run, and the server version was observed on its response, so the
/// check costs no extra round trip on the happy path.
async fn release_client(mut client: AeroSpaceClient) {
    if let Err(err @ IpcError::IncompatibleVersion { .. }) = client.check_server_version().await {
        warn!("{err}");
    }

    if let Err(err) = client.close().await {
        warn!("failed to close aerospace connection: {err}");
    }
}

fn release_store(store: SqliteMarkStore) {
    if let Err(err) = store.close() {
        warn!("failed to close mark database: {err}");
    }
}

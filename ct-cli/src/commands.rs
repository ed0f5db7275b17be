use crate::{auth_commands::AuthCommands, report_commands::ReportCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Account and session operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Incident report operations
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
}

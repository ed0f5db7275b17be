use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Compose and upload an incident report
    Submit {
        /// Report title
        #[arg(long)]
        title: String,

        /// What happened
        #[arg(long)]
        description: String,

        /// Incident category (default: waste)
        #[arg(long, default_value = "waste", value_parser = ["waste", "water", "air", "deforestation", "other"])]
        category: String,

        /// Photo evidence to attach
        #[arg(long)]
        photo: Option<PathBuf>,

        /// Incident latitude (use together with --lng)
        #[arg(long, requires = "lng", conflicts_with_all = ["search", "locate"])]
        lat: Option<f64>,

        /// Incident longitude (use together with --lat)
        #[arg(long, requires = "lat")]
        lng: Option<f64>,

        /// Resolve the location from a place name
        #[arg(long, conflicts_with = "locate")]
        search: Option<String>,

        /// Acquire the location from the configured device fix command
        #[arg(long)]
        locate: bool,
    },

    /// List your reports
    List {
        /// Filter by status
        #[arg(long, default_value = "all", value_parser = ["all", "new", "verified", "in_progress", "resolved"])]
        status: String,

        /// Render as a card grid or as map markers
        #[arg(long, default_value = "grid", value_parser = ["grid", "map"])]
        view: String,
    },

    /// Show one report in full
    Show {
        /// Report ID
        id: String,
    },
}

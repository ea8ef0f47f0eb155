use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeline
/// CLI application to browse a location-history export day by day
#[derive(Parser)]
#[command(
    name = "rtimeline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Split a location-history export by calendar day, inspect a day and export it",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List every day found in the export with its statistics
    Days {
        /// Timeline export (.json)
        file: String,
    },

    /// Show the month calendar, highlighting days with data
    Calendar {
        /// Timeline export (.json)
        file: String,

        #[arg(
            long,
            short,
            value_name = "YYYY-MM",
            help = "Month to display (default: current month)"
        )]
        month: Option<String>,

        #[arg(
            long,
            value_name = "YYYY-MM-DD",
            help = "Mark a day as selected and show its statistics"
        )]
        select: Option<String>,
    },

    /// Show the statistics of one day
    Show {
        /// Timeline export (.json)
        file: String,

        /// Day to inspect (YYYY-MM-DD)
        date: String,
    },

    /// Export the records of one day
    Export {
        /// Timeline export (.json)
        file: String,

        /// Day to export (YYYY-MM-DD)
        date: String,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Destination file")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

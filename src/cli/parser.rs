use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendview
/// Read-only viewer for an attendance sheet: worked hours and monthly totals
#[derive(Parser)]
#[command(
    name = "rattendview",
    version = env!("CARGO_PKG_VERSION"),
    about = "A read-only attendance viewer: worked hours per entry and monthly totals from a spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Read rows from a local CSV file instead of the configured source
    #[arg(global = true, long = "source-file", value_name = "CSV")]
    pub source_file: Option<String>,

    /// Print diagnostic logs on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the detail of one month, its total and the totals of every month
    Report {
        /// Show only rows of this user id (exact match)
        #[arg(long, short = 'u')]
        user: Option<String>,

        /// Take the user id from a query string: `user_id` wins, otherwise the first parameter
        #[arg(long, short = 'q', conflicts_with = "user", value_name = "QUERY")]
        query: Option<String>,

        /// Month to show (YYYY-MM). Default: the most recent month in the sheet
        #[arg(long, short = 'm', value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// List the months available for selection
    Months {
        /// Show only months with rows of this user id
        #[arg(long, short = 'u')]
        user: Option<String>,
    },

    /// Export the detail of a month or the monthly totals
    ///
    /// CSV and JSON use fixed English field names (date, clock_in, clock_out,
    /// duration, comment / month, total); XLSX uses the configured labels.
    Export {
        /// csv and json keep fixed field names, xlsx uses the display labels
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export the per-month totals instead of the detail rows
        #[arg(long)]
        monthly: bool,

        #[arg(long, short = 'u')]
        user: Option<String>,

        #[arg(long, short = 'm', value_name = "YYYY-MM")]
        month: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}

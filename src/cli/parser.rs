use crate::export::ExportFormat;
use crate::models::weights::WeighMode;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for caretally
#[derive(Parser)]
#[command(
    name = "caretally",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute weighted care-time per party from an ICS calendar",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Report knobs shared by `report` and `export`. Every field overrides the
/// corresponding config value for this run only.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the .ics calendar file
    pub file: String,

    /// Year to report on (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Months to include, e.g. "1,2,7-9" (default: all twelve)
    #[arg(long, value_name = "SPEC")]
    pub months: Option<String>,

    /// Weekday coefficient (> 0)
    #[arg(long = "weekday-weight")]
    pub weekday_weight: Option<f64>,

    /// Weekend coefficient (> 0)
    #[arg(long = "weekend-weight")]
    pub weekend_weight: Option<f64>,

    /// Weighting strategy
    #[arg(long, value_enum)]
    pub mode: Option<WeighMode>,

    /// Also tally weekend days per party (joint days count 0.5 each)
    #[arg(long = "weekend-days")]
    pub weekend_days: bool,

    /// Classification pattern for party A (matched against normalized names)
    #[arg(long = "pattern-a", value_name = "REGEX")]
    pub pattern_a: Option<String>,

    /// Classification pattern for party B
    #[arg(long = "pattern-b", value_name = "REGEX")]
    pub pattern_b: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file with defaults
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Compute and print the per-month care-time report
    Report {
        #[command(flatten)]
        args: ReportArgs,
    },

    /// Compute the report and write it to a file
    Export {
        #[command(flatten)]
        args: ReportArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}

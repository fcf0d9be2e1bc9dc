use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rLabourRatio
/// CLI application to compare hourly labour cost against sales
#[derive(Parser)]
#[command(
    name = "rlabourratio",
    version = env!("CARGO_PKG_VERSION"),
    about = "Allocate shift labour cost and sales into hourly slots and find the best and worst hours",
    long_about = None
)]
pub struct Cli {
    /// Use a custom configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the shifts CSV path
    #[arg(global = true, long = "shifts", value_name = "FILE")]
    pub shifts: Option<String>,

    /// Override the transactions CSV path
    #[arg(global = true, long = "transactions", value_name = "FILE")]
    pub transactions: Option<String>,

    /// Print diagnostic logs to stderr
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the best and worst hour of the day
    Analyze {
        #[arg(long = "tables", help = "Also print labour, sales and ratio for every hour")]
        tables: bool,

        #[arg(long = "json", help = "Print the full analysis as JSON")]
        json: bool,
    },

    /// Print labour cost per hour
    Labour,

    /// Print sales per hour
    Sales,

    /// Print the labour/sales ratio per hour
    Ratio,

    /// Export the hourly report
    Export {
        #[arg(
            long,
            value_enum,
            help = "Output format (default: inferred from the file extension)"
        )]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Manage the configuration file (view, create or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

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
}

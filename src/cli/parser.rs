use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ticktrack
#[derive(Parser)]
#[command(
    name = "ticktrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Offline ticket timer: start, stop and keep a history of what you worked on",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second history)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// View or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use for --edit")]
        editor: Option<String>,
    },

    /// Time a ticket interactively: Enter stops, then save or cancel
    Track {
        /// Ticket name; asked for when omitted
        #[arg(long, short)]
        name: Option<String>,
    },

    /// Show saved tickets, most recent first
    List {
        #[arg(long, short = 'n', help = "Show only the N most recent tickets")]
        limit: Option<usize>,
    },

    /// Delete a saved ticket (asks for confirmation)
    Del {
        /// Ticket id as shown by `list`
        id: i64,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export all tickets
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Zip the backup")]
        compress: bool,
    },
}

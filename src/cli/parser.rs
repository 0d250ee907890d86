use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for flightlog
#[derive(Parser)]
#[command(
    name = "flightlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pilot flight-log sheet: loads, flight time, fuel, totals, CSV and PDF export",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a separate logbook)
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

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Edit the sheet header
    Header {
        #[arg(long, help = "Pilot name")]
        pilot: Option<String>,

        #[arg(long, help = "Drop zone")]
        dz: Option<String>,

        #[arg(long = "reg", help = "Aircraft registration")]
        registration: Option<String>,

        #[arg(long, help = "Sheet date (YYYY-MM-DD or 'today')")]
        date: Option<String>,

        #[arg(long, help = "Starting fuel on board (lbs)")]
        fuel: Option<String>,
    },

    /// Add the next load row, or the ferry row
    Add {
        #[arg(long, help = "Add the FERRY row instead of a numbered load")]
        ferry: bool,
    },

    /// Set one field of a row
    Set {
        /// Load number, or FERRY
        load: String,

        /// Field: takeoff, landing, block, fob, fuel-burned, pax, ldg,
        /// follow-up, remarks (CSV column names work too)
        field: String,

        /// New value; "" clears the field
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Stamp takeoff or landing with the current time
    Now {
        /// Load number, or FERRY
        load: String,

        /// takeoff | landing
        field: String,
    },

    /// Blank a row, keeping its load number and block time
    Clear {
        /// Load number, or FERRY
        load: String,
    },

    /// Delete a row
    Del {
        /// Load number, or FERRY
        load: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Set the duty window (allowed on a closed sheet)
    Duty {
        #[arg(long, help = "Duty start (HH:MM, \"\" to clear)")]
        start: Option<String>,

        #[arg(long, help = "Duty end (HH:MM, \"\" to clear)")]
        end: Option<String>,

        #[arg(long = "now-start", conflicts_with = "start")]
        now_start: bool,

        #[arg(long = "now-end", conflicts_with = "end")]
        now_end: bool,
    },

    /// Show the sheet with totals
    List {
        #[arg(long, short, help = "Only show rows containing this text")]
        search: Option<String>,
    },

    /// Close the sheet: no more edits until a new flight is started
    Close,

    /// Start a new flight: drop all rows and reopen the sheet
    New {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Replace all rows with the content of a CSV file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the sheet
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the sheet (PDF preview, falling back to text)
    Print {
        #[arg(long, value_name = "FILE", help = "Where to write the PDF")]
        file: Option<String>,

        #[arg(long, help = "Print as text without trying a PDF viewer")]
        text: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

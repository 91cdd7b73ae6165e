use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dailycheck
/// CLI application to keep the daily standup ticket log in SQLite
#[derive(Parser)]
#[command(
    name = "dailycheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily standup log: record, filter, summarize and export support tickets using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a process to a day
    Add {
        /// Process / ticket number
        process: String,

        /// Short title
        title: String,

        /// Day of the standup (DD/MM/YYYY, YYYY-MM-DD, today, yesterday, tomorrow)
        #[arg(long, short)]
        date: Option<String>,

        #[arg(long)]
        client: Option<String>,

        #[arg(long)]
        owner: Option<String>,

        /// attended | forwarded | completed | reviewed | unclear
        #[arg(long, short)]
        status: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List the processes of a day
    List {
        /// Day to show (default: today)
        #[arg(long, short)]
        date: Option<String>,

        /// Status filter, or "all"
        #[arg(long, short)]
        status: Option<String>,

        /// Text contained in process number, title, client or owner
        #[arg(long, short = 'q')]
        search: Option<String>,
    },

    /// Show a single process, notes included
    Show {
        id: i64,
    },

    /// Edit a process: given fields replace the stored ones
    Edit {
        id: i64,

        #[arg(long, short)]
        date: Option<String>,

        #[arg(long)]
        process: Option<String>,

        #[arg(long)]
        title: Option<String>,

        /// Empty string clears the client
        #[arg(long)]
        client: Option<String>,

        /// Empty string clears the owner
        #[arg(long)]
        owner: Option<String>,

        #[arg(long, short)]
        status: Option<String>,

        /// Empty string clears the notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete one or more processes by id
    Del {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Move one or more processes to another status
    Move {
        /// Target status
        status: String,

        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Print the standup summary of a day
    Summary {
        #[arg(long, short)]
        date: Option<String>,

        /// Also write the summary to this file
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite the summary file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the filtered processes of a day
    Export {
        #[arg(long, short)]
        date: Option<String>,

        #[arg(long, short)]
        status: Option<String>,

        #[arg(long, short = 'q')]
        search: Option<String>,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: standup_<date>.<format>)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import processes from a ';'-separated export file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Put every imported process on this day
        #[arg(long = "force-date")]
        force_date: Option<String>,
    },

    /// Copy every process of the previous day onto the given day
    Duplicate {
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,
    },
}

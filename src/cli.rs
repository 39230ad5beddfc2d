//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `timetabler`.
#[derive(Debug, Parser)]
#[command(name = "timetabler", version, about = "Assemble and share university timetables")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the degrees offered in an academic term.
    Degrees {
        /// Academic term, e.g. "2º Semestre 2019/2020".
        #[arg(long)]
        term: String,
    },
    /// List the courses of a degree.
    Courses {
        /// Catalog id of the degree.
        degree_id: String,
        /// Academic term, e.g. "2º Semestre 2019/2020".
        #[arg(long)]
        term: String,
    },
    /// Rebuild a timetable from a shareable state string and save it.
    Restore {
        /// Shareable state string (or full URL).
        state: String,
    },
    /// Print the shareable URL for the saved timetable.
    Share,
    /// Report which classes cover the selection of a shareable string.
    Classes {
        /// Shareable state string (or full URL).
        state: String,
    },
}

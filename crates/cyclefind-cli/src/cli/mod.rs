//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints plain text lines to stdout. `Json` prints a single JSON
/// object to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `cyclefind` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every structurally distinct cycle in a graph, one per line.
    Cycles {
        /// Path to a JSON adjacency file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// String placed between node identifiers in human output.
        #[arg(long, short = 'd', default_value = " ", value_name = "D")]
        delimiter: String,
    },

    /// Print the shortest cycle that starts and ends at one node.
    Shortest {
        /// Path to a JSON adjacency file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The node the cycle must return to.
        #[arg(value_name = "NODE")]
        node: String,
        /// String placed between node identifiers in human output.
        #[arg(long, short = 'd', default_value = " ", value_name = "D")]
        delimiter: String,
    },

    /// Print the adjacency lists and summary counts of a graph.
    Inspect {
        /// Path to a JSON adjacency file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

impl Command {
    /// The input argument shared by every subcommand.
    pub fn file(&self) -> &PathOrStdin {
        match self {
            Command::Cycles { file, .. }
            | Command::Shortest { file, .. }
            | Command::Inspect { file } => file,
        }
    }
}

/// Root CLI struct for the `cyclefind` binary.
///
/// All global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "cyclefind",
    version,
    about = "Shortest-cycle search over JSON adjacency graphs",
    long_about = "Finds, for every node of a directed graph, the shortest cycle that\n\
                  returns to it, and reports the structurally distinct cycles."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Log errors only (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail such as input sizes and each kept or discarded
    /// cycle (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `CYCLEFIND_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "CYCLEFIND_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Append log records to this file instead of writing them to stderr.
    ///
    /// Can also be set via the `CYCLEFIND_LOG_FILE` environment variable.
    #[arg(long, global = true, env = "CYCLEFIND_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

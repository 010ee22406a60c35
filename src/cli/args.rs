use std::path::PathBuf;

use clap::Parser;

use crate::{Commands, IdStrategy};

/// Main CLI application arguments and command structure
#[derive(Parser, Debug)]
#[clap(
    name = "notepad",
    version,
    about = "Keep short text notes in a local JSON file"
)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Path to the notes file (default: notes.json)
    #[clap(short = 'f', long, value_parser)]
    pub file: Option<PathBuf>,

    /// How ids are assigned to new notes
    #[clap(long, value_enum)]
    pub id_strategy: Option<IdStrategy>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommand to run; the interactive menu starts when omitted
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

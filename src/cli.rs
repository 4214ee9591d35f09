use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::MissingNamePolicy;

/// Reads author ids from stdin, one per line, and prints `<id> = <name> <<id>@<domain>>`.
#[derive(Debug, Parser)]
#[command(
    name = "authormap",
    version,
    about = "Map author ids to display names and contact addresses"
)]
pub struct Cli {
    #[arg(long, help = "Base URL the author id is appended to")]
    pub base_url: Option<String>,
    #[arg(long, help = "Domain used for synthesized addresses")]
    pub domain: Option<String>,
    #[arg(
        long,
        value_enum,
        help = "What to do when a profile page has no display name"
    )]
    pub on_missing_name: Option<MissingNamePolicy>,
    #[arg(long, value_name = "SECS", help = "Per-request timeout (default: none)")]
    pub timeout: Option<u64>,
    #[arg(long, help = "Read settings from this JSON file")]
    pub config: Option<PathBuf>,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parfind")]
#[command(version, about = "Search a directory for one or more filenames, one concurrent search per name")]
#[command(after_help = "\
OUTPUT:
  <task>: <filename>: <absolute path>        one line per match (stdout)
  <task>: <filename>: Not found in <dir>     when a name has no match (stdout)
  Unreadable directories are reported on stderr; permission-denied ones are skipped.

ENVIRONMENT:
  RUST_LOG    overrides the log filter (logs go to stderr)")]
struct Cli {
    /// Search directories recursively
    #[arg(short = 'R')]
    recursive: bool,

    /// Match filenames ignoring ASCII case
    #[arg(short = 'i')]
    case_insensitive: bool,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory to search
    #[arg(value_name = "SEARCHPATH")]
    root: PathBuf,

    /// Filenames to look for
    #[arg(value_name = "FILENAME", required = true)]
    filenames: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let spec = parfind::search(cli.root)
        .targets(cli.filenames)
        .recursive(cli.recursive)
        .case_insensitive(cli.case_insensitive)
        .build();

    parfind::run_search(spec).into()
}

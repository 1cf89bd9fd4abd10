mod bump;
mod compare;
mod config;
mod inspect;
mod sort;
mod validate;

use config::SemvrConfig;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "semvr")]
#[command(about = "Parse, validate, compare and bump semantic versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that versions are valid and print their canonical form
    Validate(validate::ValidateArgs),

    /// Compare two versions by precedence
    Compare(compare::CompareArgs),

    /// Increase the major, minor or patch version
    Bump(bump::BumpArgs),

    /// Sort versions by precedence
    Sort(sort::SortArgs),

    /// Show the parts of a version
    Inspect(inspect::InspectArgs),
}

/// RUST_LOG takes precedence over -v
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = SemvrConfig::load_from_cwd()?.unwrap_or_default();

    match args.command {
        Commands::Validate(args) => validate::execute(args),
        Commands::Compare(args) => compare::execute(args),
        Commands::Bump(args) => bump::execute(args, &config),
        Commands::Sort(args) => sort::execute(args, &config),
        Commands::Inspect(args) => inspect::execute(args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_compare_with_operator() {
        let args = Args::try_parse_from(["semvr", "compare", "1.0.0", "2.0.0", "--op", "<="]).unwrap();
        match args.command {
            Commands::Compare(compare) => {
                assert_eq!(compare.op, Some(semvr::Operator::LessThanOrEqual));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_operator() {
        assert!(Args::try_parse_from(["semvr", "compare", "1.0.0", "2.0.0", "--op", "=>"]).is_err());
    }

    #[test]
    fn test_parse_bump_conflicting_flags() {
        assert!(Args::try_parse_from([
            "semvr",
            "bump",
            "minor",
            "1.0.0",
            "--keep-suffixes",
            "--clear-suffixes"
        ])
        .is_err());
    }

    #[test]
    fn test_parse_verbosity() {
        let args = Args::try_parse_from(["semvr", "-vv", "sort", "1.0.0", "0.1.0"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}

//! Sort command - order versions by precedence.

use anyhow::Result;
use clap::Args;

use semvr::Semver;

use crate::config::SemvrConfig;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

/// The `--reverse` flag or `[output] reverse` in semvr.toml sorts descending
pub fn sorted(args: &SortArgs, config: &SemvrConfig) -> semvr::Result<Vec<String>> {
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    if args.reverse || config.output.reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    }
}

pub fn execute(args: SortArgs, config: &SemvrConfig) -> Result<i32> {
    for version in sorted(&args, config)? {
        println!("{}", version);
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;

    fn args(reverse: bool) -> SortArgs {
        SortArgs {
            versions: vec![
                "1.0.0".to_string(),
                "1.0.0-beta.11".to_string(),
                "0.9.0".to_string(),
                "1.0.0-beta.2".to_string(),
            ],
            reverse,
        }
    }

    fn config(reverse: bool) -> SemvrConfig {
        SemvrConfig {
            output: OutputConfig { reverse },
            ..Default::default()
        }
    }

    #[test]
    fn test_sorted_ascending() {
        assert_eq!(
            sorted(&args(false), &config(false)).unwrap(),
            vec!["0.9.0", "1.0.0-beta.2", "1.0.0-beta.11", "1.0.0"]
        );
    }

    #[test]
    fn test_sorted_reverse_flag() {
        assert_eq!(
            sorted(&args(true), &config(false)).unwrap(),
            vec!["1.0.0", "1.0.0-beta.11", "1.0.0-beta.2", "0.9.0"]
        );
    }

    #[test]
    fn test_sorted_reverse_from_config() {
        assert_eq!(
            sorted(&args(false), &config(true)).unwrap(),
            vec!["1.0.0", "1.0.0-beta.11", "1.0.0-beta.2", "0.9.0"]
        );
    }

    #[test]
    fn test_execute_rejects_invalid() {
        let args = SortArgs {
            versions: vec!["1.0.0".to_string(), "1.0".to_string()],
            reverse: false,
        };
        let err = execute(args, &SemvrConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Malformed version string \"1.0\"");
    }
}

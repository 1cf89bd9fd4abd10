//! Validate command - check version strings against the SemVer grammar.

use anyhow::Result;
use clap::Args;
use console::style;

use semvr::Version;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Version strings to check
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Only set the exit code, print nothing
    #[arg(short, long)]
    pub quiet: bool,
}

/// One line of output per input; `Err` carries the error message
pub fn check(versions: &[String]) -> Vec<(String, std::result::Result<String, String>)> {
    versions
        .iter()
        .map(|input| {
            let result = Version::parse(input)
                .map(|version| version.to_string())
                .map_err(|e| e.to_string());
            (input.clone(), result)
        })
        .collect()
}

pub fn execute(args: ValidateArgs) -> Result<i32> {
    let mut exit_code = 0;

    for (input, result) in check(&args.versions) {
        match result {
            Ok(canonical) => {
                if !args.quiet {
                    println!("{} {}", style("valid").green(), canonical);
                }
            }
            Err(message) => {
                exit_code = 1;
                if !args.quiet {
                    println!("{} {}: {}", style("invalid").red(), input, message);
                }
            }
        }
    }

    Ok(exit_code)
}

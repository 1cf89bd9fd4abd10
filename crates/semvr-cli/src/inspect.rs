//! Inspect command - show the parts of a version.

use anyhow::{Context, Result};
use clap::Args;

use semvr::Version;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Version to inspect
    #[arg(value_name = "VERSION")]
    pub version: String,
}

pub fn describe(version: &Version) -> Vec<(&'static str, String)> {
    let pre_release = version
        .pre_release()
        .map(|p| p.identifiers().join(", "))
        .unwrap_or_else(|| "-".to_string());
    let build_metadata = version
        .build_metadata()
        .map(|b| b.identifiers().join(", "))
        .unwrap_or_else(|| "-".to_string());

    vec![
        ("version", version.to_string()),
        ("major", version.major().to_string()),
        ("minor", version.minor().to_string()),
        ("patch", version.patch().to_string()),
        ("pre-release", pre_release),
        ("build", build_metadata),
        ("stable", (!version.is_pre_release() && version.major() > 0).to_string()),
    ]
}

pub fn execute(args: InspectArgs) -> Result<i32> {
    let version = Version::parse(&args.version)
        .with_context(|| format!("Could not parse version \"{}\"", args.version))?;

    for (label, value) in describe(&version) {
        println!("{:<12} {}", format!("{}:", label), value);
    }

    Ok(0)
}

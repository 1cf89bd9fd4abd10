//! Bump command - increase one component of a version.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use semvr::{BumpPolicy, Version};

use crate::config::SemvrConfig;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    Major,
    Minor,
    Patch,
}

#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Component to increase
    #[arg(value_enum)]
    pub part: Part,

    /// Version to bump
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Keep pre-release and build metadata (default from semvr.toml)
    #[arg(long, conflicts_with = "clear_suffixes")]
    pub keep_suffixes: bool,

    /// Drop pre-release and build metadata even if semvr.toml keeps them
    #[arg(long)]
    pub clear_suffixes: bool,
}

/// Command line flags win over the config file
pub fn resolve_policy(args: &BumpArgs, config: &SemvrConfig) -> BumpPolicy {
    let keep = if args.keep_suffixes {
        true
    } else if args.clear_suffixes {
        false
    } else {
        config.bump.keep_suffixes
    };

    if keep {
        BumpPolicy::KeepSuffixes
    } else {
        BumpPolicy::ClearSuffixes
    }
}

pub fn bump(version: &Version, part: Part, policy: BumpPolicy) -> semvr::Result<Version> {
    match part {
        Part::Major => version.bump_major_with(policy),
        Part::Minor => version.bump_minor_with(policy),
        Part::Patch => version.bump_patch_with(policy),
    }
}

pub fn execute(args: BumpArgs, config: &SemvrConfig) -> Result<i32> {
    let version = Version::parse(&args.version)
        .with_context(|| format!("Could not parse version \"{}\"", args.version))?;
    let policy = resolve_policy(&args, config);
    log::debug!("Bumping {:?} of {} ({:?})", args.part, version, policy);

    let bumped = bump(&version, args.part, policy)
        .with_context(|| format!("Could not bump {}", version))?;
    println!("{}", bumped);

    Ok(0)
}

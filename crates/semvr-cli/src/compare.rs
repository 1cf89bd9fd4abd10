//! Compare command - order two versions by precedence.

use anyhow::{Context, Result};
use clap::Args;
use std::cmp::Ordering;

use semvr::{compare, Operator, Version};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "A")]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "B")]
    pub right: String,

    /// Test "A <op> B" instead of printing the ordering; exits 1 when false
    #[arg(long, value_name = "OP")]
    pub op: Option<Operator>,
}

pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let left = Version::parse(&args.left)
        .with_context(|| format!("Could not parse version \"{}\"", args.left))?;
    let right = Version::parse(&args.right)
        .with_context(|| format!("Could not parse version \"{}\"", args.right))?;

    let ordering = compare(&left, &right);
    log::debug!("{} {} {}", left, ordering_symbol(ordering), right);

    match args.op {
        Some(op) => {
            let matched = op.matches(ordering);
            println!("{}", matched);
            Ok(if matched { 0 } else { 1 })
        }
        None => {
            println!("{}", ordering_symbol(ordering));
            Ok(0)
        }
    }
}

use std::path::PathBuf;

use clap::Args;

use lll_rewrite::registry::check_arity;

use super::{exit_with, load_and_parse};

#[derive(Args)]
pub struct CheckArgs {
    /// Input file holding one tree
    pub input: PathBuf,
}

pub fn cmd_check(args: CheckArgs) {
    let (source, node) = load_and_parse(&args.input);
    let errors = check_arity(&node);
    if !errors.is_empty() {
        exit_with(&errors, &args.input, &source);
    }
    eprintln!("OK: {}", args.input.display());
}

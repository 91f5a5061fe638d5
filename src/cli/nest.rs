use std::path::PathBuf;

use clap::Args;

use lll_rewrite::scope::nest_scopes;

use super::load_and_parse;

#[derive(Args)]
pub struct NestArgs {
    /// Input file holding one `(seq ...)` tree
    pub input: PathBuf,
}

pub fn cmd_nest(args: NestArgs) {
    let (_, node) = load_and_parse(&args.input);
    println!("{}", nest_scopes(&node));
}

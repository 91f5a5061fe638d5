use std::path::PathBuf;
use std::process;

use clap::Args;

use lll_rewrite::ast::display::format_node_list;
use lll_rewrite::config::RewriteConfig;
use lll_rewrite::storage::{flatten_storage_access_with, is_storage_access_root_with};

use super::{exit_with, load_and_parse};

#[derive(Args)]
pub struct FlattenArgs {
    /// Input file holding one storage access chain, e.g. `(. self x)`
    pub input: PathBuf,
}

pub fn cmd_flatten(args: FlattenArgs, config: &RewriteConfig) {
    let (source, node) = load_and_parse(&args.input);
    if !is_storage_access_root_with(&node, &config.storage) {
        eprintln!(
            "error: '{}' is not a storage access rooted at '{}'",
            node, config.storage.self_ident
        );
        process::exit(1);
    }
    match flatten_storage_access_with(&node, &config.storage) {
        Ok(components) => println!("{}", format_node_list(&components)),
        Err(e) => exit_with(&[e], &args.input, &source),
    }
}

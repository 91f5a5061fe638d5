use std::path::PathBuf;

use clap::Args;

use lll_rewrite::config::RewriteConfig;
use lll_rewrite::rules::RuleSet;

use super::{exit_with, load_and_parse, read_source};

#[derive(Args)]
pub struct RewriteArgs {
    /// Rule file of `(pattern) => (template)` pairs
    #[arg(short, long, value_name = "PATH")]
    pub rules: PathBuf,
    /// Input file holding one tree
    pub input: PathBuf,
    /// Prefix for binders introduced by templates (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,
}

pub fn cmd_rewrite(args: RewriteArgs, config: &RewriteConfig) {
    let rule_source = read_source(&args.rules);
    let rules = match RuleSet::parse(&rule_source, 1) {
        Ok(rules) => rules,
        Err(errors) => exit_with(&errors, &args.rules, &rule_source),
    };
    let (_, node) = load_and_parse(&args.input);
    let prefix = args.prefix.as_deref().unwrap_or(&config.hygiene_prefix);

    match rules.apply_first(&node, prefix) {
        Some((index, replacement)) => {
            eprintln!("rule {} fired", index + 1);
            println!("{}", replacement);
        }
        None => {
            eprintln!("no rule matched");
            println!("{}", node);
        }
    }
}

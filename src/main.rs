use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::check::CheckArgs;
use cli::flatten::FlattenArgs;
use cli::nest::NestArgs;
use cli::rewrite::RewriteArgs;

#[derive(Parser)]
#[command(
    name = "lllrw",
    version,
    about = "Pattern rewriting and desugaring passes for LLL trees"
)]
struct Cli {
    /// Config file (default: nearest lllrw.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log rewrite steps (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the recognized operators and their argument counts
    Ops,
    /// Parse a file and validate operator argument counts
    Check(CheckArgs),
    /// Nest scoped `with` bindings of a statement sequence
    Nest(NestArgs),
    /// Print the address components of a storage access chain
    Flatten(FlattenArgs),
    /// Apply the first matching rule to a tree (one step)
    Rewrite(RewriteArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli::load_config(cli.config.as_deref());

    match cli.command {
        Command::Ops => cli::ops::cmd_ops(),
        Command::Check(args) => cli::check::cmd_check(args),
        Command::Nest(args) => cli::nest::cmd_nest(args),
        Command::Flatten(args) => cli::flatten::cmd_flatten(args, &config),
        Command::Rewrite(args) => cli::rewrite::cmd_rewrite(args, &config),
    }
}

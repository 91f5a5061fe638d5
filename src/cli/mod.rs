pub mod check;
pub mod flatten;
pub mod nest;
pub mod ops;
pub mod rewrite;

use std::path::Path;
use std::process;

use lll_rewrite::config::RewriteConfig;
use lll_rewrite::diagnostic::{render_diagnostics, Diagnostic};
use lll_rewrite::Node;

/// Load `--config`, else the nearest `lllrw.toml`, else the defaults.
pub fn load_config(explicit: Option<&Path>) -> RewriteConfig {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::current_dir()
            .ok()
            .and_then(|cwd| RewriteConfig::find(&cwd)),
    };
    let Some(path) = path else {
        return RewriteConfig::default();
    };
    match RewriteConfig::load(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            match std::fs::read_to_string(&path) {
                Ok(source) => e.render(&path.to_string_lossy(), &source),
                Err(_) => eprintln!("error: {}", e.message),
            }
            process::exit(1);
        }
    }
}

pub fn read_source(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

/// Read a file holding exactly one form; render errors and exit on failure.
pub fn load_and_parse(path: &Path) -> (String, Node) {
    let source = read_source(path);
    match lll_rewrite::syntax::read_node(&source, 0) {
        Ok(node) => (source, node),
        Err(errors) => exit_with(&errors, path, &source),
    }
}

pub fn exit_with(diagnostics: &[Diagnostic], path: &Path, source: &str) -> ! {
    render_diagnostics(diagnostics, &path.to_string_lossy(), source);
    process::exit(1);
}

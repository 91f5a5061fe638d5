use lll_rewrite::registry::operators;

pub fn cmd_ops() {
    for spec in operators() {
        println!("{:<10} {} {}", spec.name, spec.min_args, spec.max_args);
    }
}

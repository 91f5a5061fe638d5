use super::*;
use crate::syntax::read_node;

fn read(source: &str) -> Node {
    read_node(source, 0).unwrap_or_else(|errs| panic!("parse errors: {:?}", errs))
}

fn bind(pattern: &str, candidate: &str) -> MatchResult {
    match_pattern(&read(pattern), &read(candidate))
}

// --- Matching ---

#[test]
fn test_variable_binds_whole_subtree() {
    let b = bind("(set $x $y)", "(set a (add 1 2))").unwrap();
    assert_eq!(b.len(), 2);
    assert_eq!(b["x"].text(), "a");
    assert!(b["y"].same_shape(&read("(add 1 2)")));
}

#[test]
fn test_at_sigil_behaves_like_dollar() {
    let dollar = bind("(get $v)", "(get (mload 0))").unwrap();
    let at = bind("(get @v)", "(get (mload 0))").unwrap();
    assert!(dollar["v"].same_shape(&at["v"]));
}

#[test]
fn test_literal_leaf_requires_identical_text() {
    assert!(bind("(add $a 0)", "(add x 0)").is_some());
    assert!(bind("(add $a 0)", "(add x 1)").is_none());
    assert!(bind("0", "(zero)").is_none());
}

#[test]
fn test_variable_binds_leaf_with_its_own_text() {
    let b = bind("(f $x)", "(f $x)").unwrap();
    assert_eq!(b.len(), 1);
    assert_eq!(b["x"].text(), "$x");
    let b = bind("@y", "@y").unwrap();
    assert_eq!(b["y"].text(), "@y");
}

#[test]
fn test_compound_requires_same_operator_and_arity() {
    assert!(bind("(add $a $b)", "(sub 1 2)").is_none());
    assert!(bind("(add $a $b)", "(add 1 2 3)").is_none());
    assert!(bind("(add $a $b)", "add").is_none());
}

#[test]
fn test_failure_in_late_child_returns_no_bindings() {
    assert_eq!(bind("(if $c $t 0)", "(if 1 2 3)"), None);
}

#[test]
fn test_repeated_variable_last_occurrence_wins() {
    let b = bind("(eq $x $x)", "(eq 1 (add 2 3))").unwrap();
    assert_eq!(b.len(), 1);
    assert!(b["x"].same_shape(&read("(add 2 3)")));
}

#[test]
fn test_bound_subtree_keeps_candidate_location() {
    let candidate = read("(seq\n  (stop))");
    let b = match_pattern(&read("(seq $s)"), &candidate).unwrap();
    assert_eq!(b["s"].meta(), Metadata::new(0, 2, 3));
}

// --- Substitution ---

#[test]
fn test_substitute_bound_variable() {
    let b = bind("(mul $a 2)", "(mul (get x) 2)").unwrap();
    let out = substitute(&read("(shl $a 1)"), &b, "_", Metadata::unset());
    insta::assert_snapshot!(out.to_string(), @"(shl (get x) 1)");
}

#[test]
fn test_unbound_variable_gets_hygiene_prefix() {
    let out = substitute(&read("$tmp"), &Bindings::new(), "_h7_", Metadata::new(0, 5, 1));
    assert_eq!(out.text(), "_h7_tmp");
    assert_eq!(out.meta(), Metadata::new(0, 5, 1));
}

#[test]
fn test_hygiene_prefix_applies_to_every_unbound_variable() {
    let b = bind("(swap $a $b)", "(swap p q)").unwrap();
    let template = read("(with $t $a (seq (set $a $b) (set $b $t)))");
    let out = substitute(&template, &b, "_sw_", Metadata::unset());
    insta::assert_snapshot!(
        out.to_string(),
        @"(with _sw_t p (seq (set p q) (set q _sw_t)))"
    );
}

#[test]
fn test_at_variables_are_not_substituted() {
    let b = bind("(get @v)", "(get 5)").unwrap();
    let out = substitute(&read("(ref @v)"), &b, "_", Metadata::unset());
    assert_eq!(out.to_string(), "(ref @v)");
}

#[test]
fn test_unset_locations_are_stamped() {
    let template = Node::compound(
        "add",
        vec![
            Node::leaf("1", Metadata::unset()),
            Node::leaf("2", Metadata::new(0, 1, 9)),
        ],
        Metadata::unset(),
    );
    let fallback = Metadata::new(0, 42, 1);
    let out = substitute(&template, &Bindings::new(), "", fallback);
    assert_eq!(out.meta(), fallback);
    assert_eq!(out.args()[0].meta(), fallback);
    assert_eq!(out.args()[1].meta(), Metadata::new(0, 1, 9));
}

#[test]
fn test_substitute_does_not_touch_template() {
    let template = read("(set $x $y)");
    let before = template.clone();
    let b = bind("(p $x $y)", "(p a b)").unwrap();
    let _ = substitute(&template, &b, "_", Metadata::unset());
    assert_eq!(template, before);
}

// --- Round trip ---

#[test]
fn test_match_then_substitute_reproduces_candidate() {
    let cases = [
        ("(if $c (seq $a $b) $e)", "(if (lt x 3) (seq (set y 1) stop) (return 0))"),
        ("$anything", "(call gas to value 0 0 0 0)"),
        ("(with $x $v $body)", "(with i 0 (while (lt i 10) (set i (add i 1))))"),
        ("(mstore 0 $v)", "(mstore 0 (sha3 0 32))"),
        ("(f $x)", "(f $x)"),
    ];
    for (pattern, candidate) in cases {
        let p = read(pattern);
        let n = read(candidate);
        let b = match_pattern(&p, &n).unwrap_or_else(|| panic!("{} should match", pattern));
        let rebuilt = substitute(&p, &b, "", Metadata::unset());
        assert!(
            rebuilt.same_shape(&n),
            "{} rebuilt as {}, expected {}",
            pattern,
            rebuilt,
            n
        );
    }
}

use crate::ast::Node;
use crate::metadata::Metadata;
use crate::syntax::{read_forms, read_node};

fn read(source: &str) -> Node {
    read_node(source, 0).unwrap_or_else(|errs| panic!("parse errors: {:?}", errs))
}

fn error_message(source: &str) -> String {
    match read_forms(source, 0) {
        Ok(forms) => panic!("expected an error, got {:?}", forms),
        Err(errs) => errs[0].message.clone(),
    }
}

#[test]
fn test_atom_is_leaf() {
    let n = read("self");
    assert!(n.is_leaf());
    assert_eq!(n.text(), "self");
}

#[test]
fn test_list_is_compound() {
    let n = read("(access (. self a) 0)");
    assert!(n.is_op("access"));
    assert_eq!(n.args().len(), 2);
    assert!(n.args()[0].is_op("."));
    assert_eq!(n.args()[0].args()[1].text(), "a");
    assert_eq!(n.args()[1].text(), "0");
}

#[test]
fn test_nullary_list() {
    let n = read("(seq)");
    assert!(n.is_op("seq"));
    assert!(n.args().is_empty());
}

#[test]
fn test_locations_point_at_open_paren() {
    let n = read("\n  (seq\n    stop)");
    assert_eq!(n.meta(), Metadata::new(0, 2, 3));
    assert_eq!(n.args()[0].meta(), Metadata::new(0, 3, 5));
}

#[test]
fn test_printed_form_reads_back() {
    let source = "(with $x (get @y) (seq (set x 1) (return 0 32)))";
    let n = read(source);
    assert_eq!(n.to_string(), source);
    assert!(read(&n.to_string()).same_shape(&n));
}

#[test]
fn test_multiple_forms() {
    let forms = read_forms("(a) b ; note\n(c d)", 0).unwrap();
    assert_eq!(forms.len(), 3);
    assert_eq!(forms[1].text(), "b");
}

#[test]
fn test_read_node_rejects_many_forms() {
    let errs = read_node("a b", 0).unwrap_err();
    assert!(errs[0].message.contains("found 2"));
    let errs = read_node("", 0).unwrap_err();
    assert!(errs[0].message.contains("found none"));
}

#[test]
fn test_unclosed_list() {
    assert_eq!(error_message("(seq (set x 1)"), "unclosed '(seq'");
}

#[test]
fn test_stray_close_paren() {
    assert_eq!(error_message("a)"), "unexpected ')'");
}

#[test]
fn test_empty_list_has_no_operator() {
    assert!(error_message("()").starts_with("expected an operator name"));
    assert!(error_message("((a) b)").starts_with("expected an operator name"));
}

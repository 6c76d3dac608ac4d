use boolparse::{grammar::expression, prelude::*};
use proptest::prelude::*;

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = "[a-zA-Z_][a-zA-Z0-9_]{0,3}".prop_map(Node::Var);
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Node::not),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Node::and(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Node::or(l, r)),
        ]
    })
}

/// Infix rendering with every binary node parenthesized and `sep` in front of every token.
fn render(node: &Node, sep: &str) -> String {
    match node {
        Node::Var(name) => format!("{sep}{name}"),
        Node::Not(inner) => format!("{sep}!{}", render(inner, sep)),
        Node::And(l, r) => format!("{sep}({}{sep}&{}{sep})", render(l, sep), render(r, sep)),
        Node::Or(l, r) => format!("{sep}({}{sep}|{}{sep})", render(l, sep), render(r, sep)),
    }
}

proptest! {
    #[test]
    fn rendered_trees_parse_back(node in arb_node(), sep in "[ \t\n]{0,2}") {
        let text = format!("{}{sep}", render(&node, &sep));
        let res = expression(&Input::new(&text));
        prop_assert!(res.remaining.is_exhausted());
        prop_assert_eq!(res.success, Some(node));
    }

    #[test]
    fn parsing_is_deterministic(text in "[ab!&|() ]{0,16}") {
        let input = Input::new(&text);
        prop_assert_eq!(expression(&input), expression(&input));
    }

    #[test]
    fn failure_consumes_nothing(text in "[ab!&|() ]{0,16}") {
        let start = Input::new(&text);
        let res = expression(&start);
        if !res.is_success() {
            prop_assert_eq!(res.remaining, start);
        }
    }

    #[test]
    fn grouping_changes_shape_not_value(
        a in any::<bool>(),
        b in any::<bool>(),
        c in any::<bool>(),
        op in prop_oneof![Just('&'), Just('|')],
    ) {
        let left: Node = format!("(a{op}b){op}c").parse().unwrap();
        let right: Node = format!("a{op}(b{op}c)").parse().unwrap();
        prop_assert_ne!(&left, &right);

        let vars = std::collections::BTreeMap::from([("a", a), ("b", b), ("c", c)]);
        prop_assert_eq!(left.eval(&vars), right.eval(&vars));
    }
}

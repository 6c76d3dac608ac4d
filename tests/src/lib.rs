#[cfg(test)]
mod properties;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use boolparse::{grammar::expression, parse, parse_pretty, prelude::*};
    use insta::assert_snapshot;

    fn name_list(input: &Input) -> ParserResult<Vec<String>> {
        let item = maybe_spaces_before(identifier());
        let more = token(",").and_then(maybe_spaces_before(identifier())).second();
        item.and_then(more.repeated())
            .map(|Pair { first, second }| {
                std::iter::once(first).chain(second).collect::<Vec<_>>()
            })
            .and_then(spaces())
            .first()
            .parse(input)
    }

    #[test]
    pub fn test_name_list() {
        assert_eq!(
            parse(name_list, "a, b ,c").unwrap(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_snapshot!(parse(name_list, "a,b,").unwrap_err(), @"Unexpected trailing input (1:4)");
    }

    #[test]
    pub fn test_expr() {
        let node = parse(expression, "!a & b|c&!(d|e)").unwrap();
        assert_snapshot!(node.to_string(), @"|(&(!('a'),'b'),&('c',!(|('d','e'))))");

        let vars = HashMap::from([
            ("a", false),
            ("b", true),
            ("c", true),
            ("d", false),
            ("e", false),
        ]);
        assert!(node.eval(&vars));
        assert!(!node.eval(&HashMap::from([("a", true), ("d", true)])));
    }

    #[test]
    pub fn test_pretty_errors() {
        assert_snapshot!(parse_pretty(expression, "a &\n b c", false).unwrap_err(), @r"
2 |  b c
       ^
[2:4] Unexpected trailing input
");
        assert_snapshot!(parse(expression, "(a | b").unwrap_err(), @"Unexpected token or end of input (1:1)");
    }

    #[test]
    pub fn test_truth_table() {
        let node: Node = "x | !y".parse().unwrap();
        let rows: Vec<String> = node
            .truth_table()
            .unwrap()
            .into_iter()
            .map(|row| {
                let bits: String = row
                    .assignment
                    .values()
                    .map(|v| if *v { '1' } else { '0' })
                    .collect();
                format!("{bits}={}", u8::from(row.value))
            })
            .collect();
        assert_snapshot!(rows.join(" "), @"00=1 01=0 10=1 11=1");
    }

    #[test]
    pub fn test_parallel_parses() {
        let texts = ["a&b", "!(a|b)", "a|b&c", "((a))"];
        let parsed: Vec<Node> = std::thread::scope(|scope| {
            let handles: Vec<_> = texts
                .iter()
                .map(|text| scope.spawn(move || parse(expression, text)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap())
                .collect()
        });
        let sequential: Vec<Node> = texts.iter().map(|t| t.parse().unwrap()).collect();
        assert_eq!(parsed, sequential);
    }

    #[test]
    pub fn test_shared_input() {
        let input = Input::new("!a & b");
        let rest = input.rest();
        let handle = std::thread::spawn(move || expression(&rest).success);
        assert_eq!(
            handle.join().unwrap(),
            Some(Node::and(Node::var("a"), Node::var("b")))
        );
        assert_eq!(input.remaining_text(), "!a & b");
    }
}

//! Property tests over arbitrary printable documents.

use marq::{Parser, ParserConfig};
use proptest::prelude::*;

fn parse_all(parser: &Parser, lines: &[String]) -> String {
    parser.parse_lines(lines.iter().map(String::as_str))
}

proptest! {
    #[test]
    fn parsing_never_panics(lines in proptest::collection::vec("[ -~]{0,40}", 0..16)) {
        let _ = parse_all(&Parser::new(), &lines);

        let raw = ParserConfig {
            emphasis_enabled: false,
            html_wrapped_in_paragraph: false,
        };
        let _ = parse_all(&Parser::with_config(raw), &lines);
    }

    #[test]
    fn the_parser_holds_no_state_between_documents(
        lines in proptest::collection::vec("[ -~]{0,40}", 0..16),
    ) {
        let parser = Parser::new();
        let first = parse_all(&parser, &lines);
        let second = parse_all(&parser, &lines);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn the_emphasis_gate_suppresses_em_tags(
        lines in proptest::collection::vec("[A-Za-z0-9 _*~.-]{0,40}", 0..16),
    ) {
        let config = ParserConfig {
            emphasis_enabled: false,
            ..ParserConfig::default()
        };
        let html = parse_all(&Parser::with_config(config), &lines);
        prop_assert!(!html.contains("<em>"));
    }
}

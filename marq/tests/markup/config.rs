//! Behavior of the two configuration switches.

use marq::{to_html, to_html_with_config, Parser, ParserConfig};

#[test]
fn defaults_enable_everything() {
    let config = ParserConfig::default();
    assert!(config.emphasis_enabled);
    assert!(config.html_wrapped_in_paragraph);
}

#[test]
fn explicit_defaults_match_the_implicit_ones() {
    let markdown = "# T\n\n*a* _b_ **c**\n\n<div>x</div>\n";
    assert_eq!(
        to_html(markdown),
        to_html_with_config(markdown, &ParserConfig::default())
    );
}

#[test]
fn disabled_emphasis_leaves_single_delimiters_literal() {
    let config = ParserConfig {
        emphasis_enabled: false,
        ..ParserConfig::default()
    };
    assert_eq!(to_html_with_config("*em*", &config), "<p>*em*</p>");
    assert_eq!(to_html_with_config("_em_", &config), "<p>_em_</p>");
    // The doubled delimiters are not gated.
    assert_eq!(
        to_html_with_config("**strong**", &config),
        "<p><strong>strong</strong></p>"
    );
}

#[test]
fn html_lines_can_stand_alone() {
    let markdown = "<div>\nhello\n</div>\n";
    assert_eq!(to_html(markdown), "<p><div> hello </div></p>");

    let raw = ParserConfig {
        html_wrapped_in_paragraph: false,
        ..ParserConfig::default()
    };
    assert_eq!(to_html_with_config(markdown, &raw), "<div>hello</div>");
}

#[test]
fn parser_exposes_its_config() {
    let config = ParserConfig {
        emphasis_enabled: false,
        ..ParserConfig::default()
    };
    let parser = Parser::with_config(config);
    assert!(!parser.config().emphasis_enabled);
}

//! Nested block structure: lists in lists, quotes around anything,
//! and the depth cap.

use marq::Parser;

#[test]
fn ordered_list_inside_unordered() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse_lines(["* a", "  1. one", "  2. two", "* b", ""]),
        "<ul><li>a<ol><li>one</li><li>two</li></ol></li><li>b</li></ul>"
    );
}

#[test]
fn unordered_list_inside_ordered() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse_lines(["1. first", "  * inner", "2. second", ""]),
        "<ol><li>first<ul><li>inner</li></ul></li><li>second</li></ol>"
    );
}

#[test]
fn sibling_markers_continue_one_nested_list() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse_lines(["* a", "  * d", "  * e", "* b", "  * c", "  + x", "  + y", "  - z", ""]),
        "<ul><li>a<ul><li>d</li><li>e</li></ul></li>\
         <li>b<ul><li>c</li><li>x</li><li>y</li><li>z</li></ul></li></ul>"
    );
}

#[test]
fn quotes_contain_arbitrary_blocks() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse_lines(["> # Inside", "> * a", "> * b", ""]),
        "<blockquote><h1>Inside</h1><ul><li>a</li><li>b</li></ul></blockquote>"
    );
}

#[test]
fn quotes_nest_inside_quotes() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse_lines(["> > > deep", ""]),
        "<blockquote><blockquote><blockquote><p>deep</p>\
         </blockquote></blockquote></blockquote>"
    );
}

#[test]
fn list_items_do_not_open_quotes() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse_lines(["* item", "  > not a quote", ""]),
        "<ul><li>item > not a quote</li></ul>"
    );
}

#[test]
fn over_deep_nesting_degrades_to_literal_text() {
    let lines: Vec<String> = (0..40)
        .map(|i| format!("{}* item{i}", "  ".repeat(i)))
        .collect();
    let parser = Parser::new();
    let html = parser.parse_lines(lines.iter().map(String::as_str));

    // Everything inside the cap is a real item.
    assert!(html.contains("<li>item31"));
    // Past the cap the marker stays literal instead of recursing.
    assert!(html.contains("* item32"));
    assert!(!html.contains("<li>item32"));
    // Every opened list is closed.
    assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
}

//! End-of-input flushing and near-miss syntax.

use marq::to_html;

#[test]
fn unterminated_code_fence_is_flushed() {
    assert_eq!(to_html("```\nx\n"), "<pre><code>x\n\n</code></pre>");
}

#[test]
fn unterminated_table_is_flushed() {
    assert_eq!(
        to_html("|table>\na|b\n"),
        "<table><tbody><tr><td>a</td><td>b</td></tr></tbody></table>"
    );
}

#[test]
fn unterminated_quote_is_flushed() {
    assert_eq!(
        to_html("> words\n"),
        "<blockquote><p>words</p></blockquote>"
    );
}

#[test]
fn unterminated_list_is_flushed() {
    assert_eq!(to_html("* a\n* b"), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn near_miss_rules_are_paragraph_text() {
    assert_eq!(to_html("--\n"), "<p>--</p>");
    assert_eq!(to_html(" ---\n"), "<p> ---</p>");
    assert_eq!(to_html("----\n"), "<p>----</p>");
}

#[test]
fn near_miss_headlines_are_paragraph_text() {
    assert_eq!(to_html("#nospace\n"), "<p>#nospace</p>");
    assert_eq!(to_html("####### seven\n"), "<p>####### seven</p>");
}

#[test]
fn near_miss_markers_are_paragraph_text() {
    assert_eq!(to_html("*tight\n"), "<p>*tight</p>");
    assert_eq!(to_html("1.missing space\n"), "<p>1.missing space</p>");
}

#[test]
fn crlf_line_endings_do_not_leak_breaks() {
    assert_eq!(to_html("a\r\nb\r\n"), "<p>a b</p>");
}

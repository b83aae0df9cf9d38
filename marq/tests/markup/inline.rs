//! Inline transforms observed through a whole-document parse.

use marq::to_html;

#[test]
fn image_syntax_wins_over_link_syntax() {
    assert_eq!(
        to_html("see ![logo](logo.png) at [the site](https://example.com)\n"),
        "<p>see <img src=\"logo.png\" alt=\"logo\"/> at \
         <a href=\"https://example.com\">the site</a></p>"
    );
}

#[test]
fn strong_wins_over_single_delimiters() {
    assert_eq!(
        to_html("**bold** *ital* __also bold__ _also ital_\n"),
        "<p><strong>bold</strong> <em>ital</em> <strong>also bold</strong> <em>also ital</em></p>"
    );
}

#[test]
fn inline_code_shields_delimiters_from_other_passes() {
    assert_eq!(
        to_html("use `my_var` and `*glob*` here\n"),
        "<p>use <code>my&#95;var</code> and <code>&#42;glob&#42;</code> here</p>"
    );
    assert_eq!(
        to_html("`__dunder__` and `~~tilde~~` and `**stars**`\n"),
        "<p><code>&#95;&#95;dunder&#95;&#95;</code> and \
         <code>&#126;&#126;tilde&#126;&#126;</code> and \
         <code>&#42;&#42;stars&#42;&#42;</code></p>"
    );
    assert_eq!(
        to_html("`[not](a-link)`\n"),
        "<p><code>&#91;not&#93;(a-link)</code></p>"
    );
}

#[test]
fn strikethrough() {
    assert_eq!(to_html("~~removed~~ kept\n"), "<p><s>removed</s> kept</p>");
}

#[test]
fn trailing_spaces_become_a_break() {
    assert_eq!(to_html("one  \ntwo\n"), "<p>one<br> two</p>");
}

#[test]
fn headline_text_is_taken_verbatim() {
    assert_eq!(to_html("# *not emphasis*\n"), "<h1>*not emphasis*</h1>");
}

#[test]
fn unbalanced_delimiters_stay_literal() {
    assert_eq!(to_html("**unclosed\n"), "<p>**unclosed</p>");
    assert_eq!(to_html("a ~~ b\n"), "<p>a ~~ b</p>");
}

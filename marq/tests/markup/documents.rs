//! Whole-document conversions.

use marq::{to_html, Parser};

#[test]
fn headline_document() {
    let parser = Parser::new();
    assert_eq!(parser.parse_lines(["# Title", ""]), "<h1>Title</h1>");
}

#[test]
fn nested_unordered_list_document() {
    let parser = Parser::new();
    assert_eq!(
        parser.parse_lines(["* a", "  * d", "  * e", "* b", ""]),
        "<ul><li>a<ul><li>d</li><li>e</li></ul></li><li>b</li></ul>"
    );
}

#[test]
fn output_is_ordered_by_input() {
    let html = to_html("first\n\n# Then a title\n\nlast\n");
    assert_eq!(html, "<p>first</p><h1>Then a title</h1><p>last</p>");
}

#[test]
fn kitchen_sink() {
    let markdown = "\
# Kitchen Sink

intro with **bold** and `code`.

* one
  * nested
* two

> quoted **text**

```rust
let x = 1;
```

---

|table>
a|b
- | -
1|2
|<table

- [ ] open
- [x] done
";
    insta::assert_snapshot!(to_html(markdown), @r#"
    <h1>Kitchen Sink</h1><p>intro with <strong>bold</strong> and <code>code</code>.</p><ul><li>one<ul><li>nested</li></ul></li><li>two</li></ul><blockquote><p>quoted <strong>text</strong></p></blockquote><pre><code class="language-rust">let x = 1;
    </code></pre><hr/><table><thead><tr><th>a</th><th>b</th></tr></thead><tbody><tr><td>1</td><td>2</td></tr></tbody></table><ul class="checklist"><li><label><input type="checkbox"/>open</label></li><li><label><input type="checkbox" checked="checked"/>done</label></li></ul>
    "#);
}

#[test]
fn empty_document_renders_nothing() {
    assert_eq!(to_html(""), "");
    assert_eq!(to_html("\n\n\n"), "");
}

//! Line transform pipeline (inline markup -> HTML)
//!
//! A fixed, ordered sequence of independent rewriters, each applied in
//! place to one line of text. The ordering is load-bearing:
//!
//! - inline code first: delimiter and bracket characters inside the
//!   span are escaped to numeric entities, so no later pass can
//!   rewrite code contents.
//! - image before link: image syntax embeds link syntax, so the link
//!   pass would otherwise claim the bracketed part and strand the `!`.
//! - strong before the single-delimiter passes: `*`/`_` are strict
//!   substrings of the doubled delimiters.
//! - break line last: it only inspects the line terminus.
//!
//! Each rewriter is invoked at most once per physical line; block
//! parsers call [`rewrite`] exactly once when they absorb a line.

use crate::config::ParserConfig;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());
static STRONG_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static STRONG_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__([^_]+)__").unwrap());
static EMPHASIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_]+)_").unwrap());
static STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~([^~]+)~~").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static BREAK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?: {2,}|\r)$").unwrap());

/// Run the full pipeline over `line`, honoring the configuration gate
/// on the single-delimiter emphasis passes.
pub(crate) fn rewrite(line: &mut String, config: &ParserConfig) {
    rewrite_inline_code(line);
    rewrite_images(line);
    rewrite_links(line);
    rewrite_strong(line);
    if config.emphasis_enabled {
        rewrite_emphasized(line);
    }
    rewrite_strikethrough(line);
    if config.emphasis_enabled {
        rewrite_italic(line);
    }
    rewrite_break_line(line);
}

fn replace_in_place(line: &mut String, re: &Regex, replacement: &str) {
    if let Cow::Owned(rewritten) = re.replace_all(line, replacement) {
        *line = rewritten;
    }
}

/// `![alt](url)` -> `<img src="url" alt="alt"/>`
pub(crate) fn rewrite_images(line: &mut String) {
    replace_in_place(line, &IMAGE, r#"<img src="${2}" alt="${1}"/>"#);
}

/// `[text](url)` -> `<a href="url">text</a>`
pub(crate) fn rewrite_links(line: &mut String) {
    replace_in_place(line, &LINK, r#"<a href="${2}">${1}</a>"#);
}

/// `**text**` / `__text__` -> `<strong>text</strong>`
pub(crate) fn rewrite_strong(line: &mut String) {
    replace_in_place(line, &STRONG_ASTERISK, "<strong>${1}</strong>");
    replace_in_place(line, &STRONG_UNDERSCORE, "<strong>${1}</strong>");
}

/// `_text_` -> `<em>text</em>`
pub(crate) fn rewrite_emphasized(line: &mut String) {
    replace_in_place(line, &EMPHASIZED, "<em>${1}</em>");
}

/// `~~text~~` -> `<s>text</s>`
pub(crate) fn rewrite_strikethrough(line: &mut String) {
    replace_in_place(line, &STRIKETHROUGH, "<s>${1}</s>");
}

/// `` `text` `` -> `<code>text</code>`
///
/// Runs before every other pass. Delimiter and bracket characters
/// inside the span are escaped to numeric entities so the remaining
/// passes leave code contents alone.
pub(crate) fn rewrite_inline_code(line: &mut String) {
    let rewritten = INLINE_CODE.replace_all(line, |caps: &Captures| {
        let body = caps[1]
            .replace('*', "&#42;")
            .replace('_', "&#95;")
            .replace('~', "&#126;")
            .replace('[', "&#91;")
            .replace(']', "&#93;");
        format!("<code>{body}</code>")
    });
    if let Cow::Owned(rewritten) = rewritten {
        *line = rewritten;
    }
}

/// `*text*` -> `<em>text</em>`
///
/// Safety pass for single delimiters left over after the strong pass.
pub(crate) fn rewrite_italic(line: &mut String) {
    replace_in_place(line, &ITALIC, "<em>${1}</em>");
}

/// Two-or-more trailing spaces, or a trailing carriage return, become
/// `<br>`.
pub(crate) fn rewrite_break_line(line: &mut String) {
    replace_in_place(line, &BREAK_LINE, "<br>");
}

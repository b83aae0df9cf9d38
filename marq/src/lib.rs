//! Markdown-dialect to HTML conversion
//!
//!     This crate turns a sequential stream of plain-text lines written in a
//!     markdown-like dialect into a single HTML fragment, preserving input order
//!     and supporting nested block structure (lists in lists, quotes containing
//!     arbitrary blocks, tables, checklists) alongside inline transforms
//!     (emphasis, links, images, strikethrough, inline code, line breaks).
//!
//!     This is a pure lib: it powers marq-cli but is shell agnostic, that is no
//!     code here supposes a shell environment, be it std print, env vars etc.
//!
//! Architecture
//!
//!     The engine is two cooperating layers:
//!
//!     - the line transform pipeline (./line.rs): a fixed, ordered sequence of
//!       inline rewriters applied in place to one line of text. Ordering encodes
//!       the precedence rules (image before link, strong before the single
//!       delimiter passes, inline code shields its contents from later passes).
//!
//!     - the block machinery (./blocks/): one small state machine per block
//!       kind, all behind the BlockParser contract (add-line / is-finished /
//!       render), plus a dispatcher that picks the variant for a given line.
//!       Recursive variants (quote, lists, checklist) re-enter the dispatcher
//!       with a narrowed scope to resolve their children, so nesting depth is
//!       unbounded in the grammar and bounded only by an explicit depth cap.
//!
//!     The document driver (./parser.rs) iterates the input once, owns at most
//!     one active block at a time, and concatenates finished renders in input
//!     order. There is no lookahead beyond the line already delivered and no
//!     buffering beyond the single active block.
//!
//! Error handling
//!
//!     The grammar is total and permissive by construction: the paragraph
//!     variant claims any non-blank line, malformed markup degrades to literal
//!     text, and unterminated blocks render best-effort at end of input.
//!     Parsing therefore returns a String, not a Result. Over-deep nesting is
//!     the one resource risk and is handled by the dispatcher's depth cap
//!     rather than unbounded recursion.

pub mod config;

mod blocks;
mod line;
mod parser;

pub use config::ParserConfig;
pub use parser::Parser;

/// Convert a document with the default configuration.
pub fn to_html(markdown: &str) -> String {
    Parser::new().parse(markdown)
}

/// Convert a document with an explicit configuration.
pub fn to_html_with_config(markdown: &str, config: &ParserConfig) -> String {
    Parser::with_config(*config).parse(markdown)
}

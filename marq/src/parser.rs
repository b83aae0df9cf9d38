//! Document driver: one pass over the input lines, one active block
//! at a time.

use crate::blocks::{dispatch, specialized_start, Block, BlockParser, Scope};
use crate::config::ParserConfig;

/// Transforms a markdown-dialect document into an HTML fragment.
///
/// The driver owns the configuration for the lifetime of the parse
/// and holds at most one active block parser; every finished block's
/// render is appended to the output in arrival order. Parsing is
/// synchronous, single-pass, and total: malformed markup degrades to
/// literal text instead of failing.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Parser with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a whole document, splitting it into lines.
    pub fn parse(&self, markdown: &str) -> String {
        self.parse_lines(markdown.lines())
    }

    /// Parse an ordered sequence of lines (no trailing newlines).
    ///
    /// A block still open at end of input is fed one synthetic blank
    /// line and then force-finished, so every started block
    /// contributes best-effort output even when the document does not
    /// end in a blank line.
    pub fn parse_lines<'a, I>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut html = String::new();
        let mut active: Option<Block> = None;

        for line in lines {
            // A paragraph yields to any line that starts a
            // higher-precedence block; the line then re-enters
            // dispatch below.
            let interrupt = active
                .as_ref()
                .is_some_and(|block| block.is_paragraph())
                && !line.is_empty()
                && specialized_start(line, &self.config);
            if interrupt {
                if let Some(mut block) = active.take() {
                    block.add_line("", &self.config);
                    html.push_str(block.render());
                }
            }

            if active.is_none() {
                active = dispatch(line, &self.config, 0, Scope::TopLevel);
            }
            if let Some(mut block) = active.take() {
                block.add_line(line, &self.config);
                if block.is_finished() {
                    html.push_str(block.render());
                } else {
                    active = Some(block);
                }
            }
        }

        if let Some(mut block) = active.take() {
            block.add_line("", &self.config);
            if !block.is_finished() {
                block.force_finish(&self.config);
            }
            html.push_str(block.render());
        }

        html
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

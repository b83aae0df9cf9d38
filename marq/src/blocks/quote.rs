//! Block quotes.
//!
//! Each line sheds one `>` marker (plus one space) and the remainder
//! re-enters the full dispatcher, so a quote can contain any block,
//! including further quotes. A blank input line closes the quote,
//! closing any open child first.

use crate::blocks::{dispatch, specialized_start, Block, BlockParser, Scope};
use crate::config::ParserConfig;

pub(crate) struct Quote {
    html: String,
    child: Option<Box<Block>>,
    depth: usize,
    started: bool,
    finished: bool,
}

impl Quote {
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            html: String::new(),
            child: None,
            depth,
            started: false,
            finished: false,
        }
    }

    pub(crate) fn is_starting_line(line: &str) -> bool {
        line.starts_with('>')
    }

    fn strip_marker(line: &str) -> &str {
        let rest = line.strip_prefix('>').unwrap_or(line);
        rest.strip_prefix(' ').unwrap_or(rest)
    }

    fn absorb_child_if_finished(&mut self) {
        if self.child.as_ref().is_some_and(|c| c.is_finished()) {
            if let Some(child) = self.child.take() {
                self.html.push_str(child.render());
            }
        }
    }

    fn close_child(&mut self, config: &ParserConfig) {
        if let Some(mut child) = self.child.take() {
            child.add_line("", config);
            if !child.is_finished() {
                child.force_finish(config);
            }
            self.html.push_str(child.render());
        }
    }
}

impl BlockParser for Quote {
    fn add_line(&mut self, line: &str, config: &ParserConfig) {
        if self.finished {
            return;
        }
        if !self.started {
            self.started = true;
            self.html.push_str("<blockquote>");
        }
        if line.is_empty() {
            self.close_child(config);
            self.html.push_str("</blockquote>");
            self.finished = true;
            return;
        }

        let inner = Self::strip_marker(line);
        if inner.is_empty() {
            // A bare `>` separates blocks inside the quote.
            if let Some(child) = self.child.as_mut() {
                child.add_line("", config);
            }
            self.absorb_child_if_finished();
            return;
        }

        // An open paragraph yields to a higher-precedence starting
        // line, same as at the document level.
        if self.child.as_ref().is_some_and(|c| c.is_paragraph())
            && specialized_start(inner, config)
        {
            self.close_child(config);
        }

        if self.child.is_none() {
            self.child = dispatch(inner, config, self.depth + 1, Scope::TopLevel).map(Box::new);
        }
        if let Some(child) = self.child.as_mut() {
            child.add_line(inner, config);
        }
        self.absorb_child_if_finished();
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&self) -> &str {
        &self.html
    }

    fn force_finish(&mut self, config: &ParserConfig) {
        if !self.finished {
            self.close_child(config);
            self.html.push_str("</blockquote>");
            self.finished = true;
        }
    }
}

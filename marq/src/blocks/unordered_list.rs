//! Unordered lists (`*`, `-`, `+` markers).
//!
//! Lines indented by two spaces are dedented and handed to a child
//! list resolved through the dispatcher's list scope; a dedented item
//! or a blank line closes the child. Mixing markers inside one list
//! keeps a single `<ul>`, matching the dialect.

use crate::blocks::{dispatch, Block, BlockParser, Scope};
use crate::config::ParserConfig;
use crate::line;
use once_cell::sync::Lazy;
use regex::Regex;

static MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[*+-] ").unwrap());

pub(crate) struct UnorderedList {
    html: String,
    child: Option<Box<Block>>,
    depth: usize,
    item_open: bool,
    started: bool,
    finished: bool,
}

impl UnorderedList {
    pub(crate) fn new(depth: usize) -> Self {
        Self {
            html: String::new(),
            child: None,
            depth,
            item_open: false,
            started: false,
            finished: false,
        }
    }

    pub(crate) fn is_starting_line(line: &str) -> bool {
        MARKER.is_match(line)
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

    fn close_item(&mut self, config: &ParserConfig) {
        self.close_child(config);
        if self.item_open {
            self.html.push_str("</li>");
            self.item_open = false;
        }
    }

    fn open_item(&mut self, text: &str, config: &ParserConfig) {
        self.html.push_str("<li>");
        self.item_open = true;
        let mut text = text.to_string();
        line::rewrite(&mut text, config);
        self.html.push_str(&text);
    }

    fn append_continuation(&mut self, text: &str, config: &ParserConfig) {
        if !self.item_open {
            self.open_item(text, config);
            return;
        }
        let mut text = text.to_string();
        line::rewrite(&mut text, config);
        self.html.push(' ');
        self.html.push_str(&text);
    }
}

impl BlockParser for UnorderedList {
    fn add_line(&mut self, line: &str, config: &ParserConfig) {
        if self.finished {
            return;
        }
        if !self.started {
            self.started = true;
            self.html.push_str("<ul>");
        }
        if line.is_empty() {
            self.close_item(config);
            self.html.push_str("</ul>");
            self.finished = true;
            return;
        }

        if let Some(dedented) = line.strip_prefix("  ") {
            if let Some(child) = self.child.as_mut() {
                child.add_line(dedented, config);
                if child.is_finished() {
                    self.close_child(config);
                }
                return;
            }
            // An all-whitespace line contributes no item text.
            if dedented.trim().is_empty() {
                return;
            }
            match dispatch(dedented, config, self.depth + 1, Scope::List) {
                Some(mut child) => {
                    child.add_line(dedented, config);
                    self.child = Some(Box::new(child));
                }
                None => self.append_continuation(dedented, config),
            }
            return;
        }

        if Self::is_starting_line(line) {
            self.close_item(config);
            self.open_item(&line[2..], config);
        } else {
            self.close_child(config);
            self.append_continuation(line, config);
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&self) -> &str {
        &self.html
    }

    fn force_finish(&mut self, config: &ParserConfig) {
        if !self.finished {
            self.close_item(config);
            self.html.push_str("</ul>");
            self.finished = true;
        }
    }
}

//! Checklists (`- [ ] open`, `- [x] done`).
//!
//! Rendered as `<ul class="checklist">` with a checkbox input per
//! item. Indented children may only be further checklists; a nested
//! checklist renders after the item's label, inside its `<li>`.

use crate::blocks::{dispatch, Block, BlockParser, Scope};
use crate::config::ParserConfig;
use crate::line;
use once_cell::sync::Lazy;
use regex::Regex;

static ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- \[([xX ])\] ").unwrap());

pub(crate) struct Checklist {
    html: String,
    child: Option<Box<Block>>,
    depth: usize,
    item_open: bool,
    started: bool,
    finished: bool,
}

impl Checklist {
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
        ITEM.is_match(line)
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
        if self.item_open {
            self.html.push_str("</label>");
        }
        self.close_child(config);
        if self.item_open {
            self.html.push_str("</li>");
            self.item_open = false;
        }
    }

    fn open_item(&mut self, checked: bool, text: &str, config: &ParserConfig) {
        if checked {
            self.html
                .push_str("<li><label><input type=\"checkbox\" checked=\"checked\"/>");
        } else {
            self.html.push_str("<li><label><input type=\"checkbox\"/>");
        }
        self.item_open = true;
        let mut text = text.to_string();
        line::rewrite(&mut text, config);
        self.html.push_str(&text);
    }
}

impl BlockParser for Checklist {
    fn add_line(&mut self, line: &str, config: &ParserConfig) {
        if self.finished {
            return;
        }
        if !self.started {
            self.started = true;
            self.html.push_str("<ul class=\"checklist\">");
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
            match dispatch(dedented, config, self.depth + 1, Scope::Checklist) {
                Some(mut child) => {
                    child.add_line(dedented, config);
                    self.child = Some(Box::new(child));
                }
                None => {
                    // Over-deep or unrecognized nesting: literal text.
                    let mut text = dedented.to_string();
                    line::rewrite(&mut text, config);
                    if self.item_open {
                        self.html.push(' ');
                    }
                    self.html.push_str(&text);
                }
            }
            return;
        }

        match ITEM.captures(line) {
            Some(caps) => {
                self.close_item(config);
                let checked = !caps[1].trim().is_empty();
                let text_start = caps.get(0).map_or(0, |m| m.end());
                self.open_item(checked, &line[text_start..], config);
            }
            None => {
                self.close_child(config);
                let mut text = line.to_string();
                line::rewrite(&mut text, config);
                if self.item_open {
                    self.html.push(' ');
                }
                self.html.push_str(&text);
            }
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

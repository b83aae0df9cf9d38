//! Raw HTML blocks.
//!
//! Only dispatched when the configuration does not force HTML into
//! paragraphs. Lines are concatenated verbatim until a blank line.

use crate::blocks::BlockParser;
use crate::config::ParserConfig;

pub(crate) struct HtmlBlock {
    html: String,
    finished: bool,
}

impl HtmlBlock {
    pub(crate) fn new() -> Self {
        Self {
            html: String::new(),
            finished: false,
        }
    }

    pub(crate) fn is_starting_line(line: &str) -> bool {
        line.starts_with('<')
    }
}

impl BlockParser for HtmlBlock {
    fn add_line(&mut self, line: &str, _config: &ParserConfig) {
        if self.finished {
            return;
        }
        if line.is_empty() {
            self.finished = true;
            return;
        }
        self.html.push_str(line);
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&self) -> &str {
        &self.html
    }
}

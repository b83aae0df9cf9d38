//! `---` -> `<hr/>`.

use crate::blocks::BlockParser;
use crate::config::ParserConfig;

pub(crate) struct HorizontalRule {
    finished: bool,
}

impl HorizontalRule {
    pub(crate) fn new() -> Self {
        Self { finished: false }
    }

    pub(crate) fn is_starting_line(line: &str) -> bool {
        line == "---"
    }
}

impl BlockParser for HorizontalRule {
    fn add_line(&mut self, _line: &str, _config: &ParserConfig) {
        self.finished = true;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&self) -> &str {
        "<hr/>"
    }
}

//! `# text` .. `###### text` -> `<h1>` .. `<h6>`.

use crate::blocks::BlockParser;
use crate::config::ParserConfig;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6}) (.*)$").unwrap());

/// Single-line block; the headline text is emitted verbatim, without
/// the inline pipeline.
pub(crate) struct Headline {
    html: String,
    finished: bool,
}

impl Headline {
    pub(crate) fn new() -> Self {
        Self {
            html: String::new(),
            finished: false,
        }
    }

    pub(crate) fn is_starting_line(line: &str) -> bool {
        HEADLINE.is_match(line)
    }
}

impl BlockParser for Headline {
    fn add_line(&mut self, line: &str, _config: &ParserConfig) {
        if self.finished {
            return;
        }
        if let Some(caps) = HEADLINE.captures(line) {
            let level = caps[1].len();
            let text = &caps[2];
            self.html = format!("<h{level}>{text}</h{level}>");
        }
        self.finished = true;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&self) -> &str {
        &self.html
    }
}

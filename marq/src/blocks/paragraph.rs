//! The fallback block: any non-blank line that no specialized
//! predicate claims becomes paragraph text.

use crate::blocks::BlockParser;
use crate::config::ParserConfig;
use crate::line;

pub(crate) struct Paragraph {
    text: String,
    html: String,
    finished: bool,
}

impl Paragraph {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            html: String::new(),
            finished: false,
        }
    }

    /// Matches any non-blank line, guaranteeing dispatch totality.
    pub(crate) fn is_starting_line(line: &str) -> bool {
        !line.is_empty()
    }
}

impl BlockParser for Paragraph {
    fn add_line(&mut self, line: &str, config: &ParserConfig) {
        if self.finished {
            return;
        }
        if line.is_empty() {
            self.html = format!("<p>{}</p>", self.text);
            self.finished = true;
            return;
        }
        let mut rewritten = line.to_string();
        line::rewrite(&mut rewritten, config);
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(&rewritten);
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_continuation_lines_with_a_space() {
        let config = ParserConfig::default();
        let mut parser = Paragraph::new();
        for line in ["first line", "second line", ""] {
            parser.add_line(line, &config);
        }
        assert!(parser.is_finished());
        assert_eq!(parser.render(), "<p>first line second line</p>");
    }

    #[test]
    fn runs_the_inline_pipeline_per_line() {
        let config = ParserConfig::default();
        let mut parser = Paragraph::new();
        parser.add_line("some **bold** text", &config);
        parser.add_line("", &config);
        assert_eq!(parser.render(), "<p>some <strong>bold</strong> text</p>");
    }

    #[test]
    fn render_is_idempotent_once_finished() {
        let config = ParserConfig::default();
        let mut parser = Paragraph::new();
        parser.add_line("stable", &config);
        parser.add_line("", &config);
        let first = parser.render().to_string();
        assert_eq!(parser.render(), first);
    }
}

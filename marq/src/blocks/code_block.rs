//! Fenced code blocks.
//!
//! Opens on a ``` fence with an optional info string, collects every
//! line verbatim (blank lines included, no inline transforms), and
//! closes on the matching ``` fence. An unterminated fence is closed
//! best-effort by [`BlockParser::force_finish`] at end of input.

use crate::blocks::BlockParser;
use crate::config::ParserConfig;

pub(crate) struct CodeBlock {
    html: String,
    started: bool,
    finished: bool,
}

impl CodeBlock {
    pub(crate) fn new() -> Self {
        Self {
            html: String::new(),
            started: false,
            finished: false,
        }
    }

    pub(crate) fn is_starting_line(line: &str) -> bool {
        line.starts_with("```")
    }
}

impl BlockParser for CodeBlock {
    fn add_line(&mut self, line: &str, _config: &ParserConfig) {
        if self.finished {
            return;
        }
        if !self.started {
            self.started = true;
            let info = line.strip_prefix("```").unwrap_or(line).trim();
            if info.is_empty() {
                self.html.push_str("<pre><code>");
            } else {
                self.html
                    .push_str(&format!(r#"<pre><code class="language-{info}">"#));
            }
            return;
        }
        if line == "```" {
            self.html.push_str("</code></pre>");
            self.finished = true;
            return;
        }
        self.html.push_str(line);
        self.html.push('\n');
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&self) -> &str {
        &self.html
    }

    fn force_finish(&mut self, _config: &ParserConfig) {
        if !self.finished {
            self.html.push_str("</code></pre>");
            self.finished = true;
        }
    }
}

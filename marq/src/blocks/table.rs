//! Tables, fenced by `|table>` .. `|<table`.
//!
//! Rows split on `|` with trimmed cells; an all-dash row separates
//! sections. One separator promotes the leading rows to `<thead>`, a
//! second promotes the trailing rows to `<tfoot>`; without separators
//! every row is body. The row line runs through the inline pipeline
//! before splitting, so cells carry inline markup.

use crate::blocks::BlockParser;
use crate::config::ParserConfig;
use crate::line;
use std::fmt::Write;

pub(crate) struct Table {
    html: String,
    sections: Vec<Vec<Vec<String>>>,
    started: bool,
    finished: bool,
}

impl Table {
    pub(crate) fn new() -> Self {
        Self {
            html: String::new(),
            sections: vec![Vec::new()],
            started: false,
            finished: false,
        }
    }

    pub(crate) fn is_starting_line(line: &str) -> bool {
        line == "|table>"
    }

    fn is_separator(cells: &[String]) -> bool {
        !cells.is_empty()
            && cells
                .iter()
                .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-'))
    }

    fn push_group<'a>(
        html: &mut String,
        tag: &str,
        cell_tag: &str,
        rows: impl Iterator<Item = &'a Vec<String>>,
    ) {
        let _ = write!(html, "<{tag}>");
        for row in rows {
            html.push_str("<tr>");
            for cell in row {
                let _ = write!(html, "<{cell_tag}>{cell}</{cell_tag}>");
            }
            html.push_str("</tr>");
        }
        let _ = write!(html, "</{tag}>");
    }

    fn render_sections(&mut self) {
        let sections: Vec<&Vec<Vec<String>>> =
            self.sections.iter().filter(|s| !s.is_empty()).collect();
        self.html.push_str("<table>");
        match sections.len() {
            0 => {}
            1 => Self::push_group(&mut self.html, "tbody", "td", sections[0].iter()),
            2 => {
                Self::push_group(&mut self.html, "thead", "th", sections[0].iter());
                Self::push_group(&mut self.html, "tbody", "td", sections[1].iter());
            }
            n => {
                Self::push_group(&mut self.html, "thead", "th", sections[0].iter());
                Self::push_group(
                    &mut self.html,
                    "tbody",
                    "td",
                    sections[1..n - 1].iter().flat_map(|s| s.iter()),
                );
                Self::push_group(&mut self.html, "tfoot", "td", sections[n - 1].iter());
            }
        }
        self.html.push_str("</table>");
        self.finished = true;
    }
}

impl BlockParser for Table {
    fn add_line(&mut self, line: &str, config: &ParserConfig) {
        if self.finished {
            return;
        }
        if !self.started {
            self.started = true;
            return;
        }
        // The closing fence ends the table; a blank line closes it
        // best-effort when the fence never arrives.
        if line == "|<table" || line.is_empty() {
            self.render_sections();
            return;
        }

        let mut row_line = line.to_string();
        line::rewrite(&mut row_line, config);
        let cells: Vec<String> = row_line
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect();
        if Self::is_separator(&cells) {
            self.sections.push(Vec::new());
        } else if let Some(section) = self.sections.last_mut() {
            section.push(cells);
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn render(&self) -> &str {
        &self.html
    }

    fn force_finish(&mut self, _config: &ParserConfig) {
        if !self.finished {
            self.render_sections();
        }
    }
}

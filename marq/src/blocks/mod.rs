//! Block-level parsing: the parser contract, the variant set, and the
//! dispatcher.
//!
//! Every block variant is a small state machine fed one line at a
//! time. The [`Block`] enum is the closed set of variants; the
//! [`dispatch`] function decides, from a single line and a [`Scope`],
//! which variant should start consuming. Recursive variants (quote,
//! lists, checklist) re-enter `dispatch` with a narrowed scope to
//! resolve their children, so nesting is bounded only by
//! [`MAX_NESTING_DEPTH`] and otherwise unbounded.

mod checklist;
mod code_block;
mod headline;
mod horizontal_rule;
mod html_block;
mod ordered_list;
mod paragraph;
mod quote;
mod table;
mod unordered_list;

pub(crate) use checklist::Checklist;
pub(crate) use code_block::CodeBlock;
pub(crate) use headline::Headline;
pub(crate) use horizontal_rule::HorizontalRule;
pub(crate) use html_block::HtmlBlock;
pub(crate) use ordered_list::OrderedList;
pub(crate) use paragraph::Paragraph;
pub(crate) use quote::Quote;
pub(crate) use table::Table;
pub(crate) use unordered_list::UnorderedList;

use crate::config::ParserConfig;

/// Past this depth the dispatcher stops offering recursive variants,
/// so pathological nesting degrades to literal text instead of
/// growing the stack.
pub(crate) const MAX_NESTING_DEPTH: usize = 32;

/// The incremental consume/finish/render lifecycle every block
/// variant implements.
pub(crate) trait BlockParser {
    /// Feed one line (no trailing newline) into the block.
    fn add_line(&mut self, line: &str, config: &ParserConfig);

    /// Whether the block has reached its terminal state.
    fn is_finished(&self) -> bool;

    /// The accumulated HTML fragment. Stable once finished; repeated
    /// calls return the same value.
    fn render(&self) -> &str;

    /// Close out a block that never saw its natural terminator (end
    /// of input). Variants that already finish on a blank line need
    /// nothing here.
    fn force_finish(&mut self, _config: &ParserConfig) {}
}

/// The closed set of block parser variants.
pub(crate) enum Block {
    CodeBlock(CodeBlock),
    Headline(Headline),
    HorizontalRule(HorizontalRule),
    Quote(Quote),
    Table(Table),
    Checklist(Checklist),
    OrderedList(OrderedList),
    UnorderedList(UnorderedList),
    Html(HtmlBlock),
    Paragraph(Paragraph),
}

impl Block {
    /// The paragraph is the only variant the driver may interrupt
    /// when a higher-precedence starting line arrives.
    pub(crate) fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }
}

impl BlockParser for Block {
    fn add_line(&mut self, line: &str, config: &ParserConfig) {
        match self {
            Block::CodeBlock(p) => p.add_line(line, config),
            Block::Headline(p) => p.add_line(line, config),
            Block::HorizontalRule(p) => p.add_line(line, config),
            Block::Quote(p) => p.add_line(line, config),
            Block::Table(p) => p.add_line(line, config),
            Block::Checklist(p) => p.add_line(line, config),
            Block::OrderedList(p) => p.add_line(line, config),
            Block::UnorderedList(p) => p.add_line(line, config),
            Block::Html(p) => p.add_line(line, config),
            Block::Paragraph(p) => p.add_line(line, config),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Block::CodeBlock(p) => p.is_finished(),
            Block::Headline(p) => p.is_finished(),
            Block::HorizontalRule(p) => p.is_finished(),
            Block::Quote(p) => p.is_finished(),
            Block::Table(p) => p.is_finished(),
            Block::Checklist(p) => p.is_finished(),
            Block::OrderedList(p) => p.is_finished(),
            Block::UnorderedList(p) => p.is_finished(),
            Block::Html(p) => p.is_finished(),
            Block::Paragraph(p) => p.is_finished(),
        }
    }

    fn render(&self) -> &str {
        match self {
            Block::CodeBlock(p) => p.render(),
            Block::Headline(p) => p.render(),
            Block::HorizontalRule(p) => p.render(),
            Block::Quote(p) => p.render(),
            Block::Table(p) => p.render(),
            Block::Checklist(p) => p.render(),
            Block::OrderedList(p) => p.render(),
            Block::UnorderedList(p) => p.render(),
            Block::Html(p) => p.render(),
            Block::Paragraph(p) => p.render(),
        }
    }

    fn force_finish(&mut self, config: &ParserConfig) {
        match self {
            Block::CodeBlock(p) => p.force_finish(config),
            Block::Headline(p) => p.force_finish(config),
            Block::HorizontalRule(p) => p.force_finish(config),
            Block::Quote(p) => p.force_finish(config),
            Block::Table(p) => p.force_finish(config),
            Block::Checklist(p) => p.force_finish(config),
            Block::OrderedList(p) => p.force_finish(config),
            Block::UnorderedList(p) => p.force_finish(config),
            Block::Html(p) => p.force_finish(config),
            Block::Paragraph(p) => p.force_finish(config),
        }
    }
}

/// The set of variants allowed to start inside a given parent.
///
/// Narrowing the dispatcher per parent kind is what keeps recursion
/// to syntactically valid nesting: list items may only open further
/// lists, checklist items only further checklists, while quotes (and
/// the document root) accept the full variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    TopLevel,
    List,
    Checklist,
}

/// Select the variant that should start consuming `line`, if any.
///
/// Predicates run in fixed priority order; the paragraph predicate
/// matches any non-blank line, so at top level every non-blank line
/// is claimed by some variant. Blank lines match nothing.
pub(crate) fn dispatch(
    line: &str,
    config: &ParserConfig,
    depth: usize,
    scope: Scope,
) -> Option<Block> {
    let nesting_allowed = depth < MAX_NESTING_DEPTH;

    match scope {
        Scope::TopLevel => {
            if CodeBlock::is_starting_line(line) {
                return Some(Block::CodeBlock(CodeBlock::new()));
            }
            if Headline::is_starting_line(line) {
                return Some(Block::Headline(Headline::new()));
            }
            if HorizontalRule::is_starting_line(line) {
                return Some(Block::HorizontalRule(HorizontalRule::new()));
            }
            if nesting_allowed && Quote::is_starting_line(line) {
                return Some(Block::Quote(Quote::new(depth)));
            }
            if Table::is_starting_line(line) {
                return Some(Block::Table(Table::new()));
            }
            if nesting_allowed && Checklist::is_starting_line(line) {
                return Some(Block::Checklist(Checklist::new(depth)));
            }
            if nesting_allowed && OrderedList::is_starting_line(line) {
                return Some(Block::OrderedList(OrderedList::new(depth)));
            }
            if nesting_allowed && UnorderedList::is_starting_line(line) {
                return Some(Block::UnorderedList(UnorderedList::new(depth)));
            }
            if !config.html_wrapped_in_paragraph && HtmlBlock::is_starting_line(line) {
                return Some(Block::Html(HtmlBlock::new()));
            }
            if Paragraph::is_starting_line(line) {
                return Some(Block::Paragraph(Paragraph::new()));
            }
            None
        }
        Scope::List => {
            if nesting_allowed && OrderedList::is_starting_line(line) {
                return Some(Block::OrderedList(OrderedList::new(depth)));
            }
            if nesting_allowed && UnorderedList::is_starting_line(line) {
                return Some(Block::UnorderedList(UnorderedList::new(depth)));
            }
            None
        }
        Scope::Checklist => {
            if nesting_allowed && Checklist::is_starting_line(line) {
                return Some(Block::Checklist(Checklist::new(depth)));
            }
            None
        }
    }
}

/// Whether any non-paragraph predicate claims `line`. The driver uses
/// this to close an open paragraph instead of handing it a line that
/// starts a new block.
pub(crate) fn specialized_start(line: &str, config: &ParserConfig) -> bool {
    CodeBlock::is_starting_line(line)
        || Headline::is_starting_line(line)
        || HorizontalRule::is_starting_line(line)
        || Quote::is_starting_line(line)
        || Table::is_starting_line(line)
        || Checklist::is_starting_line(line)
        || OrderedList::is_starting_line(line)
        || UnorderedList::is_starting_line(line)
        || (!config.html_wrapped_in_paragraph && HtmlBlock::is_starting_line(line))
}

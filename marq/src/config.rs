//! Parse-time configuration switches.

use serde::{Deserialize, Serialize};

/// Switches that shape one parse.
///
/// A `ParserConfig` is immutable for the lifetime of a parse: the
/// [`Parser`](crate::Parser) owns one and hands it out by shared
/// reference to every component that needs it. Both switches default
/// to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Rewrite single-delimiter spans (`*text*`, `_text_`) to `<em>`.
    /// When disabled the delimiters pass through as literal text.
    pub emphasis_enabled: bool,
    /// When `true`, lines that look like raw HTML flow into the
    /// paragraph variant and end up wrapped in `<p>`. When `false`, a
    /// dedicated raw-HTML block claims them and emits them verbatim.
    pub html_wrapped_in_paragraph: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            emphasis_enabled: true,
            html_wrapped_in_paragraph: true,
        }
    }
}

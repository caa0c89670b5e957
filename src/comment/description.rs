//! Javadoc description renderer
//!
//! Word-wraps a tag's description text against the configured min/max wrap
//! columns, driven by a small state machine over a whitelist of HTML layout
//! tags. `<pre>`/`<code>` suspend wrapping entirely; paragraph, list, and
//! table tags translate into forced line breaks and indent adjustments.
//! When re-wrapping is disabled the original token stream is replayed and
//! only the left gutter is re-derived from current settings.

use crate::comment::patterns::html_tag_parts;
use crate::comment::tokenizer::{CommentTokenizer, TokenKind};
use crate::config::Config;
use crate::layout::PrintState;

/// Indent step applied by list and table tags
const HTML_INDENT_STEP: usize = 2;

/// HTML layout machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HtmlState {
    Normal,
    Paragraph,
    List,
    EndList,
    Table,
    EndTag,
    LineBreak,
    Preformatted,
}

struct Wrapper<'a> {
    state: &'a mut PrintState,
    /// Gutter written after the indent at the start of each wrapped line
    prefix: &'a str,
    /// Extra columns after the prefix (lined-up id alignment)
    hang: usize,
    min_col: usize,
    max_col: usize,
    mode: HtmlState,
    /// Line breaks owed before the next word is emitted
    pending_breaks: usize,
    pending_space: bool,
    /// Current list/table indent, in columns past the hang point
    html_indent: usize,
}

impl Wrapper<'_> {
    fn break_line(&mut self) {
        self.state.newline();
        self.state.indent();
        self.state.word(self.prefix);
        let target = self.state.line_len() + self.hang + self.html_indent;
        self.state.pad_to(target);
    }

    /// Apply owed breaks/space before emitting `width` more columns
    fn prepare_for(&mut self, width: usize) {
        if self.pending_breaks > 0 {
            for _ in 0..self.pending_breaks {
                self.break_line();
            }
            self.pending_breaks = 0;
            self.pending_space = false;
            return;
        }
        let sep = usize::from(self.pending_space);
        let col = self.state.line_len();
        if self.mode != HtmlState::Preformatted
            && col > self.min_col
            && col + sep + width > self.max_col
        {
            self.break_line();
            self.pending_space = false;
            return;
        }
        if self.pending_space {
            self.state.space();
            self.pending_space = false;
        }
    }

    fn emit_word(&mut self, word: &str) {
        self.prepare_for(word.chars().count());
        self.state.word(word);
    }

    fn handle_tag(&mut self, token: &str, closing: bool, name: &str) {
        match (closing, name) {
            (false, "pre" | "code") => {
                self.emit_word(token);
                self.mode = HtmlState::Preformatted;
            }
            (true, "pre" | "code") => {
                self.emit_word(token);
                self.mode = HtmlState::Normal;
            }
            (false, "p") => {
                self.emit_word(token);
                self.mode = HtmlState::Paragraph;
                self.pending_breaks = 2;
            }
            (false, "br") => {
                self.emit_word(token);
                self.mode = HtmlState::LineBreak;
                self.pending_breaks = 1;
            }
            (false, "ul" | "ol") => {
                self.prepare_for(token.chars().count());
                self.break_line();
                self.state.word(token);
                self.html_indent += HTML_INDENT_STEP;
                self.mode = HtmlState::List;
                self.pending_breaks = 1;
            }
            (true, "ul" | "ol") => {
                self.html_indent = self.html_indent.saturating_sub(HTML_INDENT_STEP);
                self.pending_breaks = 0;
                self.break_line();
                self.state.word(token);
                self.mode = HtmlState::EndList;
                self.pending_breaks = 1;
            }
            (false, "li") => {
                self.pending_breaks = 0;
                self.break_line();
                self.state.word(token);
                self.pending_space = false;
                self.mode = HtmlState::List;
            }
            (false, "table" | "tr") => {
                self.pending_breaks = 0;
                self.break_line();
                self.state.word(token);
                self.html_indent += HTML_INDENT_STEP;
                self.mode = HtmlState::Table;
            }
            (true, "table" | "tr") => {
                self.html_indent = self.html_indent.saturating_sub(HTML_INDENT_STEP);
                self.pending_breaks = 0;
                self.break_line();
                self.state.word(token);
                self.mode = HtmlState::Table;
            }
            (false, "td" | "th") | (true, "td" | "th") => {
                self.pending_breaks = 0;
                self.break_line();
                self.state.word(token);
                self.mode = HtmlState::Table;
            }
            (true, _) => {
                // Closing tag outside the layout whitelist: keep it inline
                // and force a following space rather than a line break
                self.emit_word(token);
                self.mode = HtmlState::EndTag;
                self.pending_space = true;
            }
            (false, _) => {
                self.emit_word(token);
            }
        }
    }
}

/// Render a description string into the print state.
///
/// The caller has already positioned the cursor where the text begins;
/// `prefix` is re-emitted (after the indent) at the start of every wrapped
/// continuation line, and `hang` pads continuation text out to a shared
/// start column.
pub fn render_description(
    state: &mut PrintState,
    desc: &str,
    prefix: &str,
    hang: usize,
    config: &Config,
) {
    if !config.javadoc_wrap {
        render_maintained(state, desc, prefix);
        return;
    }

    let mut wrapper = Wrapper {
        state,
        prefix,
        hang,
        min_col: config.javadoc_min_column,
        max_col: config.javadoc_max_column,
        mode: HtmlState::Normal,
        pending_breaks: 0,
        pending_space: false,
        html_indent: 0,
    };

    let mut tok = CommentTokenizer::new(desc);
    while tok.has_next() {
        let token = tok.next_token();
        match token.kind {
            TokenKind::Word => {
                if let Some((closing, name)) = html_tag_parts(&token.image) {
                    wrapper.handle_tag(&token.image, closing, &name);
                } else if !token.image.is_empty() {
                    wrapper.emit_word(&token.image);
                }
            }
            TokenKind::Space => {
                if wrapper.mode == HtmlState::Preformatted {
                    wrapper.state.word(&token.image);
                } else if !wrapper.state.line_is_empty() {
                    wrapper.pending_space = true;
                }
            }
            TokenKind::Newline => {
                if wrapper.mode == HtmlState::Preformatted {
                    wrapper.break_line();
                } else {
                    wrapper.pending_space = true;
                }
            }
        }
    }
}

/// Replay the original token stream verbatim, re-deriving only the left
/// gutter for each line break
fn render_maintained(state: &mut PrintState, desc: &str, prefix: &str) {
    // The gutter carries no trailing space of its own; the source's own
    // post-gutter spacing follows as a Space token when it survived
    // tokenization, and a single space is forced when it did not
    let gutter = prefix.trim_end();
    let mut tok = CommentTokenizer::new(desc);
    let mut at_line_start = false;
    while tok.has_next() {
        let token = tok.next_token();
        match token.kind {
            TokenKind::Word => {
                if at_line_start {
                    state.space();
                }
                state.word(&token.image);
                at_line_start = false;
            }
            TokenKind::Space => {
                state.word(&token.image);
                at_line_start = false;
            }
            TokenKind::Newline => {
                state.newline();
                state.indent();
                state.word(gutter);
                at_line_start = true;
            }
        }
    }
}

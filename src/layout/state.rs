//! Print state / layout cursor
//!
//! The single mutable context threaded through the whole traversal. Owns the
//! indent depth, the current line buffer, pending-blank-line bookkeeping,
//! brace-style selection per construct, the class-name stack, and the stack
//! of in-scope field-alignment records. Every other component composes the
//! primitive operations exposed here; completed lines accumulate in order
//! and are joined by [`PrintState::finish`].

use std::mem;

use crate::config::{BraceStyle, Config};
use crate::layout::sizes::FieldSizes;

/// Which construct's brace style applies to a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Class,
    Method,
    Code,
}

/// The last construct emitted in the current member scope; drives blank-line
/// insertion between consecutive members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    Empty,
    Field,
    Method,
    Class,
    Interface,
}

pub struct PrintState {
    config: Config,
    indent_depth: usize,
    line: String,
    lines: Vec<String>,
    /// Line breaks already emitted that source newline tokens may consume
    owed_blank: usize,
    /// A blank line was just forced; further consumed newlines collapse
    just_blanked: bool,
    last_construct: ConstructKind,
    construct_stack: Vec<ConstructKind>,
    class_names: Vec<String>,
    size_stack: Vec<FieldSizes>,
}

impl PrintState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        PrintState {
            config,
            indent_depth: 0,
            line: String::new(),
            lines: Vec::new(),
            owed_blank: 0,
            just_blanked: false,
            last_construct: ConstructKind::Empty,
            construct_stack: Vec::new(),
            class_names: Vec::new(),
            size_stack: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ------------------------------------------------------------------
    // Line buffer primitives
    // ------------------------------------------------------------------

    /// A buffer holding only whitespace (a pending indent) is discarded,
    /// never pushed as a blank line; blank lines are always emitted
    /// explicitly
    fn flush(&mut self) {
        let content_len = self.line.trim_end().len();
        if content_len > 0 {
            let mut done = mem::take(&mut self.line);
            done.truncate(content_len);
            self.lines.push(done);
        } else {
            self.line.clear();
        }
    }

    /// Flush any pending content, then write the current indent into the
    /// now-empty buffer. A buffer holding only indent characters (left by a
    /// surprise-indent recovery) is rebuilt in place, not flushed.
    pub fn indent(&mut self) {
        if self.line.chars().all(char::is_whitespace) {
            self.line.clear();
        } else {
            self.flush();
            self.owed_blank = 1;
        }
        let unit = self.config.indent_unit();
        for _ in 0..self.indent_depth {
            self.line.push_str(&unit);
        }
        self.just_blanked = false;
    }

    pub fn word(&mut self, text: &str) {
        self.line.push_str(text);
        self.just_blanked = false;
    }

    pub fn space(&mut self) {
        self.line.push(' ');
    }

    /// Complete the current line. With an empty buffer this emits a blank
    /// line instead and records it as owed.
    pub fn newline(&mut self) {
        if self.line.is_empty() {
            self.lines.push(String::new());
            self.owed_blank += 1;
            self.just_blanked = true;
        } else {
            self.flush();
            self.owed_blank = 1;
        }
    }

    /// Account for one attached source newline token.
    ///
    /// Returns whether the line break was already expected. Decrements the
    /// owed counter if positive; otherwise forces one fresh blank line.
    /// Repeated unexpected newlines collapse, so any run of source blank
    /// lines prints as at most one.
    pub fn consume_newline(&mut self) -> bool {
        if self.owed_blank > 0 {
            self.owed_blank -= 1;
            true
        } else if self.just_blanked {
            false
        } else {
            self.flush();
            self.lines.push(String::new());
            self.just_blanked = true;
            false
        }
    }

    /// Corrective re-indent when blank-line bookkeeping and actually emitted
    /// newlines diverge: rebuild the expected indent without touching any
    /// other state
    pub fn surprise_indent(&mut self) {
        self.line.clear();
        let unit = self.config.indent_unit();
        for _ in 0..self.indent_depth {
            self.line.push_str(&unit);
        }
    }

    #[must_use]
    pub fn line_len(&self) -> usize {
        self.line.chars().count()
    }

    #[must_use]
    pub fn line_is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Pad the current line with spaces out to `col`
    pub fn pad_to(&mut self, col: usize) {
        while self.line_len() < col {
            self.line.push(' ');
        }
        self.just_blanked = false;
    }

    // ------------------------------------------------------------------
    // Indent depth
    // ------------------------------------------------------------------

    pub fn increase_indent(&mut self) {
        self.indent_depth += 1;
    }

    /// Clamped at zero; a decrement past zero is absorbed
    pub fn decrease_indent(&mut self) {
        self.indent_depth = self.indent_depth.saturating_sub(1);
    }

    #[must_use]
    pub fn indent_depth(&self) -> usize {
        self.indent_depth
    }

    // ------------------------------------------------------------------
    // Blocks and expressions
    // ------------------------------------------------------------------

    fn brace_style(&self, kind: BlockKind) -> BraceStyle {
        match kind {
            BlockKind::Class => self.config.class_brace,
            BlockKind::Method => self.config.method_brace,
            BlockKind::Code => self.config.block_brace,
        }
    }

    /// Open a block, placing `{` per the construct's configured brace style,
    /// and step the indent in for the body
    pub fn begin_block(&mut self, kind: BlockKind) {
        match self.brace_style(kind) {
            BraceStyle::C => {
                if self.config.space_before_brace
                    && !self.line.is_empty()
                    && !self.line.ends_with(' ')
                {
                    self.space();
                }
                self.word("{");
                self.increase_indent();
            }
            BraceStyle::Pascal => {
                self.newline();
                self.indent();
                self.word("{");
                self.increase_indent();
            }
            BraceStyle::Emacs => {
                self.newline();
                self.increase_indent();
                self.indent();
                self.word("{");
            }
        }
    }

    /// Close a block opened with the same kind. The `indent` call flushes
    /// any pending body line; an already-completed line is not followed by
    /// a blank.
    pub fn end_block(&mut self, kind: BlockKind) {
        match self.brace_style(kind) {
            BraceStyle::C | BraceStyle::Pascal => {
                self.decrease_indent();
                self.indent();
                self.word("}");
            }
            BraceStyle::Emacs => {
                self.indent();
                self.word("}");
                self.decrease_indent();
            }
        }
    }

    /// Emit `(`, padded inside when configured and non-empty
    pub fn begin_expression(&mut self, empty: bool) {
        self.word("(");
        if self.config.space_in_parens && !empty {
            self.space();
        }
    }

    /// Emit `)`, padded inside when configured and non-empty
    pub fn end_expression(&mut self, empty: bool) {
        if self.config.space_in_parens && !empty {
            self.space();
        }
        self.word(")");
    }

    // ------------------------------------------------------------------
    // Member constructs
    // ------------------------------------------------------------------

    fn member_gap(&mut self, kind: ConstructKind) {
        if self.last_construct == ConstructKind::Empty {
            return;
        }
        // Consecutive fields stay tight
        if kind == ConstructKind::Field && self.last_construct == ConstructKind::Field {
            return;
        }
        if !self.line.is_empty() {
            self.newline();
        }
        for _ in 0..self.config.blank_lines_between_members {
            self.newline();
        }
    }

    pub fn begin_field(&mut self) {
        self.member_gap(ConstructKind::Field);
    }

    pub fn end_field(&mut self) {
        self.last_construct = ConstructKind::Field;
    }

    pub fn begin_method(&mut self) {
        self.member_gap(ConstructKind::Method);
    }

    pub fn end_method(&mut self) {
        self.last_construct = ConstructKind::Method;
    }

    pub fn begin_class(&mut self) {
        self.member_gap(ConstructKind::Class);
    }

    pub fn end_class(&mut self) {
        self.last_construct = ConstructKind::Class;
    }

    pub fn begin_interface(&mut self) {
        self.member_gap(ConstructKind::Interface);
    }

    pub fn end_interface(&mut self) {
        self.last_construct = ConstructKind::Interface;
    }

    /// Enter a nested member scope (a type body): the first member inside
    /// never gets a leading gap
    pub fn push_member_scope(&mut self) {
        self.construct_stack.push(self.last_construct);
        self.last_construct = ConstructKind::Empty;
    }

    pub fn pop_member_scope(&mut self) {
        self.last_construct = self.construct_stack.pop().unwrap_or(ConstructKind::Empty);
    }

    #[must_use]
    pub fn last_construct(&self) -> ConstructKind {
        self.last_construct
    }

    // ------------------------------------------------------------------
    // Class-name stack (nested-class-qualified javadoc generation)
    // ------------------------------------------------------------------

    pub fn push_class_name(&mut self, name: &str) {
        self.class_names.push(name.to_string());
    }

    pub fn pop_class_name(&mut self) {
        self.class_names.pop();
    }

    #[must_use]
    pub fn qualified_class_name(&self) -> String {
        self.class_names.join(".")
    }

    #[must_use]
    pub fn class_nesting(&self) -> usize {
        self.class_names.len()
    }

    // ------------------------------------------------------------------
    // Field-size stack
    // ------------------------------------------------------------------

    pub fn push_sizes(&mut self, sizes: FieldSizes) {
        self.size_stack.push(sizes);
    }

    pub fn pop_sizes(&mut self) {
        self.size_stack.pop();
    }

    #[must_use]
    pub fn sizes(&self) -> Option<&FieldSizes> {
        self.size_stack.last()
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Flush the final line and join everything with the configured line
    /// ending. Trailing blank lines collapse into the single final ending.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.flush();
        while self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            return String::new();
        }
        let eol = self.config.line_ending.as_str();
        let mut out = self.lines.join(eol);
        out.push_str(eol);
        out
    }
}

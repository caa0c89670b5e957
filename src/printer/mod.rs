//! Tree-walking printer
//!
//! The orchestrator: visits every node of a [`CompilationUnit`] and emits
//! text through the print state primitives. Declaration and statement
//! handlers live in the `decl` and `stmt` submodules; this module owns the
//! entry point and the special-token (comment/newline) dispatch shared by
//! all of them.

mod decl;
mod expr;
mod stmt;

use anyhow::bail;

use crate::comment::{print_block_comment, JavadocComment};
use crate::config::Config;
use crate::error::Result;
use crate::layout::PrintState;
use crate::tree::{CompilationUnit, MethodDecl, Trivia};

/// Which declaration kind a javadoc comment documents; selects the
/// required-tag policy applied before rendering
pub(crate) enum DocPolicy<'a> {
    Type,
    Method(&'a MethodDecl),
    Field,
}

/// Formats one compilation unit per its configuration
pub struct Printer {
    state: PrintState,
}

impl Printer {
    /// Rejects out-of-range configuration values up front
    pub fn new(config: Config) -> Result<Self> {
        if let Some(message) = config.validate() {
            bail!("invalid configuration: {message}");
        }
        Ok(Printer {
            state: PrintState::new(config),
        })
    }

    /// Print the whole unit and return the reformatted source text
    pub fn format(mut self, unit: &CompilationUnit) -> Result<String> {
        self.print_unit(unit)?;
        Ok(self.state.finish())
    }

    fn print_unit(&mut self, unit: &CompilationUnit) -> Result<()> {
        if let Some(package) = &unit.package {
            self.print_stmt_trivia(&package.trivia)?;
            self.state.indent();
            self.state.word("package ");
            self.state.word(&package.name);
            self.state.word(";");
            self.state.newline();
            self.state.newline();
        }

        for import in &unit.imports {
            self.print_stmt_trivia(&import.trivia)?;
            self.state.indent();
            if import.is_static {
                self.state.word("import static ");
            } else {
                self.state.word("import ");
            }
            self.state.word(&import.path);
            self.state.word(";");
            self.state.newline();
        }
        if !unit.imports.is_empty() {
            self.state.newline();
        }

        for decl in &unit.types {
            self.print_type(decl)?;
        }
        self.print_stmt_trivia(&unit.trailing)
    }

    /// Trivia attached to a declaration: javadoc goes through the model and
    /// the declaration's required-tag policy. When no javadoc was present
    /// but the policy demands one, a stub is synthesized after the rest of
    /// the trivia.
    pub(crate) fn print_decl_trivia(&mut self, trivia: &[Trivia], policy: &DocPolicy) -> Result<()> {
        let mut saw_javadoc = false;
        for (i, item) in trivia.iter().enumerate() {
            match item {
                Trivia::Javadoc(raw) => {
                    saw_javadoc = true;
                    self.print_javadoc(Some(raw), policy);
                }
                _ => self.print_plain_trivia(item, last_in_run(trivia, i)),
            }
        }
        if !saw_javadoc {
            self.print_javadoc(None, policy);
        }
        Ok(())
    }

    /// Trivia attached to a statement or block tail: javadoc here has no
    /// declaration to document and reflows as an ordinary block comment
    pub(crate) fn print_stmt_trivia(&mut self, trivia: &[Trivia]) -> Result<()> {
        for (i, item) in trivia.iter().enumerate() {
            self.print_plain_trivia(item, last_in_run(trivia, i));
        }
        Ok(())
    }

    fn print_plain_trivia(&mut self, item: &Trivia, last_in_run: bool) {
        match item {
            Trivia::Newline => {
                self.state.consume_newline();
            }
            Trivia::Line(text) => {
                self.state.indent();
                self.state.word(text.trim_end());
                self.state.newline();
            }
            Trivia::Block(raw) | Trivia::Javadoc(raw) => {
                let config = self.state.config().clone();
                print_block_comment(&mut self.state, raw, last_in_run, &config);
                // Complete the comment's last line so an attached source
                // newline counts as expected rather than forcing a blank
                if !self.state.line_is_empty() {
                    self.state.newline();
                }
            }
        }
    }

    /// Parse, complete, and render one javadoc comment. `raw` of `None`
    /// means the declaration is undocumented; a stub is generated only when
    /// the policy's require flag asks for one.
    fn print_javadoc(&mut self, raw: Option<&str>, policy: &DocPolicy) {
        let config = self.state.config().clone();
        let mut doc = match raw {
            Some(raw) => JavadocComment::parse(raw),
            None => JavadocComment::default(),
        };

        match policy {
            DocPolicy::Type => {
                if raw.is_none() {
                    if !config.require_class_tags {
                        return;
                    }
                    if self.state.class_nesting() > 1 && !config.document_nested_classes {
                        return;
                    }
                }
                doc.finish_for_type(&self.state.qualified_class_name(), &config);
            }
            DocPolicy::Method(method) => {
                if raw.is_none() && !config.require_method_tags {
                    return;
                }
                let params: Vec<String> =
                    method.params.iter().map(|p| p.name.clone()).collect();
                match &method.return_type {
                    Some(ret) => {
                        doc.finish_for_method(&params, !ret.is_void(), &method.throws, &config);
                    }
                    None => doc.finish_for_constructor(&params, &config),
                }
            }
            DocPolicy::Field => {
                if raw.is_none() && !config.require_field_tags {
                    return;
                }
                doc.finish_for_field(&config);
            }
        }

        if !doc.is_empty() {
            doc.render(&mut self.state);
        }
    }

    /// Keyword that may be followed by a parenthesized expression
    pub(crate) fn keyword(&mut self, word: &str) {
        self.state.word(word);
        if self.state.config().space_after_keyword {
            self.state.space();
        }
    }

    /// Statement handlers leave their last line in the buffer; complete it
    /// unless a nested statement already did
    pub(crate) fn end_statement_line(&mut self) {
        if !self.state.line_is_empty() {
            self.state.newline();
        }
    }
}

/// Whether no further comment follows in this trivia list
fn last_in_run(trivia: &[Trivia], i: usize) -> bool {
    !trivia[i + 1..]
        .iter()
        .any(|t| !matches!(t, Trivia::Newline))
}

//! Statement printing.

use crate::error::Result;
use crate::layout::BlockKind;
use crate::printer::Printer;
use crate::tree::{
    CatchClause, Expr, ForInit, LocalVarDecl, Modifiers, Stmt, StmtKind, Trivia,
};

fn has_javadoc(trivia: &[Trivia]) -> bool {
    trivia.iter().any(|t| matches!(t, Trivia::Javadoc(_)))
}

impl Printer {
    pub(crate) fn print_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        self.print_stmt_trivia(&stmt.trivia)?;
        match &stmt.kind {
            StmtKind::LocalVar(decl) => self.print_local_var(decl, has_javadoc(&stmt.trivia)),
            StmtKind::Expr(expr) => {
                self.state.indent();
                self.print_expr(expr)?;
                self.state.word(";");
                self.state.newline();
                Ok(())
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.state.indent();
                self.print_if(cond, then_branch, else_branch.as_deref())?;
                self.end_statement_line();
                Ok(())
            }
            StmtKind::While { cond, body } => {
                self.state.indent();
                self.keyword("while");
                self.print_paren_expr(cond)?;
                self.print_controlled(body)?;
                self.end_statement_line();
                Ok(())
            }
            StmtKind::For {
                init,
                cond,
                update,
                body,
            } => {
                self.print_for(init.as_ref(), cond.as_ref(), update, body)?;
                self.end_statement_line();
                Ok(())
            }
            StmtKind::Return(value) => {
                self.state.indent();
                self.state.word("return");
                if let Some(value) = value {
                    self.state.space();
                    self.print_expr(value)?;
                }
                self.state.word(";");
                self.state.newline();
                Ok(())
            }
            StmtKind::Throw(expr) => {
                self.state.indent();
                self.state.word("throw");
                self.state.space();
                self.print_expr(expr)?;
                self.state.word(";");
                self.state.newline();
                Ok(())
            }
            StmtKind::Try {
                body,
                catches,
                finally,
            } => {
                self.print_try(body, catches, finally.as_ref())?;
                self.end_statement_line();
                Ok(())
            }
            StmtKind::Block(block) => {
                self.state.indent();
                self.print_block_body(block, BlockKind::Code)?;
                self.state.newline();
                Ok(())
            }
            StmtKind::Break(label) => {
                self.print_jump("break", label.as_deref());
                Ok(())
            }
            StmtKind::Continue(label) => {
                self.print_jump("continue", label.as_deref());
                Ok(())
            }
            StmtKind::Empty => {
                self.state.indent();
                self.state.word(";");
                self.state.newline();
                Ok(())
            }
        }
    }

    fn print_jump(&mut self, keyword: &str, label: Option<&str>) {
        self.state.indent();
        self.state.word(keyword);
        if let Some(label) = label {
            self.state.space();
            self.state.word(label);
        }
        self.state.word(";");
        self.state.newline();
    }

    fn print_local_var(&mut self, decl: &LocalVarDecl, documented: bool) -> Result<()> {
        let modifiers = Modifiers {
            is_final: decl.is_final,
            ..Modifiers::default()
        };
        self.print_declaration_line(&modifiers, &decl.ty, &decl.declarators, documented)
    }

    pub(crate) fn print_paren_expr(&mut self, expr: &Expr) -> Result<()> {
        self.state.begin_expression(false);
        self.print_expr(expr)?;
        self.state.end_expression(false);
        Ok(())
    }

    /// The controlled body of `if`/`while`/`for`. A braced body opens a code
    /// block on the same line; a bare statement goes on its own indented
    /// line. Returns whether it was braced, which drives `else` placement.
    fn print_controlled(&mut self, body: &Stmt) -> Result<bool> {
        if let StmtKind::Block(block) = &body.kind {
            self.print_stmt_trivia(&body.trivia)?;
            self.print_block_body(block, BlockKind::Code)?;
            Ok(true)
        } else {
            self.state.increase_indent();
            let result = self.print_stmt(body);
            self.state.decrease_indent();
            result.map(|()| false)
        }
    }

    /// The caller has already indented; `else if` chains re-enter here on
    /// the same line
    fn print_if(&mut self, cond: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> Result<()> {
        self.keyword("if");
        self.print_paren_expr(cond)?;
        let braced = self.print_controlled(then_branch)?;

        if let Some(els) = else_branch {
            if braced && !self.state.config().newline_before_else {
                self.state.space();
            } else {
                self.end_statement_line();
                self.state.indent();
            }
            self.state.word("else");
            if let StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } = &els.kind
            {
                self.state.space();
                return self.print_if(cond, then_branch, else_branch.as_deref());
            }
            self.print_controlled(els)?;
        }
        Ok(())
    }

    fn print_for(
        &mut self,
        init: Option<&ForInit>,
        cond: Option<&Expr>,
        update: &[Expr],
        body: &Stmt,
    ) -> Result<()> {
        self.state.indent();
        self.keyword("for");
        self.state.begin_expression(false);
        match init {
            Some(ForInit::Decl(decl)) => self.print_for_init_decl(decl)?,
            Some(ForInit::Exprs(exprs)) => {
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        self.state.word(",");
                        self.state.space();
                    }
                    self.print_expr(expr)?;
                }
            }
            None => {}
        }
        self.state.word(";");
        if let Some(cond) = cond {
            self.state.space();
            self.print_expr(cond)?;
        }
        self.state.word(";");
        if !update.is_empty() {
            self.state.space();
            for (i, expr) in update.iter().enumerate() {
                if i > 0 {
                    self.state.word(",");
                    self.state.space();
                }
                self.print_expr(expr)?;
            }
        }
        self.state.end_expression(false);
        self.print_controlled(body)?;
        Ok(())
    }

    /// A local declaration inside a `for` header: inline, never aligned
    fn print_for_init_decl(&mut self, decl: &LocalVarDecl) -> Result<()> {
        if decl.is_final {
            self.state.word("final ");
        }
        self.state.word(&decl.ty.render());
        self.state.space();
        for (i, declarator) in decl.declarators.iter().enumerate() {
            if i > 0 {
                self.state.word(",");
                self.state.space();
            }
            self.state.word(&declarator.name);
            for _ in 0..declarator.extra_dims {
                self.state.word("[]");
            }
            if let Some(init) = &declarator.init {
                self.state.word(" = ");
                self.print_expr(init)?;
            }
        }
        Ok(())
    }

    fn print_try(
        &mut self,
        body: &crate::tree::Block,
        catches: &[CatchClause],
        finally: Option<&crate::tree::Block>,
    ) -> Result<()> {
        self.state.indent();
        self.state.word("try");
        self.print_block_body(body, BlockKind::Code)?;

        for catch in catches {
            self.clause_separator();
            self.keyword("catch");
            self.state.begin_expression(false);
            if catch.param.is_final {
                self.state.word("final ");
            }
            self.state.word(&catch.param.ty.render());
            self.state.space();
            self.state.word(&catch.param.name);
            self.state.end_expression(false);
            self.print_block_body(&catch.body, BlockKind::Code)?;
        }

        if let Some(finally) = finally {
            self.clause_separator();
            self.state.word("finally");
            self.print_block_body(finally, BlockKind::Code)?;
        }
        Ok(())
    }

    /// Placement of `catch`/`finally` after a closing brace
    fn clause_separator(&mut self) {
        if self.state.config().newline_before_catch || self.state.line_is_empty() {
            self.end_statement_line();
            self.state.indent();
        } else {
            self.state.space();
        }
    }
}

//! Expression printing.

use crate::error::Result;
use crate::printer::Printer;
use crate::tree::Expr;

impl Printer {
    pub(crate) fn print_expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Ident(name) => {
                self.state.word(name);
            }
            Expr::Literal(text) => {
                self.state.word(text);
            }
            Expr::Field { target, name } => {
                self.print_expr(target)?;
                self.state.word(".");
                self.state.word(name);
            }
            Expr::Call { target, name, args } => {
                if let Some(target) = target {
                    self.print_expr(target)?;
                    self.state.word(".");
                }
                self.state.word(name);
                self.print_args(args)?;
            }
            Expr::Binary { op, lhs, rhs } => {
                self.print_expr(lhs)?;
                self.state.space();
                self.state.word(op);
                self.state.space();
                self.print_expr(rhs)?;
            }
            Expr::Unary {
                op,
                operand,
                postfix,
            } => {
                if *postfix {
                    self.print_expr(operand)?;
                    self.state.word(op);
                } else {
                    self.state.word(op);
                    self.print_expr(operand)?;
                }
            }
            Expr::Assign { op, target, value } => {
                self.print_expr(target)?;
                self.state.space();
                self.state.word(op);
                self.state.space();
                self.print_expr(value)?;
            }
            Expr::Cast { ty, expr } => {
                self.state.word("(");
                self.state.word(&ty.render());
                self.state.word(")");
                if self.state.config().space_after_cast {
                    self.state.space();
                }
                self.print_expr(expr)?;
            }
            Expr::New { ty, args } => {
                self.state.word("new ");
                self.state.word(&ty.render());
                self.print_args(args)?;
            }
            Expr::Paren(inner) => {
                self.state.begin_expression(false);
                self.print_expr(inner)?;
                self.state.end_expression(false);
            }
            Expr::Ternary {
                cond,
                then_expr,
                else_expr,
            } => {
                self.print_expr(cond)?;
                self.state.word(" ? ");
                self.print_expr(then_expr)?;
                self.state.word(" : ");
                self.print_expr(else_expr)?;
            }
            Expr::ArrayInit(items) => {
                self.state.word("{");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.state.word(",");
                    }
                    self.state.space();
                    self.print_expr(item)?;
                }
                if !items.is_empty() {
                    self.state.space();
                }
                self.state.word("}");
            }
        }
        Ok(())
    }

    fn print_args(&mut self, args: &[Expr]) -> Result<()> {
        self.state.begin_expression(args.is_empty());
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.state.word(",");
                self.state.space();
            }
            self.print_expr(arg)?;
        }
        self.state.end_expression(args.is_empty());
        Ok(())
    }
}

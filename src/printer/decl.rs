//! Declaration printing: types, fields, methods, constructors, initializers.

use anyhow::bail;

use crate::config::FieldSpacing;
use crate::error::Result;
use crate::layout::{measure_locals, measure_members, BlockKind};
use crate::printer::{DocPolicy, Printer};
use crate::tree::{
    Block, Declarator, FieldDecl, InitializerBlock, Member, MethodDecl, Modifiers, Trivia, Type,
    TypeDecl, TypeKind,
};

fn has_javadoc(trivia: &[Trivia]) -> bool {
    trivia.iter().any(|t| matches!(t, Trivia::Javadoc(_)))
}

impl Printer {
    pub(crate) fn print_type(&mut self, decl: &TypeDecl) -> Result<()> {
        match decl.kind {
            TypeKind::Class => self.state.begin_class(),
            TypeKind::Interface => self.state.begin_interface(),
        }
        self.state.push_class_name(&decl.name);
        let result = self.print_type_inner(decl);
        self.state.pop_class_name();
        match decl.kind {
            TypeKind::Class => self.state.end_class(),
            TypeKind::Interface => self.state.end_interface(),
        }
        result
    }

    fn print_type_inner(&mut self, decl: &TypeDecl) -> Result<()> {
        self.print_decl_trivia(&decl.trivia, &DocPolicy::Type)?;

        self.state.indent();
        if !decl.modifiers.is_empty() {
            self.state.word(&decl.modifiers.render());
            self.state.space();
        }
        match decl.kind {
            TypeKind::Class => self.state.word("class "),
            TypeKind::Interface => self.state.word("interface "),
        }
        self.state.word(&decl.name);
        if let Some(superclass) = &decl.extends {
            self.state.word(" extends ");
            self.state.word(superclass);
        }
        if !decl.implements.is_empty() {
            self.state.word(" implements ");
            self.state.word(&decl.implements.join(", "));
        }

        let sizes = measure_members(&decl.members, self.state.config());
        self.state.begin_block(BlockKind::Class);
        self.state.push_member_scope();
        self.state.push_sizes(sizes);

        let mut result = Ok(());
        for member in &decl.members {
            result = self.print_member(member);
            if result.is_err() {
                break;
            }
        }
        if result.is_ok() {
            result = self.print_stmt_trivia(&decl.body_trailing);
        }

        self.state.pop_sizes();
        self.state.pop_member_scope();
        self.state.end_block(BlockKind::Class);
        self.state.newline();
        result
    }

    fn print_member(&mut self, member: &Member) -> Result<()> {
        match member {
            Member::Field(field) => self.print_field(field),
            Member::Method(method) => self.print_method(method),
            Member::Constructor(method) => {
                if method.return_type.is_some() {
                    bail!("constructor {} declares a return type", method.name);
                }
                self.print_method(method)
            }
            Member::Nested(decl) => self.print_type(decl),
            Member::Initializer(init) => self.print_initializer(init),
        }
    }

    fn print_field(&mut self, field: &FieldDecl) -> Result<()> {
        self.state.begin_field();
        self.print_decl_trivia(&field.trivia, &DocPolicy::Field)?;
        self.print_declaration_line(
            &field.modifiers,
            &field.ty,
            &field.declarators,
            has_javadoc(&field.trivia),
        )?;
        self.state.end_field();
        Ok(())
    }

    /// One aligned (or natural) `modifiers type name = init;` line, shared
    /// by fields and local variables. `documented` feeds the javadoc-gated
    /// alignment policy.
    pub(crate) fn print_declaration_line(
        &mut self,
        modifiers: &Modifiers,
        ty: &Type,
        declarators: &[Declarator],
        documented: bool,
    ) -> Result<()> {
        let Some(first) = declarators.first() else {
            bail!("declaration of type {} has no declarators", ty.render());
        };
        let config = self.state.config().clone();
        let sizes = self.state.sizes().cloned().unwrap_or_default();
        let align = !sizes.is_empty()
            && match config.field_spacing {
                FieldSpacing::Never => false,
                FieldSpacing::Always | FieldSpacing::AlignEquals => true,
                FieldSpacing::Javadoc => !documented,
            };

        self.state.indent();
        let base = self.state.line_len();

        if align && config.field_spacing != FieldSpacing::AlignEquals {
            // Column alignment: each token padded to its scope-wide width,
            // then one separator space
            if sizes.modifier_width > 0 {
                if !modifiers.is_empty() {
                    self.state.word(&modifiers.render());
                }
                self.state.pad_to(base + sizes.modifier_width);
                self.state.space();
            }
            let ty_base = self.state.line_len();
            self.state.word(&ty.render());
            self.state.pad_to(ty_base + sizes.type_width);
            self.state.space();
            let name_base = self.state.line_len();
            self.print_declarator_name(first);
            if let Some(init) = &first.init {
                self.state.pad_to(name_base + sizes.name_width);
                self.state.space();
                self.state.word("=");
                self.state.space();
                self.print_expr(init)?;
            }
        } else {
            if !modifiers.is_empty() {
                self.state.word(&modifiers.render());
                self.state.space();
            }
            self.state.word(&ty.render());
            self.state.space();
            self.print_declarator_name(first);
            if let Some(init) = &first.init {
                if align {
                    // Equals alignment: pad the natural prefix out to the
                    // widest one in scope
                    self.state.pad_to(base + sizes.equals_width);
                }
                self.state.space();
                self.state.word("=");
                self.state.space();
                self.print_expr(init)?;
            }
        }

        for declarator in &declarators[1..] {
            self.state.word(",");
            self.state.space();
            self.print_declarator_name(declarator);
            if let Some(init) = &declarator.init {
                self.state.word(" = ");
                self.print_expr(init)?;
            }
        }
        self.state.word(";");
        self.state.newline();
        Ok(())
    }

    fn print_declarator_name(&mut self, declarator: &Declarator) {
        self.state.word(&declarator.name);
        for _ in 0..declarator.extra_dims {
            self.state.word("[]");
        }
    }

    fn print_method(&mut self, method: &MethodDecl) -> Result<()> {
        if method.modifiers.is_abstract && method.body.is_some() {
            bail!("abstract method {} has a body", method.name);
        }
        self.state.begin_method();
        self.print_decl_trivia(&method.trivia, &DocPolicy::Method(method))?;

        self.state.indent();
        if !method.modifiers.is_empty() {
            self.state.word(&method.modifiers.render());
            self.state.space();
        }
        if let Some(ret) = &method.return_type {
            self.state.word(&ret.render());
            self.state.space();
        }
        self.state.word(&method.name);

        self.state.begin_expression(method.params.is_empty());
        for (i, param) in method.params.iter().enumerate() {
            if i > 0 {
                self.state.word(",");
                self.state.space();
            }
            if param.is_final {
                self.state.word("final ");
            }
            self.state.word(&param.ty.render());
            self.state.space();
            self.state.word(&param.name);
        }
        self.state.end_expression(method.params.is_empty());

        if !method.throws.is_empty() {
            if self.state.config().throws_on_new_line {
                self.state.newline();
                self.state.increase_indent();
                self.state.indent();
                self.state.word("throws ");
                self.state.word(&method.throws.join(", "));
                self.state.decrease_indent();
            } else {
                self.state.word(" throws ");
                self.state.word(&method.throws.join(", "));
            }
        }

        match &method.body {
            Some(body) => self.print_block_body(body, BlockKind::Method)?,
            None => self.state.word(";"),
        }
        self.state.newline();
        self.state.end_method();
        Ok(())
    }

    fn print_initializer(&mut self, init: &InitializerBlock) -> Result<()> {
        self.state.begin_method();
        self.print_stmt_trivia(&init.trivia)?;
        self.state.indent();
        if init.is_static {
            self.state.word("static");
        }
        self.print_block_body(&init.body, BlockKind::Method)?;
        self.state.newline();
        self.state.end_method();
        Ok(())
    }

    /// Open a block, run the local-variable size lookahead, print the body,
    /// and close. The lookahead must finish before the first statement
    /// prints.
    pub(crate) fn print_block_body(&mut self, block: &Block, kind: BlockKind) -> Result<()> {
        let sizes = measure_locals(&block.statements, self.state.config());
        self.state.begin_block(kind);
        self.state.push_sizes(sizes);

        let mut result = Ok(());
        for stmt in &block.statements {
            result = self.print_stmt(stmt);
            if result.is_err() {
                break;
            }
        }
        if result.is_ok() {
            result = self.print_stmt_trivia(&block.trailing);
        }

        self.state.pop_sizes();
        self.state.end_block(kind);
        result
    }
}

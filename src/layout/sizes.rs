//! Field/variable size lookahead
//!
//! A measuring pre-pass over the sibling declarations of one class body or
//! statement block. It computes the maximum modifier/type/name/declarator
//! column widths needed for dynamic alignment, and must run to completion
//! before the first declaration in that scope is printed: printing the first
//! declaration needs to already know the width of the last.

use crate::config::{Config, FieldSpacing};
use crate::tree::{FieldDecl, LocalVarDecl, Member, Modifiers, Stmt, StmtKind, Trivia};

/// Maximum column widths for one scope's declarations.
///
/// A monotonic max-accumulator: every `update_*` call only raises the stored
/// value. Once pushed onto the print state's size stack, consumers only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSizes {
    /// Widest rendered modifier string
    pub modifier_width: usize,
    /// Widest rendered type, counting `[]` as two columns per dimension
    pub type_width: usize,
    /// Widest declared name
    pub name_width: usize,
    /// Widest natural `modifiers type name` prefix, for `=` alignment
    pub equals_width: usize,
}

impl FieldSizes {
    pub fn update_modifier(&mut self, width: usize) {
        self.modifier_width = self.modifier_width.max(width);
    }

    pub fn update_type(&mut self, width: usize) {
        self.type_width = self.type_width.max(width);
    }

    pub fn update_name(&mut self, width: usize) {
        self.name_width = self.name_width.max(width);
    }

    pub fn update_equals(&mut self, width: usize) {
        self.equals_width = self.equals_width.max(width);
    }

    /// Extra breathing space added to every dimension once lookahead completes
    pub fn apply_pad(&mut self, pad: usize) {
        self.modifier_width += pad;
        self.type_width += pad;
        self.name_width += pad;
        self.equals_width += pad;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == FieldSizes::default()
    }
}

fn has_javadoc(trivia: &[Trivia]) -> bool {
    trivia.iter().any(|t| matches!(t, Trivia::Javadoc(_)))
}

fn measure_declaration(
    sizes: &mut FieldSizes,
    modifiers: &Modifiers,
    ty_width: usize,
    name_width: usize,
) {
    let modifier_width = modifiers.width();
    sizes.update_modifier(modifier_width);
    sizes.update_type(ty_width);
    sizes.update_name(name_width);

    // Natural single-spaced prefix: "modifiers type name"
    let mut prefix = ty_width + 1 + name_width;
    if modifier_width > 0 {
        prefix += modifier_width + 1;
    }
    sizes.update_equals(prefix);
}

fn measure_field(sizes: &mut FieldSizes, field: &FieldDecl) {
    let Some(first) = field.declarators.first() else {
        return;
    };
    measure_declaration(sizes, &field.modifiers, field.ty.width(), first.width());
}

fn measure_local(sizes: &mut FieldSizes, decl: &LocalVarDecl) {
    let Some(first) = decl.declarators.first() else {
        return;
    };
    let modifiers = Modifiers {
        is_final: decl.is_final,
        ..Modifiers::default()
    };
    measure_declaration(sizes, &modifiers, decl.ty.width(), first.width());
}

/// Lookahead over one class body's field declarations
#[must_use]
pub fn measure_members(members: &[Member], config: &Config) -> FieldSizes {
    let mut sizes = FieldSizes::default();
    if config.field_spacing == FieldSpacing::Never {
        return sizes;
    }

    for member in members {
        if let Member::Field(field) = member {
            if config.field_spacing == FieldSpacing::Javadoc && has_javadoc(&field.trivia) {
                continue;
            }
            measure_field(&mut sizes, field);
        }
    }

    if !sizes.is_empty() {
        sizes.apply_pad(config.field_spacing_pad);
    }
    sizes
}

/// Lookahead over one statement block's local variable declarations
#[must_use]
pub fn measure_locals(statements: &[Stmt], config: &Config) -> FieldSizes {
    let mut sizes = FieldSizes::default();
    if config.field_spacing == FieldSpacing::Never {
        return sizes;
    }

    for stmt in statements {
        if let StmtKind::LocalVar(decl) = &stmt.kind {
            if config.field_spacing == FieldSpacing::Javadoc && has_javadoc(&stmt.trivia) {
                continue;
            }
            measure_local(&mut sizes, decl);
        }
    }

    if !sizes.is_empty() {
        sizes.apply_pad(config.field_spacing_pad);
    }
    sizes
}

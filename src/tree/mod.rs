//! Java syntax tree contract consumed by the printer.
//!
//! The printer is polymorphic over node kinds through closed enums matched
//! exhaustively, rather than open per-class dispatch. Every declaration and
//! statement carries an owned, forward-ordered trivia list — the comments and
//! line breaks physically attached before it in the source.

/// A comment or whitespace run attached to a real token.
///
/// Comment variants carry the raw source text including delimiters.
/// `Newline` is a single source line break; blank lines are runs of
/// consecutive `Newline` trivia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trivia {
    /// One source line break
    Newline,
    /// A `// ...` comment
    Line(String),
    /// A `/* ... */` comment
    Block(String),
    /// A `/** ... */` formal comment
    Javadoc(String),
}

/// Visibility modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// Declaration modifiers, rendered in canonical order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub visibility: Option<Visibility>,
    pub is_abstract: bool,
    pub is_static: bool,
    pub is_final: bool,
    pub is_synchronized: bool,
    pub is_transient: bool,
    pub is_volatile: bool,
    pub is_native: bool,
}

impl Modifiers {
    #[must_use]
    pub fn public() -> Self {
        Modifiers {
            visibility: Some(Visibility::Public),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn private() -> Self {
        Modifiers {
            visibility: Some(Visibility::Private),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn protected() -> Self {
        Modifiers {
            visibility: Some(Visibility::Protected),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn and_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub fn and_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    #[must_use]
    pub fn and_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Render in the conventional Java modifier order, no trailing space
    #[must_use]
    pub fn render(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(vis) = self.visibility {
            parts.push(vis.keyword());
        }
        if self.is_abstract {
            parts.push("abstract");
        }
        if self.is_static {
            parts.push("static");
        }
        if self.is_final {
            parts.push("final");
        }
        if self.is_synchronized {
            parts.push("synchronized");
        }
        if self.is_transient {
            parts.push("transient");
        }
        if self.is_volatile {
            parts.push("volatile");
        }
        if self.is_native {
            parts.push("native");
        }
        parts.join(" ")
    }

    /// Rendered width in columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.render().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Modifiers::default()
    }
}

/// A (possibly array) type reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub name: String,
    /// Array dimensionality; each dimension renders as `[]`
    pub dims: usize,
}

impl Type {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Type {
            name: name.to_string(),
            dims: 0,
        }
    }

    #[must_use]
    pub fn array(name: &str, dims: usize) -> Self {
        Type {
            name: name.to_string(),
            dims,
        }
    }

    #[must_use]
    pub fn void() -> Self {
        Type::new("void")
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        self.name == "void" && self.dims == 0
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.name.clone();
        for _ in 0..self.dims {
            out.push_str("[]");
        }
        out
    }

    /// Rendered width: name length plus two columns per array dimension
    #[must_use]
    pub fn width(&self) -> usize {
        self.name.len() + 2 * self.dims
    }
}

/// One parsed source file
#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    pub package: Option<PackageDecl>,
    pub imports: Vec<ImportDecl>,
    pub types: Vec<TypeDecl>,
    /// Trivia after the last type declaration
    pub trailing: Vec<Trivia>,
}

#[derive(Debug, Clone)]
pub struct PackageDecl {
    pub trivia: Vec<Trivia>,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ImportDecl {
    pub trivia: Vec<Trivia>,
    pub path: String,
    pub is_static: bool,
}

/// Class or interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub trivia: Vec<Trivia>,
    pub modifiers: Modifiers,
    pub kind: TypeKind,
    pub name: String,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub members: Vec<Member>,
    /// Trivia before the closing brace
    pub body_trailing: Vec<Trivia>,
}

impl TypeDecl {
    #[must_use]
    pub fn class(name: &str, modifiers: Modifiers) -> Self {
        TypeDecl {
            trivia: Vec::new(),
            modifiers,
            kind: TypeKind::Class,
            name: name.to_string(),
            extends: None,
            implements: Vec::new(),
            members: Vec::new(),
            body_trailing: Vec::new(),
        }
    }

    #[must_use]
    pub fn interface(name: &str, modifiers: Modifiers) -> Self {
        TypeDecl {
            kind: TypeKind::Interface,
            ..TypeDecl::class(name, modifiers)
        }
    }
}

/// One class body member, in source order
#[derive(Debug, Clone)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(MethodDecl),
    Nested(TypeDecl),
    Initializer(InitializerBlock),
}

/// A `static { ... }` or instance `{ ... }` initializer
#[derive(Debug, Clone)]
pub struct InitializerBlock {
    pub trivia: Vec<Trivia>,
    pub is_static: bool,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub trivia: Vec<Trivia>,
    pub modifiers: Modifiers,
    pub ty: Type,
    pub declarators: Vec<Declarator>,
}

/// One declared name within a field or local variable declaration
#[derive(Debug, Clone)]
pub struct Declarator {
    pub name: String,
    /// C-style array dimensions after the name (`int x[]`)
    pub extra_dims: usize,
    pub init: Option<Expr>,
}

impl Declarator {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Declarator {
            name: name.to_string(),
            extra_dims: 0,
            init: None,
        }
    }

    #[must_use]
    pub fn with_init(name: &str, init: Expr) -> Self {
        Declarator {
            name: name.to_string(),
            extra_dims: 0,
            init: Some(init),
        }
    }

    /// Rendered name width including C-style dimensions
    #[must_use]
    pub fn width(&self) -> usize {
        self.name.len() + 2 * self.extra_dims
    }
}

/// Method or constructor; `return_type` is `None` for constructors
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub trivia: Vec<Trivia>,
    pub modifiers: Modifiers,
    pub return_type: Option<Type>,
    pub name: String,
    pub params: Vec<Parameter>,
    pub throws: Vec<String>,
    /// `None` for abstract/interface methods
    pub body: Option<Block>,
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub is_final: bool,
    pub ty: Type,
    pub name: String,
}

impl Parameter {
    #[must_use]
    pub fn new(ty: Type, name: &str) -> Self {
        Parameter {
            is_final: false,
            ty,
            name: name.to_string(),
        }
    }
}

/// A `{ ... }` statement sequence
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
    /// Trivia before the closing brace
    pub trailing: Vec<Trivia>,
}

#[derive(Debug, Clone)]
pub struct Stmt {
    pub trivia: Vec<Trivia>,
    pub kind: StmtKind,
}

impl Stmt {
    #[must_use]
    pub fn bare(kind: StmtKind) -> Self {
        Stmt {
            trivia: Vec::new(),
            kind,
        }
    }
}

#[derive(Debug, Clone)]
pub enum StmtKind {
    LocalVar(LocalVarDecl),
    Expr(Expr),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    For {
        init: Option<ForInit>,
        cond: Option<Expr>,
        update: Vec<Expr>,
        body: Box<Stmt>,
    },
    Return(Option<Expr>),
    Throw(Expr),
    Try {
        body: Block,
        catches: Vec<CatchClause>,
        finally: Option<Block>,
    },
    Block(Block),
    Break(Option<String>),
    Continue(Option<String>),
    Empty,
}

#[derive(Debug, Clone)]
pub struct LocalVarDecl {
    pub is_final: bool,
    pub ty: Type,
    pub declarators: Vec<Declarator>,
}

/// The initializer slot of a `for` header: either one local declaration or
/// a comma list of expressions
#[derive(Debug, Clone)]
pub enum ForInit {
    Decl(LocalVarDecl),
    Exprs(Vec<Expr>),
}

#[derive(Debug, Clone)]
pub struct CatchClause {
    pub param: Parameter,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Ident(String),
    /// Literal text as written in source (`1`, `"abc"`, `true`, `null`)
    Literal(String),
    Field {
        target: Box<Expr>,
        name: String,
    },
    Call {
        target: Option<Box<Expr>>,
        name: String,
        args: Vec<Expr>,
    },
    Binary {
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: String,
        operand: Box<Expr>,
        postfix: bool,
    },
    Assign {
        op: String,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Cast {
        ty: Type,
        expr: Box<Expr>,
    },
    New {
        ty: Type,
        args: Vec<Expr>,
    },
    Paren(Box<Expr>),
    Ternary {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    ArrayInit(Vec<Expr>),
}

impl Expr {
    #[must_use]
    pub fn ident(name: &str) -> Self {
        Expr::Ident(name.to_string())
    }

    #[must_use]
    pub fn lit(text: &str) -> Self {
        Expr::Literal(text.to_string())
    }

    #[must_use]
    pub fn call(name: &str, args: Vec<Expr>) -> Self {
        Expr::Call {
            target: None,
            name: name.to_string(),
            args,
        }
    }

    #[must_use]
    pub fn binary(op: &str, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op: op.to_string(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[must_use]
    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assign {
            op: "=".to_string(),
            target: Box::new(target),
            value: Box::new(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_render_order() {
        let m = Modifiers::public().and_static().and_final();
        assert_eq!(m.render(), "public static final");
        assert_eq!(m.width(), 19);
    }

    #[test]
    fn test_modifiers_empty() {
        let m = Modifiers::default();
        assert!(m.is_empty());
        assert_eq!(m.render(), "");
        assert_eq!(m.width(), 0);
    }

    #[test]
    fn test_type_render() {
        assert_eq!(Type::new("int").render(), "int");
        assert_eq!(Type::array("String", 2).render(), "String[][]");
        assert_eq!(Type::array("String", 2).width(), 10);
    }

    #[test]
    fn test_type_void() {
        assert!(Type::void().is_void());
        assert!(!Type::array("void", 1).is_void());
    }

    #[test]
    fn test_declarator_width() {
        let d = Declarator {
            name: "buf".to_string(),
            extra_dims: 1,
            init: None,
        };
        assert_eq!(d.width(), 5);
    }
}

//! End-to-end printing tests over hand-built syntax trees.

use jprettier::config::BraceStyle;
use jprettier::tree::{
    Block, CompilationUnit, Declarator, Expr, FieldDecl, ImportDecl, Member, MethodDecl,
    Modifiers, PackageDecl, Parameter, Stmt, StmtKind, Trivia, Type, TypeDecl,
};
use jprettier::{Config, Printer};

fn plain_config() -> Config {
    Config {
        require_method_tags: false,
        require_class_tags: false,
        ..Config::default()
    }
}

fn format_unit(unit: &CompilationUnit, config: Config) -> String {
    Printer::new(config).unwrap().format(unit).unwrap()
}

fn field(modifiers: Modifiers, ty: Type, name: &str, init: Option<Expr>) -> Member {
    Member::Field(FieldDecl {
        trivia: Vec::new(),
        modifiers,
        ty,
        declarators: vec![Declarator {
            name: name.to_string(),
            extra_dims: 0,
            init,
        }],
    })
}

fn method(name: &str, body: Vec<Stmt>) -> MethodDecl {
    MethodDecl {
        trivia: Vec::new(),
        modifiers: Modifiers::public(),
        return_type: Some(Type::void()),
        name: name.to_string(),
        params: Vec::new(),
        throws: Vec::new(),
        body: Some(Block {
            statements: body,
            trailing: Vec::new(),
        }),
    }
}

#[test]
fn test_full_class_golden() {
    let mut decl = TypeDecl::class("Point", Modifiers::public());
    decl.members = vec![
        field(
            Modifiers::private(),
            Type::new("int"),
            "x",
            Some(Expr::lit("0")),
        ),
        field(
            Modifiers::private(),
            Type::new("int"),
            "y",
            Some(Expr::lit("0")),
        ),
        Member::Constructor(MethodDecl {
            trivia: Vec::new(),
            modifiers: Modifiers::public(),
            return_type: None,
            name: "Point".to_string(),
            params: vec![
                Parameter::new(Type::new("int"), "x"),
                Parameter::new(Type::new("int"), "y"),
            ],
            throws: Vec::new(),
            body: Some(Block {
                statements: vec![
                    Stmt::bare(StmtKind::Expr(Expr::assign(
                        Expr::Field {
                            target: Box::new(Expr::ident("this")),
                            name: "x".to_string(),
                        },
                        Expr::ident("x"),
                    ))),
                    Stmt::bare(StmtKind::Expr(Expr::assign(
                        Expr::Field {
                            target: Box::new(Expr::ident("this")),
                            name: "y".to_string(),
                        },
                        Expr::ident("y"),
                    ))),
                ],
                trailing: Vec::new(),
            }),
        }),
        Member::Method(MethodDecl {
            trivia: Vec::new(),
            modifiers: Modifiers::public(),
            return_type: Some(Type::new("int")),
            name: "getX".to_string(),
            params: Vec::new(),
            throws: Vec::new(),
            body: Some(Block {
                statements: vec![Stmt::bare(StmtKind::Return(Some(Expr::ident("x"))))],
                trailing: Vec::new(),
            }),
        }),
    ];

    let unit = CompilationUnit {
        package: Some(PackageDecl {
            trivia: Vec::new(),
            name: "com.example".to_string(),
        }),
        imports: vec![ImportDecl {
            trivia: Vec::new(),
            path: "java.util.List".to_string(),
            is_static: false,
        }],
        types: vec![decl],
        trailing: Vec::new(),
    };

    let out = format_unit(&unit, plain_config());
    let expected = "\
package com.example;

import java.util.List;

public class Point {
    private int x = 0;
    private int y = 0;

    public Point(int x, int y) {
        this.x = x;
        this.y = y;
    }

    public int getX() {
        return x;
    }
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_field_alignment_scenario() {
    let mut decl = TypeDecl::class("C", Modifiers::default());
    decl.members = vec![
        field(
            Modifiers::default(),
            Type::new("int"),
            "x",
            Some(Expr::lit("1")),
        ),
        field(
            Modifiers::default(),
            Type::new("String"),
            "longName",
            Some(Expr::lit("\"abc\"")),
        ),
    ];
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };
    let out = format_unit(&unit, plain_config());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "    int    x        = 1;");
    assert_eq!(lines[2], "    String longName = \"abc\";");
    // The two `=` signs share a column
    assert_eq!(lines[1].find('=').unwrap(), lines[2].find('=').unwrap());
}

#[test]
fn test_blank_line_run_collapses_between_members() {
    let mut decl = TypeDecl::class("C", Modifiers::default());
    let mut second = method("b", Vec::new());
    // One expected break plus three source blank lines
    second.trivia = vec![
        Trivia::Newline,
        Trivia::Newline,
        Trivia::Newline,
        Trivia::Newline,
    ];
    decl.members = vec![
        Member::Method(method("a", Vec::new())),
        Member::Method(second),
    ];
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };
    let out = format_unit(&unit, plain_config());
    assert_eq!(
        out,
        "class C {\n    public void a() {\n    }\n\n    public void b() {\n    }\n}\n"
    );
}

#[test]
fn test_formatting_is_deterministic() {
    let mut decl = TypeDecl::class("C", Modifiers::default());
    decl.members = vec![
        field(Modifiers::private(), Type::new("int"), "n", None),
        Member::Method(method(
            "go",
            vec![Stmt::bare(StmtKind::Expr(Expr::call("run", Vec::new())))],
        )),
    ];
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };
    let first = format_unit(&unit, plain_config());
    let second = format_unit(&unit, plain_config());
    assert_eq!(first, second);
}

#[test]
fn test_method_javadoc_reconstruction_golden() {
    let mut decl = TypeDecl::class("C", Modifiers::default());
    decl.members = vec![Member::Method(MethodDecl {
        trivia: vec![
            Trivia::Javadoc("/** Adds.\n * @param a left operand\n */".to_string()),
            Trivia::Newline,
        ],
        modifiers: Modifiers::public(),
        return_type: Some(Type::new("int")),
        name: "add".to_string(),
        params: vec![
            Parameter::new(Type::new("int"), "a"),
            Parameter::new(Type::new("int"), "b"),
        ],
        throws: Vec::new(),
        body: Some(Block::default()),
    })];
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };
    let config = Config {
        require_class_tags: false,
        ..Config::default()
    };
    let out = format_unit(&unit, config);
    let expected = "\
class C {
    /**
     * Adds.
     *
     * @param a left operand
     * @param b Description of the parameter
     * @return  Description of the return value
     */
    public int add(int a, int b) {
    }
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_single_line_class_javadoc_round_trip() {
    let mut decl = TypeDecl::class("Holder", Modifiers::public());
    decl.trivia = vec![
        Trivia::Javadoc("/** A tiny holder. */".to_string()),
        Trivia::Newline,
    ];
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };
    let config = Config {
        require_method_tags: false,
        ..Config::default()
    };
    let out = format_unit(&unit, config);
    assert_eq!(out, "/** A tiny holder. */\npublic class Holder {\n}\n");
}

#[test]
fn test_emacs_code_blocks() {
    let body = vec![Stmt::bare(StmtKind::If {
        cond: Expr::ident("a"),
        then_branch: Box::new(Stmt::bare(StmtKind::Block(Block {
            statements: vec![Stmt::bare(StmtKind::Expr(Expr::call("go", Vec::new())))],
            trailing: Vec::new(),
        }))),
        else_branch: None,
    })];
    let mut decl = TypeDecl::class("C", Modifiers::default());
    decl.members = vec![Member::Method(method("run", body))];
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };
    let config = Config {
        block_brace: BraceStyle::Emacs,
        ..plain_config()
    };
    let out = format_unit(&unit, config);
    let expected = "\
class C {
    public void run() {
        if (a)
            {
            go();
            }
    }
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_block_comment_reflow_inside_method() {
    let mut stmt = Stmt::bare(StmtKind::Expr(Expr::call("init", Vec::new())));
    stmt.trivia = vec![
        Trivia::Block("/* setup phase */".to_string()),
        Trivia::Newline,
    ];
    let mut decl = TypeDecl::class("C", Modifiers::default());
    decl.members = vec![Member::Method(method("go", vec![stmt]))];
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };
    let out = format_unit(&unit, plain_config());
    let expected = "\
class C {
    public void go() {
        /*
         *  setup phase
         */
        init();
    }
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_crlf_output() {
    let decl = TypeDecl::class("C", Modifiers::default());
    let unit = CompilationUnit {
        types: vec![decl],
        ..CompilationUnit::default()
    };
    let config = Config {
        line_ending: jprettier::LineEnding::CrLf,
        ..plain_config()
    };
    let out = format_unit(&unit, config);
    assert_eq!(out, "class C {\r\n}\r\n");
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config {
        javadoc_min_column: 100,
        javadoc_max_column: 80,
        ..Config::default()
    };
    assert!(Printer::new(config).is_err());
}

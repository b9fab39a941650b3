#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Tests use unwrap for brevity"
)]

use super::*;
use ku_diagnostic::ErrorCode;
use ku_ir::{
    Expression, FunctionResult, Identifier, Position, Statement, TypeSpecifier,
};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Result<SourceTree<'_>, ParseError> {
    let table = TokenTable::new();
    parse_standalone(source.as_bytes(), &table)
}

fn parse_ok(source: &str) -> SourceTree<'_> {
    match parse(source) {
        Ok(tree) => tree,
        Err(err) => panic!("{source:?} failed to parse: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(tree) => panic!("{source:?} parsed unexpectedly:\n{tree}"),
        Err(err) => err,
    }
}

fn result_of(source: &str) -> FunctionResult<'_> {
    let tree = parse_ok(source);
    assert_eq!(tree.functions.len(), 1, "{source:?}");
    tree.functions.into_vec().remove(0).declaration.result
}

fn type_name(name: &'static str, line: u32, column: u32) -> TypeSpecifier<'static> {
    TypeSpecifier::name(Identifier::new(name.as_bytes(), Position::new(line, column)))
}

// ─── Function results ──────────────────────────────────────────

#[test]
fn void_result() {
    assert_eq!(result_of("fn f() {}"), FunctionResult::Void);
}

#[test]
fn simple_result() {
    assert_eq!(
        result_of("fn f() => int {}"),
        FunctionResult::Simple(type_name("int", 1, 11))
    );
}

#[test]
fn tuple_signature_of_names() {
    let FunctionResult::TupleSignature(types) = result_of("fn f() => (int, string) {}") else {
        panic!("expected tuple signature");
    };
    assert_eq!(
        types.into_vec(),
        vec![type_name("int", 1, 12), type_name("string", 1, 17)]
    );
}

#[test]
fn typed_tuple_shares_type() {
    let FunctionResult::TypedTuple(decls) = result_of("fn f() => (a, b: int) {}") else {
        panic!("expected typed tuple");
    };
    assert_eq!(decls.len(), 1);
    let names: Vec<_> = decls[0].names.iter().map(|n| n.as_str().into_owned()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(decls[0].type_specifier, type_name("int", 1, 18));
}

#[test]
fn result_shapes_render() {
    let cases = [
        ("fn f() {}", "fn f()"),
        ("fn f() => []int {}", "fn f() => []int"),
        ("fn f() => (int, string, bool) {}", "fn f() => (int, string, bool)"),
        ("fn f() => (int, []string) {}", "fn f() => (int, []string)"),
        ("fn f() => ([]int, string) {}", "fn f() => ([]int, string)"),
        ("fn f() => (a, b: int, c: string) {}", "fn f() => (a, b: int, c: string)"),
        ("fn f() => (a: int, b: []int,) {}", "fn f() => (a: int, b: []int)"),
        ("fn f() => (q) {}", "fn f() => (q)"),
    ];
    for (source, header) in cases {
        let tree = parse_ok(source);
        assert_eq!(tree.functions[0].declaration.to_string(), header, "{source:?}");
    }
}

#[test]
fn mixed_tuple_needs_commas() {
    let err = parse_err("fn f() => (int string) {}");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Comma
        }
    );
    assert_eq!(err.context, Some(ErrorContext::FunctionResult));
}

// ─── Function declarations ─────────────────────────────────────

#[test]
fn parameters_share_types() {
    let tree = parse_ok("fn split(a, b: int, s: []string,) => (q, r: int) {\n}\n");
    assert_eq!(
        tree.functions[0].declaration.to_string(),
        "fn split(a, b: int, s: []string) => (q, r: int)"
    );
    assert_eq!(tree.functions[0].declaration.parameters.len(), 2);
}

#[test]
fn missing_close_paren_names_current_token() {
    let err = parse_err("fn f(");
    assert_eq!(err.kind, ParseErrorKind::ExpectedIdentifier);
    assert_eq!(err.found, TokenKind::Eof);
    assert_eq!(err.position, Position::new(1, 6));
    assert_eq!(err.message, "expected identifier, found end of file");
    assert_eq!(err.context, Some(ErrorContext::FunctionParameters));
}

#[test]
fn missing_close_paren_after_parameter() {
    let err = parse_err("fn f(a: int {}");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::RightRoundBracket
        }
    );
    assert_eq!(err.found, TokenKind::LeftCurlyBracket);
    assert_eq!(err.code, ErrorCode::E1001);
}

#[test]
fn function_name_required() {
    let err = parse_err("fn (a: int) {}");
    assert_eq!(err.kind, ParseErrorKind::ExpectedIdentifier);
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.context, Some(ErrorContext::FunctionDeclaration));
}

#[test]
fn bare_declarations_give_each_result_shape() {
    assert_eq!(result_of("fn f()"), FunctionResult::Void);
    assert_eq!(
        result_of("fn f() => int"),
        FunctionResult::Simple(type_name("int", 1, 11))
    );
    assert_eq!(
        result_of("fn f() => (int, string)"),
        FunctionResult::TupleSignature(
            vec![type_name("int", 1, 12), type_name("string", 1, 17)].into()
        )
    );
    let FunctionResult::TypedTuple(decls) = result_of("fn f() => (a, b: int)") else {
        panic!("expected typed tuple");
    };
    let names: Vec<_> = decls[0].names.iter().map(|n| n.as_str().into_owned()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(decls[0].type_specifier, type_name("int", 1, 18));
}

#[test]
fn bare_declarations_have_no_body() {
    let tree = parse_ok("fn f() => int;\nfn g(a: int)\nfn h() {\n}\n");
    assert_eq!(tree.functions.len(), 3);
    assert!(tree.functions[0].body.is_none());
    assert!(tree.functions[1].body.is_none());
    assert!(tree.functions[2].body.is_some());
    assert_eq!(
        tree.to_string(),
        "fn f() => int\nfn g(a: int)\nfn h() {\n}\n"
    );
}

#[test]
fn declaration_followed_by_other_tokens_needs_a_body() {
    let err = parse_err("fn f() => int x");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::LeftCurlyBracket
        }
    );
    assert_eq!(err.context, Some(ErrorContext::Block));
}

#[test]
fn missing_parameter_type() {
    let err = parse_err("fn f(a: ) {}");
    assert_eq!(err.kind, ParseErrorKind::ExpectedType);
    assert_eq!(err.code, ErrorCode::E1005);
    assert_eq!(err.context, Some(ErrorContext::TypeSpecifier));
}

#[test]
fn reserved_type_forms_are_not_implemented() {
    let cases = [
        ("fn f(a: [4]int) {}", "array"),
        ("fn f(a: *int) {}", "pointer"),
        ("fn f(a: map) {}", "map"),
        ("fn f() => struct {}", "struct"),
        ("fn f() => chan {}", "channel"),
        ("fn f(a: interface) {}", "interface"),
    ];
    for (source, construct) in cases {
        let err = parse_err(source);
        assert_eq!(err.kind, ParseErrorKind::NotImplemented { construct }, "{source:?}");
        assert_eq!(err.code, ErrorCode::E1006);
    }
}

// ─── Statements ────────────────────────────────────────────────

#[test]
fn underscore_is_an_ordinary_name() {
    let tree = parse_ok("fn f(_: int, x: int) {\n    _ := x\n}\n");
    assert_eq!(
        tree.to_string(),
        "fn f(_: int, x: int) {\n    _ := x\n}\n"
    );
}

#[test]
fn standalone_statements() {
    let tree = parse_ok("x := 325290\nprint(x)\nname := \"ku\";\n");
    assert!(tree.functions.is_empty());
    assert_eq!(tree.to_string(), "x := 325290\nprint(x)\nname := \"ku\"\n");

    let Statement::Define(define) = &tree.statements[0] else {
        panic!("expected define");
    };
    assert_eq!(define.left[0].name, b"x");
    assert_eq!(
        define.right[0],
        Expression::IntegerLiteral(ku_ir::Literal {
            raw: b"325290",
            pos: Position::new(1, 6),
        })
    );
}

#[test]
fn unknown_statements_are_skipped() {
    // `if` and its condition are dropped; the body still parses as a block.
    let tree = parse_ok("if x {\n}\nreturn\ny := z\n");
    assert_eq!(tree.to_string(), "{\n}\ny := z\n");
}

#[test]
fn function_bodies_and_nested_blocks() {
    let source = "\
// entry point
fn main() {
    x := 1 // one
    {
        print(x)
    }
    print(f(\"hi\"))
}
done()
";
    let tree = parse_ok(source);
    assert_eq!(
        tree.to_string(),
        "fn main() {\n    x := 1\n    {\n        print(x)\n    }\n    print(f(\"hi\"))\n}\ndone()\n"
    );
    assert_eq!(tree.functions[0].body.as_ref().unwrap().pos, Position::new(2, 11));
}

#[test]
fn expression_required_after_define() {
    let err = parse_err("x := ;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.found, TokenKind::Semicolon);
    assert_eq!(err.context, Some(ErrorContext::Expression));
}

#[test]
fn call_argument_must_close() {
    let err = parse_err("print(x y)");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::RightRoundBracket
        }
    );
    assert_eq!(err.context, Some(ErrorContext::CallExpression));
}

#[test]
fn unclosed_block_reports_opener() {
    let err = parse_err("fn main() {\n    x := 1\n");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnclosedDelimiter {
            open: TokenKind::LeftCurlyBracket,
            open_position: Position::new(1, 11),
        }
    );
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.found, TokenKind::Eof);
}

#[test]
fn illegal_token_is_fatal() {
    let err = parse_err("x := 1\n0b\n");
    assert_eq!(err.kind, ParseErrorKind::IllegalToken);
    assert_eq!(err.code, ErrorCode::E0001);
    assert_eq!(err.lexeme, "0b");
    assert_eq!(err.position, Position::new(2, 1));

    let err = parse_err("fn f() { 123abc }");
    assert_eq!(err.kind, ParseErrorKind::IllegalToken);
}

#[test]
fn empty_and_comment_only_sources() {
    assert_eq!(parse_ok(""), SourceTree::default());
    assert_eq!(parse_ok("// nothing here\n// at all"), SourceTree::default());
}

#[test]
fn diagnostic_for_missing_paren() {
    let diag = parse_err("fn f(").to_diagnostic();
    assert_eq!(
        diag.to_string(),
        "error[E1004]: expected identifier, found end of file\n  \
         --> 1:6: found end of file\n  \
         = note: while parsing function parameters"
    );
}

// ─── Deep nesting ──────────────────────────────────────────────

#[test]
fn deeply_nested_slices() {
    let depth = 5_000;
    let source = format!("fn f(a: {}int) {{}}", "[]".repeat(depth));
    let tree = parse_ok(&source);

    let mut ty = &tree.functions[0].declaration.parameters[0].type_specifier;
    let mut seen = 0;
    while let TypeSpecifier::Literal(literal) = ty {
        let ku_ir::TypeLiteral::Slice { elem } = literal.as_ref() else {
            panic!("expected slice");
        };
        ty = elem;
        seen += 1;
    }
    assert_eq!(seen, depth);
}

#[test]
fn deeply_nested_blocks() {
    let depth = 2_000;
    let source = format!("fn f() {}{}", "{".repeat(depth + 1), "}".repeat(depth + 1));
    let tree = parse_ok(&source);
    assert_eq!(tree.functions[0].body.as_ref().unwrap().statements.len(), 1);
}

#[test]
fn deeply_nested_calls() {
    let depth = 1_000;
    let source = format!("{}x{}", "f(".repeat(depth), ")".repeat(depth));
    let tree = parse_ok(&source);
    assert_eq!(tree.statements.len(), 1);
}

// ─── Properties ────────────────────────────────────────────────

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn fragment() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "fn", "f", "x", "(", ")", "{", "}", "[", "]", ":", ":=", ",", "=>", ";", "\n", " ",
            "1", "\"s\"", "int", "// c\n", "map", "*", "if", "0b",
        ])
    }

    proptest! {
        #[test]
        fn parser_always_terminates(parts in prop::collection::vec(fragment(), 0..64)) {
            let source = parts.concat();
            let table = TokenTable::new();
            match parse_standalone(source.as_bytes(), &table) {
                Ok(tree) => {
                    prop_assert!(tree.statements.iter().all(|s| !s.is_empty()));
                }
                Err(err) => {
                    prop_assert!(!err.message.is_empty());
                }
            }
        }

        #[test]
        fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let table = TokenTable::new();
            let _ = parse_standalone(&bytes, &table);
        }
    }
}

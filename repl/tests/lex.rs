// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use monkey::{LexerError, LexerErrorKind};
use monkey_repl::{lex_source, read_source, ReplError};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(
    "let five = 5;\n",
    &[
        "{Type:LET Literal:let}",
        "{Type:IDENT Literal:five}",
        "{Type:ASSIGN Literal:=}",
        "{Type:INT Literal:5}",
        "{Type:SEMICOLON Literal:;}",
    ],
    0,
)]
#[case(
    "if (a != b) {\n    return true;\n}\n",
    &[
        "{Type:IF Literal:if}",
        "{Type:LPAREN Literal:(}",
        "{Type:IDENT Literal:a}",
        "{Type:NOT_EQ Literal:!=}",
        "{Type:IDENT Literal:b}",
        "{Type:RPAREN Literal:)}",
        "{Type:LBRACE Literal:{}",
        "{Type:RETURN Literal:return}",
        "{Type:TRUE Literal:true}",
        "{Type:SEMICOLON Literal:;}",
        "{Type:RBRACE Literal:}}",
    ],
    0,
)]
#[case(
    "let a = @;",
    &[
        "{Type:LET Literal:let}",
        "{Type:IDENT Literal:a}",
        "{Type:ASSIGN Literal:=}",
        "{Type:ILLEGAL Literal:@}",
        "{Type:SEMICOLON Literal:;}",
    ],
    1,
)]
#[case("", &[], 0)]
#[case("$ ?", &["{Type:ILLEGAL Literal:$}", "{Type:ILLEGAL Literal:?}"], 2)]
fn lex(#[case] input: &str, #[case] expected: &[&str], #[case] illegal: usize) {
    let mut output = Vec::new();
    let errors = lex_source(input.as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
    assert_eq!(errors.len(), illegal);
}

#[test]
fn illegal_byte_is_located() {
    let errors = lex_source(b"let a = @;", Vec::new()).unwrap();

    assert_eq!(errors, vec![
        LexerError {
            offset: 8,
            kind: LexerErrorKind::IllegalByte { byte: b'@' },
        },
    ]);
}

#[test]
fn missing_file_is_named_in_the_error() {
    let path = Path::new("/nonexistent/program.monkey");
    let error = read_source(path).unwrap_err();

    assert!(matches!(error, ReplError::SourceRead { .. }), "{error:?}");
    assert!(error.to_string().contains("/nonexistent/program.monkey"), "{error}");
}

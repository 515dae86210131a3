// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use monkey_repl::{ConfigRoot, ConfigSectionRepl, Repl};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn run(config: ConfigSectionRepl, input: &str) -> String {
    let _ = env_logger::builder().is_test(true).filter(None, log::LevelFilter::max()).try_init();

    let mut output = Vec::new();
    Repl::new(config).start(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn plain() -> ConfigSectionRepl {
    ConfigSectionRepl {
        color: false,
        diagnostics: false,
        ..Default::default()
    }
}

#[rstest]
#[case("", ">> ")]
#[case("\n", ">> >> ")]
#[case(
    "let five = 5;\n",
    concat!(
        ">> {Type:LET Literal:let}\n",
        "{Type:IDENT Literal:five}\n",
        "{Type:ASSIGN Literal:=}\n",
        "{Type:INT Literal:5}\n",
        "{Type:SEMICOLON Literal:;}\n",
        ">> ",
    ),
)]
#[case(
    "a == b\n!c\n",
    concat!(
        ">> {Type:IDENT Literal:a}\n",
        "{Type:EQ Literal:==}\n",
        "{Type:IDENT Literal:b}\n",
        ">> {Type:BANG Literal:!}\n",
        "{Type:IDENT Literal:c}\n",
        ">> ",
    ),
)]
#[case(
    "fn(x) { return x; }",
    concat!(
        ">> {Type:FUNCTION Literal:fn}\n",
        "{Type:LPAREN Literal:(}\n",
        "{Type:IDENT Literal:x}\n",
        "{Type:RPAREN Literal:)}\n",
        "{Type:LBRACE Literal:{}\n",
        "{Type:RETURN Literal:return}\n",
        "{Type:IDENT Literal:x}\n",
        "{Type:SEMICOLON Literal:;}\n",
        "{Type:RBRACE Literal:}}\n",
        ">> ",
    ),
)]
fn session(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(plain(), input), expected);
}

#[test]
fn illegal_bytes_are_printed_and_scanning_continues() {
    let output = run(plain(), "1 @ 2\n");

    assert_eq!(output, concat!(
        ">> {Type:INT Literal:1}\n",
        "{Type:ILLEGAL Literal:@}\n",
        "{Type:INT Literal:2}\n",
        ">> ",
    ));
}

#[test]
fn each_line_gets_its_own_lexer() {
    // A `=` at the end of one line never combines with a `=` starting the next.
    let output = run(plain(), "x =\n= y\n");

    assert_eq!(output, concat!(
        ">> {Type:IDENT Literal:x}\n",
        "{Type:ASSIGN Literal:=}\n",
        ">> {Type:ASSIGN Literal:=}\n",
        "{Type:IDENT Literal:y}\n",
        ">> ",
    ));
}

#[test]
fn prompt_from_config() {
    let config = ConfigRoot::parse("[repl]\nprompt = \"monkey> \"\ncolor = false\ndiagnostics = false\n").unwrap();
    let output = run(config.repl, "let\n");

    assert_eq!(output, "monkey> {Type:LET Literal:let}\nmonkey> ");
}

#[test]
fn diagnostics_do_not_touch_stdout() {
    let config = ConfigSectionRepl {
        color: false,
        diagnostics: true,
        ..Default::default()
    };

    assert_eq!(run(config, "#\n"), ">> {Type:ILLEGAL Literal:#}\n>> ");
}

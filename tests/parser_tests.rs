// Integration tests for the statement parser

use monkey_front::parser::ast::{Node, Statement};
use monkey_front::parser::parse::{ParseError, Parser};
use monkey_front::parser::token::{SourceLocation, TokenKind};

#[test]
fn test_let_and_return_program() {
    let (program, errors) = monkey_front::parse("let x = 5;\nreturn x;");

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(program.len(), 2);
    assert_eq!(program.token_literal(), "let");

    match &program.statements[0] {
        Statement::Let(stmt) => {
            assert_eq!(stmt.name.name, "x");
            assert_eq!(stmt.name.token_literal(), "x");
        }
        other => panic!("Expected let statement, got {:?}", other),
    }
    match &program.statements[1] {
        Statement::Return(stmt) => assert_eq!(stmt.token_literal(), "return"),
        other => panic!("Expected return statement, got {:?}", other),
    }
}

#[test]
fn test_missing_identifier_reports_once() {
    let (program, errors) = monkey_front::parse("let = 5;");

    assert!(program.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .to_string()
        .contains("expected next token to be Identifier"));
}

#[test]
fn test_error_details() {
    let mut parser = Parser::new("let x = 1;\nlet 7 = 2;");
    let program = parser.parse_program();

    assert_eq!(program.len(), 1);
    assert_eq!(
        parser.errors(),
        &[ParseError::UnexpectedToken {
            expected: TokenKind::Identifier,
            actual: TokenKind::Integer,
            location: SourceLocation::new(2, 5),
        }]
    );
    assert_eq!(
        parser.diagnostics(),
        vec!["expected next token to be Identifier, got Integer instead"]
    );
}

#[test]
fn test_multiple_errors_accumulate_in_order() {
    let source = "let x 5;\nlet = 10;\nlet 838383;";
    let (program, errors) = monkey_front::parse(source);

    assert!(program.is_empty());
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "expected next token to be Assign, got Integer instead",
            "expected next token to be Identifier, got Assign instead",
            "expected next token to be Identifier, got Integer instead",
        ]
    );
}

#[test]
fn test_unterminated_statements_stop_at_end_of_input() {
    let (program, errors) = monkey_front::parse("let a = 1 + 2\nreturn a");

    // the first statement swallows everything up to end of input
    assert!(errors.is_empty());
    assert_eq!(program.len(), 1);
}

#[test]
fn test_illegal_tokens_inside_values_are_skipped() {
    let (program, errors) = monkey_front::parse("let a = @#$;\nreturn ~;");

    assert!(errors.is_empty());
    assert_eq!(program.len(), 2);
}

#[test]
fn test_statement_locations() {
    let (program, _) = monkey_front::parse("  let a = 1;\n\nreturn a;");

    assert_eq!(program.statements[0].location(), SourceLocation::new(1, 3));
    assert_eq!(program.statements[1].location(), SourceLocation::new(3, 1));
}

#[test]
fn test_parser_from_existing_lexer() {
    use monkey_front::parser::lexer::Lexer;

    let mut parser = Parser::from_lexer(Lexer::new("return 1;"));
    let program = parser.parse_program();

    assert_eq!(program.len(), 1);
    assert!(parser.into_errors().is_empty());
}

use polish_notation::{
    convert_to_postfix, convert_to_prefix,
    error::{ConversionError, Error, ErrorKind, ErrorReport, LexError, ParseError},
    notation::{
        converter::postfix::to_postfix,
        lexer::tokenize,
        parser::core::{MAX_NESTING_DEPTH, parse},
    },
    util::render::space_separated,
};
use pretty_assertions::assert_eq;

fn parse_error(src: &str) -> ParseError {
    match convert_to_postfix(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error for {src:?}, got {other:?}"),
    }
}

fn malformed_at(token: &str, position: usize) -> ParseError {
    ParseError::MalformedExpression { token:    format!("token '{token}'"),
                                      position: Some(position), }
}

#[test]
fn unexpected_character_reports_character_and_position() {
    assert_eq!(tokenize("A + B @"),
               Err(LexError::UnexpectedCharacter { character: '@',
                                                   position:  6, }));
    assert_eq!(tokenize("@A + B"),
               Err(LexError::UnexpectedCharacter { character: '@',
                                                   position:  0, }));
    assert_eq!(tokenize("A + B & C"),
               Err(LexError::UnexpectedCharacter { character: '&',
                                                   position:  6, }));
}

#[test]
fn multi_letter_identifiers_are_rejected() {
    assert_eq!(tokenize("AB + C"),
               Err(LexError::InvalidIdentifier { name:     "AB".to_string(),
                                                 position: 0, }));
    assert_eq!(tokenize("x * sin"),
               Err(LexError::InvalidIdentifier { name:     "sin".to_string(),
                                                 position: 4, }));
}

#[test]
fn dangling_decimal_point_is_rejected() {
    assert!(tokenize("3. + 1").is_err());
    assert!(tokenize(".5").is_err());
}

#[test]
fn empty_input_tokenizes_but_does_not_parse() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   ").unwrap().is_empty());
    assert_eq!(parse(&[]), Err(ParseError::EmptyExpression));
    assert_eq!(parse_error(""), ParseError::EmptyExpression);
    assert_eq!(parse_error(" \t "), ParseError::EmptyExpression);
}

#[test]
fn unclosed_parenthesis_points_at_the_open_paren() {
    assert_eq!(parse_error("(A + B"),
               ParseError::UnbalancedParentheses { position: 0 });
    assert_eq!(parse_error("((A + B) * C"),
               ParseError::UnbalancedParentheses { position: 0 });
    assert_eq!(parse_error("A * (B + (C"),
               ParseError::UnbalancedParentheses { position: 9 });
}

#[test]
fn stray_closing_parenthesis_is_unbalanced() {
    assert_eq!(parse_error("A + B)"),
               ParseError::UnbalancedParentheses { position: 5 });
    assert_eq!(parse_error("(A))"),
               ParseError::UnbalancedParentheses { position: 3 });
}

#[test]
fn adjacent_operands_are_malformed() {
    assert_eq!(parse_error("A B"), malformed_at("B", 2));
    assert_eq!(parse_error("2A"), malformed_at("A", 1));
    assert_eq!(parse_error("(A B)"), malformed_at("B", 3));
    assert_eq!(parse_error("(A + B)(C)"), malformed_at("(", 7));
}

#[test]
fn missing_operands_are_malformed() {
    assert_eq!(parse_error("A +"),
               ParseError::MalformedExpression { token:    "end of input".to_string(),
                                                 position: None, });
    assert_eq!(parse_error("* A"), malformed_at("*", 0));
    assert_eq!(parse_error("A + * B"), malformed_at("*", 4));
    assert_eq!(parse_error("()"), malformed_at(")", 1));
}

#[test]
fn unary_minus_is_not_supported() {
    assert_eq!(parse_error("-A"), malformed_at("-", 0));
    assert_eq!(parse_error("A * -B"), malformed_at("-", 4));
}

#[test]
fn prefix_conversion_reports_the_same_errors() {
    assert_eq!(convert_to_prefix("(A + B"),
               Err(Error::Parse(ParseError::UnbalancedParentheses { position: 0 })));
    assert!(matches!(convert_to_prefix("A $ B"), Err(Error::Lex(_))));
}

#[test]
fn shunting_yard_detects_unbalanced_parentheses_on_its_own() {
    let unclosed = tokenize("(A + B").unwrap();
    assert_eq!(to_postfix(&unclosed),
               Err(ConversionError::UnbalancedParentheses { position: 0 }));

    let unopened = tokenize("A + B) * C").unwrap();
    assert_eq!(to_postfix(&unopened),
               Err(ConversionError::UnbalancedParentheses { position: 5 }));

    let reversed = tokenize(")(").unwrap();
    assert_eq!(to_postfix(&reversed),
               Err(ConversionError::UnbalancedParentheses { position: 0 }));
}

#[test]
fn shunting_yard_alone_does_not_validate_operand_order() {
    let tokens = tokenize("A B").unwrap();
    assert_eq!(space_separated(&to_postfix(&tokens).unwrap()), "A B");
    assert!(convert_to_postfix("A B").is_err());
}

#[test]
fn public_errors_expose_kind_message_and_position() {
    let error = convert_to_postfix("(A + B").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ParseError);
    assert_eq!(error.position(), Some(0));
    assert_eq!(error.message(), "Error at position 0: Unbalanced parentheses.");

    let error = convert_to_postfix("A ? B").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LexError);
    assert_eq!(error.position(), Some(2));
    assert_eq!(error.message(), "Error at position 2: Unexpected character '?'.");
}

#[test]
fn error_report_serializes_without_missing_position() {
    let error = convert_to_postfix("").unwrap_err();
    let report = serde_json::to_value(ErrorReport::from(&error)).unwrap();
    assert_eq!(report,
               serde_json::json!({ "kind": "ParseError", "message": "Error: Empty expression." }));

    let error = convert_to_postfix("A B").unwrap_err();
    let report = serde_json::to_value(ErrorReport::from(&error)).unwrap();
    assert_eq!(report["position"], 2);
}

#[test]
fn numbers_beyond_f64_are_rejected() {
    let literal = "9".repeat(400);
    assert_eq!(tokenize(&literal),
               Err(LexError::NumberOutOfRange { literal:  literal.clone(),
                                                position: 0, }));

    let error = convert_to_postfix(&format!("A + {literal}")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LexError);
    assert_eq!(error.position(), Some(4));
}

#[test]
fn large_finite_numbers_are_kept() {
    let literal = "9".repeat(300);
    assert!(convert_to_postfix(&literal).is_ok());
}

#[test]
fn nesting_past_the_limit_is_a_parse_error() {
    let depth = MAX_NESTING_DEPTH + 44;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_error(&source),
               ParseError::NestingTooDeep { position: MAX_NESTING_DEPTH });

    let deeper = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(convert_to_prefix(&deeper).unwrap_err().position(),
               Some(MAX_NESTING_DEPTH));
}

#[test]
fn nesting_at_the_limit_still_converts() {
    let source = format!("{}A{}",
                         "(".repeat(MAX_NESTING_DEPTH),
                         ")".repeat(MAX_NESTING_DEPTH));
    assert_eq!(convert_to_postfix(&source).unwrap(), "A");
    assert_eq!(convert_to_prefix(&source).unwrap(), "A");
}

//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Punctuation, strings and constants of both grammars
//! - Numeric literals (integers, fractions, exponents, signs)
//! - Keyword reclassification
//! - Comments, whitespace and line tracking
//! - Error cases

use super::{
    grammars::{GrammarBuilder, RuleAction, JSON_GRAMMAR, SEXPR_GRAMMAR},
    lexer::{tokenize, tokenize_with, LexerOptions},
    tokens::{TokenKind, TokenValue},
};
use crate::{errors::errors::ErrorImpl, Position};

fn kinds(source: &str, grammar: &super::grammars::Grammar) -> Vec<TokenKind> {
    tokenize(source, grammar)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_json_punctuation() {
    let tokens = kinds("{ } [ ] : ,", &JSON_GRAMMAR);

    assert_eq!(
        tokens,
        vec![
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBrack,
            TokenKind::RBrack,
            TokenKind::Colon,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn test_tokenize_json_strings_keep_quotes() {
    let tokens = tokenize(r#""nome" "Compiladores 1" """#, &JSON_GRAMMAR).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, TokenValue::from("\"nome\""));
    assert_eq!(tokens[1].value, TokenValue::from("\"Compiladores 1\""));
    assert_eq!(tokens[2].value, TokenValue::from("\"\""));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_tokenize_json_numbers() {
    let tokens = tokenize("1 2.0 3e4 5.0e-6 7. 8E+2", &JSON_GRAMMAR).unwrap();
    let values: Vec<f64> = tokens.iter().map(|token| token.number().unwrap()).collect();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Number));
    assert_eq!(values, vec![1.0, 2.0, 30000.0, 0.000005, 7.0, 800.0]);
}

#[test]
fn test_tokenize_json_constants() {
    let tokens = tokenize("true false null", &JSON_GRAMMAR).unwrap();

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Constant));
    assert_eq!(tokens[2].text(), Some("null"));
}

#[test]
fn test_json_has_no_signed_numbers() {
    let error = tokenize("[-1]", &JSON_GRAMMAR).unwrap_err();

    assert_eq!(error.character(), Some('-'));
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_json_rejects_punctuation_inside_strings() {
    // The opening quote cannot start a STRING, so it is the offending character.
    let error = tokenize(r#"["a-b"]"#, &JSON_GRAMMAR).unwrap_err();

    assert_eq!(error.character(), Some('"'));
}

#[test]
fn test_json_keywords_are_never_reclassified() {
    assert_eq!(JSON_GRAMMAR.keyword("IF"), Some(TokenKind::If));

    let error = tokenize("IF", &JSON_GRAMMAR).unwrap_err();
    assert_eq!(error.character(), Some('I'));
}

#[test]
fn test_tokenize_sexpr_simple_call() {
    let tokens = tokenize("(+ 1 2)", &SEXPR_GRAMMAR).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LPar);
    assert_eq!(tokens[1].kind, TokenKind::Name);
    assert_eq!(tokens[1].text(), Some("+"));
    assert_eq!(tokens[2].number(), Some(1.0));
    assert_eq!(tokens[3].number(), Some(2.0));
    assert_eq!(tokens[4].kind, TokenKind::RPar);
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_sexpr_sign_binds_to_digits() {
    let tokens = tokenize("-2 - +3.5e1 +", &SEXPR_GRAMMAR).unwrap();

    assert_eq!(tokens[0].number(), Some(-2.0));
    assert_eq!(tokens[1].kind, TokenKind::Name);
    assert_eq!(tokens[1].text(), Some("-"));
    assert_eq!(tokens[2].number(), Some(35.0));
    assert_eq!(tokens[3].kind, TokenKind::Name);
}

#[test]
fn test_sexpr_number_then_name() {
    let tokens = tokenize("1+", &SEXPR_GRAMMAR).unwrap();

    assert_eq!(tokens[0].number(), Some(1.0));
    assert_eq!(tokens[1].kind, TokenKind::Name);
    assert_eq!(tokens[1].text(), Some("+"));
}

#[test]
fn test_sexpr_names() {
    let tokens = tokenize("define set! list->vector <= a.b", &SEXPR_GRAMMAR).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Name));
    assert_eq!(tokens[2].text(), Some("list->vector"));
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_sexpr_keywords() {
    let tokens = tokenize("(IF x THEN y ENDIF) (FOR i NEXT) GOSUB RETURN if", &SEXPR_GRAMMAR).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::LPar,
            TokenKind::If,
            TokenKind::Name,
            TokenKind::Then,
            TokenKind::Name,
            TokenKind::EndIf,
            TokenKind::RPar,
            TokenKind::LPar,
            TokenKind::For,
            TokenKind::Name,
            TokenKind::Next,
            TokenKind::RPar,
            TokenKind::Gosub,
            TokenKind::Return,
            TokenKind::Name,
        ]
    );
    assert_eq!(tokens[1].text(), Some("IF"));
    assert!(tokens[1].kind.is_keyword());
    assert!(!tokens[2].kind.is_keyword());
}

#[test]
fn test_sexpr_chars_and_bools() {
    let tokens = tokenize(r"#\a #\space #t #f #true", &SEXPR_GRAMMAR).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].text(), Some(r"#\a"));
    assert_eq!(tokens[1].text(), Some(r"#\space"));
    assert_eq!(tokens[2].kind, TokenKind::Bool);
    assert_eq!(tokens[3].kind, TokenKind::Bool);
    assert_eq!(tokens[4].text(), Some("#true"));
}

#[test]
fn test_sexpr_char_stops_at_paren() {
    let tokens = tokenize(r"(f #\a) #\(", &SEXPR_GRAMMAR).unwrap();

    assert_eq!(tokens[2].text(), Some(r"#\a"));
    assert_eq!(tokens[3].kind, TokenKind::RPar);
    assert_eq!(tokens[4].text(), Some(r"#\("));
}

#[test]
fn test_sexpr_strings_with_escapes() {
    let tokens = tokenize(r#""hello" "say \"hi\"" "back\\""#, &SEXPR_GRAMMAR).unwrap();

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::String));
    assert_eq!(tokens[1].text(), Some(r#""say \"hi\"""#));
    assert_eq!(tokens[2].text(), Some(r#""back\\""#));
}

#[test]
fn test_sexpr_comments_are_skipped() {
    let tokens = tokenize("; leading\n(f) ; trailing\n; comment", &SEXPR_GRAMMAR).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].text(), Some("f"));
    assert_eq!(tokens[1].span.start.line, 2);
}

#[test]
fn test_empty_and_blank_input() {
    assert!(tokenize("", &JSON_GRAMMAR).unwrap().is_empty());
    assert!(tokenize(" \t\n\n  ", &JSON_GRAMMAR).unwrap().is_empty());
    assert!(tokenize("", &SEXPR_GRAMMAR).unwrap().is_empty());
    assert!(tokenize("  ; only a comment\n\r\n;another", &SEXPR_GRAMMAR).unwrap().is_empty());
}

#[test]
fn test_line_and_column_tracking() {
    let tokens = tokenize("[1,\n  2,\n\n 3]", &JSON_GRAMMAR).unwrap();

    let two = &tokens[3];
    assert_eq!(two.number(), Some(2.0));
    assert_eq!(two.span.start.line, 2);
    assert_eq!(two.span.start.column, 2);
    assert_eq!(two.span.start.offset, 6);
    assert_eq!(two.span.end.offset, 7);

    let three = &tokens[5];
    assert_eq!(three.span.start.line, 4);
    assert_eq!(three.span.start.column, 1);
}

#[test]
fn test_multiline_string_advances_lines() {
    let tokens = tokenize("\"a\nb\" x", &SEXPR_GRAMMAR).unwrap();

    assert_eq!(tokens[1].text(), Some("x"));
    assert_eq!(tokens[1].span.start.line, 2);
    assert_eq!(tokens[1].span.start.column, 3);
}

#[test]
fn test_multiline_string_span_ends_on_last_line() {
    let tokens = tokenize("\"a\nb\" x", &SEXPR_GRAMMAR).unwrap();

    let string = &tokens[0];
    assert_eq!(string.span.start, Position::new(0, 1, 0));
    assert_eq!(string.span.end, Position::new(5, 2, 2));
    assert_eq!(tokens[1].span.end, Position::new(7, 2, 4));
}

#[test]
fn test_unrecognised_character_reports_line() {
    let error = tokenize("a\n@", &SEXPR_GRAMMAR).unwrap_err();

    assert!(matches!(error.kind(), ErrorImpl::UnrecognisedToken { character: '@' }));
    assert_eq!(error.character(), Some('@'));
    assert_eq!(error.line(), 2);
    assert_eq!(error.get_position().column, 0);
}

#[test]
fn test_first_error_aborts_scan() {
    let error = tokenize("{\"a\": 1} $ #", &JSON_GRAMMAR).unwrap_err();

    assert_eq!(error.character(), Some('$'));
    assert_eq!(error.line(), 1);
    assert_eq!(error.get_position().offset, 9);
}

#[test]
fn test_missing_catch_all_still_reports() {
    let grammar = GrammarBuilder::new("digits")
        .rule("NUMBER", "[0-9]+", RuleAction::Number(TokenKind::Number))
        .rule("NEWLINE", r"\n", RuleAction::Newline)
        .build()
        .unwrap();

    let error = tokenize("12\n3x", &grammar).unwrap_err();
    assert_eq!(error.character(), Some('x'));
    assert_eq!(error.line(), 2);
}

#[test]
fn test_rule_order_decides_priority() {
    let words_first = GrammarBuilder::new("words-first")
        .rule("NAME", "[a-z]+", RuleAction::Identifier(TokenKind::Name))
        .rule("CTE", "true|false", RuleAction::Emit(TokenKind::Constant))
        .build()
        .unwrap();
    let constants_first = GrammarBuilder::new("constants-first")
        .rule("CTE", "true|false", RuleAction::Emit(TokenKind::Constant))
        .rule("NAME", "[a-z]+", RuleAction::Identifier(TokenKind::Name))
        .build()
        .unwrap();

    assert_eq!(constants_first.rules()[0].name(), "CTE");
    assert_eq!(kinds("true", &words_first), vec![TokenKind::Name]);
    assert_eq!(kinds("true", &constants_first), vec![TokenKind::Constant]);
    // First rule wins even when a later one would match more.
    assert_eq!(kinds("trueish", &constants_first), vec![TokenKind::Constant, TokenKind::Name]);
}

#[test]
fn test_empty_matches_are_ignored() {
    let grammar = GrammarBuilder::new("optional")
        .rule("MAYBE", "a*", RuleAction::Emit(TokenKind::Name))
        .rule("NUMBER", "[0-9]+", RuleAction::Number(TokenKind::Number))
        .build()
        .unwrap();

    assert_eq!(kinds("7aa", &grammar), vec![TokenKind::Number, TokenKind::Name]);
}

#[test]
fn test_custom_keywords() {
    let grammar = GrammarBuilder::new("custom")
        .rule("ID", "[A-Za-z]+", RuleAction::Identifier(TokenKind::Name))
        .rule("SKIP", " +", RuleAction::Skip)
        .keyword("GOSUB", TokenKind::Gosub)
        .keywords(vec![(String::from("NEXT"), TokenKind::Next)])
        .keywords([("FOR", TokenKind::For)])
        .build()
        .unwrap();

    assert_eq!(
        kinds("GOSUB gosub NEXT FOR", &grammar),
        vec![TokenKind::Gosub, TokenKind::Name, TokenKind::Next, TokenKind::For]
    );
    assert_eq!(grammar.keywords().count(), 3);
}

#[test]
fn test_invalid_pattern() {
    let error = GrammarBuilder::new("broken")
        .rule("OPEN", "(", RuleAction::Emit(TokenKind::LPar))
        .build()
        .unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidPattern");
    assert!(matches!(error.kind(), ErrorImpl::InvalidPattern { rule, .. } if rule == "OPEN"));
}

#[test]
fn test_input_limit() {
    let options = LexerOptions::default().with_max_input_len(4);

    assert_eq!(tokenize_with("[1]", &JSON_GRAMMAR, &options).unwrap().len(), 3);

    let error = tokenize_with("[1, 2]", &JSON_GRAMMAR, &options).unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::InputTooLarge { len: 6, limit: 4 }));
}

#[test]
fn test_token_display() {
    let tokens = tokenize("{\"a\": 38}", &JSON_GRAMMAR).unwrap();

    assert_eq!(tokens[0].to_string(), "LBRACE(\"{\")");
    assert_eq!(tokens[1].to_string(), r#"STRING("\"a\"")"#);
    assert_eq!(tokens[3].to_string(), "NUMBER(38.0)");
    assert_eq!(TokenKind::Constant.to_string(), "CTE");
}

#[test]
fn test_non_ascii_input_is_reported_whole() {
    let error = tokenize("[é]", &JSON_GRAMMAR).unwrap_err();

    assert_eq!(error.character(), Some('é'));
    assert_eq!(error.get_position().offset, 1);
}

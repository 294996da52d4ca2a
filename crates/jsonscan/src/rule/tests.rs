use super::*;

fn tok(offset: usize, len: usize, kind: TokenType) -> Option<Token> {
    Some(Token::new(offset, len, kind))
}

// === Table ===

#[test]
fn table_order() {
    let kinds: Vec<TokenType> = Rule::ALL.iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::NumberLiteral,
            TokenType::BooleanLiteral,
            TokenType::NullLiteral,
            TokenType::StringLiteral,
            TokenType::OpenArray,
            TokenType::CloseArray,
            TokenType::OpenObject,
            TokenType::CloseObject,
            TokenType::Comma,
            TokenType::SemiColon,
        ]
    );
}

#[test]
fn structural_rules_match_their_lexeme() {
    for rule in Rule::ALL {
        if let Some(text) = rule.kind().lexeme() {
            assert_eq!(rule.try_match(text, 0), tok(0, 1, rule.kind()), "{rule:?}");
        }
    }
}

#[test]
fn at_most_one_rule_matches_each_start_byte() {
    let inputs = ["1", "true", "false", "null", "\"s\"", "[", "]", "{", "}", ",", ":"];
    for input in inputs {
        let hits = Rule::ALL
            .iter()
            .filter(|r| r.try_match(input, 0).is_some())
            .count();
        assert_eq!(hits, 1, "{input:?}");
    }
}

// === Number ===

#[test]
fn number_single_digit() {
    assert_eq!(Rule::Number.try_match("7", 0), tok(0, 1, TokenType::NumberLiteral));
}

#[test]
fn number_maximal_run() {
    assert_eq!(
        Rule::Number.try_match("x12345]", 1),
        tok(1, 5, TokenType::NumberLiteral)
    );
}

#[test]
fn number_stops_before_letters() {
    assert_eq!(
        Rule::Number.try_match("123abc", 0),
        tok(0, 3, TokenType::NumberLiteral)
    );
}

#[test]
fn number_rejects_sign() {
    assert_eq!(Rule::Number.try_match("-3", 0), None);
}

#[test]
fn number_stops_at_decimal_point() {
    assert_eq!(
        Rule::Number.try_match("3.14", 0),
        tok(0, 1, TokenType::NumberLiteral)
    );
}

#[test]
fn number_stops_at_exponent() {
    assert_eq!(
        Rule::Number.try_match("1e10", 0),
        tok(0, 1, TokenType::NumberLiteral)
    );
}

#[test]
fn number_rejects_non_ascii_digits() {
    // ARABIC-INDIC DIGIT ONE
    assert_eq!(Rule::Number.try_match("\u{0661}", 0), None);
}

// === Boolean & Null ===

#[test]
fn boolean_true_and_false() {
    assert_eq!(
        Rule::Boolean.try_match("true", 0),
        tok(0, 4, TokenType::BooleanLiteral)
    );
    assert_eq!(
        Rule::Boolean.try_match("[false]", 1),
        tok(1, 5, TokenType::BooleanLiteral)
    );
}

#[test]
fn boolean_has_no_word_boundary() {
    assert_eq!(
        Rule::Boolean.try_match("truething", 0),
        tok(0, 4, TokenType::BooleanLiteral)
    );
    assert_eq!(
        Rule::Boolean.try_match("falsey", 0),
        tok(0, 5, TokenType::BooleanLiteral)
    );
}

#[test]
fn boolean_rejects_partial_and_case() {
    assert_eq!(Rule::Boolean.try_match("tru", 0), None);
    assert_eq!(Rule::Boolean.try_match("fals", 0), None);
    assert_eq!(Rule::Boolean.try_match("True", 0), None);
}

#[test]
fn null_literal() {
    assert_eq!(Rule::Null.try_match("null", 0), tok(0, 4, TokenType::NullLiteral));
    assert_eq!(
        Rule::Null.try_match("nullable", 0),
        tok(0, 4, TokenType::NullLiteral)
    );
    assert_eq!(Rule::Null.try_match("nul", 0), None);
    assert_eq!(Rule::Null.try_match("NULL", 0), None);
}

// === String ===

#[test]
fn string_simple() {
    assert_eq!(
        Rule::String.try_match("\"abc\"", 0),
        tok(0, 5, TokenType::StringLiteral)
    );
}

#[test]
fn string_empty() {
    assert_eq!(
        Rule::String.try_match("\"\"", 0),
        tok(0, 2, TokenType::StringLiteral)
    );
}

#[test]
fn string_closes_at_nearest_quote() {
    assert_eq!(
        Rule::String.try_match("\"a\" \"b\"", 0),
        tok(0, 3, TokenType::StringLiteral)
    );
}

#[test]
fn string_ignores_backslash_escapes() {
    // The backslash does not protect the quote: `"a\"` is the whole lexeme.
    let input = r#""a\"b""#;
    assert_eq!(
        Rule::String.try_match(input, 0),
        tok(0, 4, TokenType::StringLiteral)
    );
}

#[test]
fn string_unterminated_does_not_match() {
    assert_eq!(Rule::String.try_match("\"abc", 0), None);
    assert_eq!(Rule::String.try_match("\"", 0), None);
}

#[test]
fn string_length_counts_utf8_bytes() {
    let input = "\"héllo\"";
    // 'é' is two bytes, so the byte length exceeds the character count.
    assert_eq!(input.chars().count(), 7);
    assert_eq!(input.len(), 8);
    let token = Rule::String.try_match(input, 0);
    assert_eq!(token, tok(0, input.len(), TokenType::StringLiteral));
    assert_eq!(token.and_then(|t| t.text(input)), Some(input));
}

#[test]
fn string_spans_newlines() {
    assert_eq!(
        Rule::String.try_match("\"a\nb\"", 0),
        tok(0, 5, TokenType::StringLiteral)
    );
}

#[test]
fn string_requires_opening_quote_at_offset() {
    assert_eq!(Rule::String.try_match("a\"b\"", 0), None);
}

// === Offsets ===

#[test]
fn offset_past_end_never_matches() {
    for rule in Rule::ALL {
        assert_eq!(rule.try_match("1", 1), None, "{rule:?}");
        assert_eq!(rule.try_match("1", 99), None, "{rule:?}");
    }
}

#[test]
fn offset_inside_multibyte_char_never_matches() {
    for rule in Rule::ALL {
        assert_eq!(rule.try_match("é", 1), None, "{rule:?}");
    }
}

#[test]
fn rules_only_look_forward() {
    // A quote before the offset must not open a string.
    assert_eq!(Rule::String.try_match("\"abc", 1), None);
    assert_eq!(Rule::Number.try_match("12", 1), tok(1, 1, TokenType::NumberLiteral));
}

// === match_at ===

#[test]
fn match_at_dispatches_by_first_byte() {
    let input = "[1,true,null,\"s\",{}:]";
    assert_eq!(match_at(input, 0), tok(0, 1, TokenType::OpenArray));
    assert_eq!(match_at(input, 1), tok(1, 1, TokenType::NumberLiteral));
    assert_eq!(match_at(input, 3), tok(3, 4, TokenType::BooleanLiteral));
    assert_eq!(match_at(input, 8), tok(8, 4, TokenType::NullLiteral));
    assert_eq!(match_at(input, 13), tok(13, 3, TokenType::StringLiteral));
    assert_eq!(match_at(input, 17), tok(17, 1, TokenType::OpenObject));
    assert_eq!(match_at(input, 18), tok(18, 1, TokenType::CloseObject));
    assert_eq!(match_at(input, 19), tok(19, 1, TokenType::SemiColon));
    assert_eq!(match_at(input, 20), tok(20, 1, TokenType::CloseArray));
}

#[test]
fn match_at_no_rule() {
    assert_eq!(match_at("-1", 0), None);
    assert_eq!(match_at(".", 0), None);
    assert_eq!(match_at(" ", 0), None);
    assert_eq!(match_at("", 0), None);
    assert_eq!(match_at("\"open", 0), None);
}

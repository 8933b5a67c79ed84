use super::*;

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src)
        .unwrap()
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

#[test]
fn tokenizes_operators_and_numbers() {
    assert_eq!(
        kinds("12+3.5*(4-1)/2%3"),
        vec![
            Token::Number(12.0),
            Token::Plus,
            Token::Number(3.5),
            Token::Star,
            Token::LParen,
            Token::Number(4.0),
            Token::Minus,
            Token::Number(1.0),
            Token::RParen,
            Token::Slash,
            Token::Number(2.0),
            Token::Percent,
            Token::Number(3.0),
        ]
    );
}

#[test]
fn double_star_is_one_token() {
    assert_eq!(
        kinds("2**3"),
        vec![Token::Number(2.0), Token::StarStar, Token::Number(3.0)]
    );
    assert_eq!(
        kinds("2* *3"),
        vec![
            Token::Number(2.0),
            Token::Star,
            Token::Star,
            Token::Number(3.0)
        ]
    );
}

#[test]
fn dangling_and_leading_dots_are_numbers() {
    assert_eq!(kinds("5."), vec![Token::Number(5.0)]);
    assert_eq!(kinds(".25"), vec![Token::Number(0.25)]);
}

#[test]
fn lone_dot_is_invalid() {
    assert_eq!(
        tokenize("1+."),
        Err(EvalError::InvalidNumber {
            literal: ".".to_string(),
            offset: 2
        })
    );
}

#[test]
fn second_dot_starts_a_new_literal() {
    assert_eq!(kinds("1.2.3"), vec![Token::Number(1.2), Token::Number(0.3)]);
}

#[test]
fn whitespace_is_skipped_and_offsets_are_kept() {
    let tokens = tokenize(" 1 +\t2").unwrap();
    let offsets: Vec<usize> = tokens.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![1, 3, 5]);
}

#[test]
fn unicode_whitespace_is_skipped() {
    assert_eq!(
        kinds("1\u{00A0}+\u{2003}2"),
        vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]
    );
}

#[test]
fn adjacent_same_signs_are_rejected() {
    assert_eq!(
        tokenize("2--3"),
        Err(EvalError::UnexpectedToken {
            found: "'--'".to_string(),
            offset: 1
        })
    );
    assert!(tokenize("1++2").is_err());
    assert_eq!(
        kinds("2- -3"),
        vec![
            Token::Number(2.0),
            Token::Minus,
            Token::Minus,
            Token::Number(3.0)
        ]
    );
    assert_eq!(
        kinds("+-2"),
        vec![Token::Plus, Token::Minus, Token::Number(2.0)]
    );
}

#[test]
fn leading_zero_integers_are_invalid() {
    assert_eq!(
        tokenize("1+05"),
        Err(EvalError::InvalidNumber {
            literal: "05".to_string(),
            offset: 2
        })
    );
    assert!(tokenize("00").is_err());
    assert!(tokenize("007.5").is_err());
    assert_eq!(kinds("0"), vec![Token::Number(0.0)]);
    assert_eq!(kinds("0.5"), vec![Token::Number(0.5)]);
    assert_eq!(kinds("10"), vec![Token::Number(10.0)]);
    assert_eq!(kinds("1.05"), vec![Token::Number(1.05)]);
}

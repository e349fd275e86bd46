use super::*;
use crate::ExprErrorKind;
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token<'_>> {
    Tokens::new(source)
        .map(|result| match result {
            Ok((token, _)) => token,
            Err(err) => panic!("unexpected scan error: {err}"),
        })
        .collect()
}

#[test]
fn scans_literals_identifiers_and_operators() {
    assert_eq!(
        tokens("(x + 12) * y / 3 - 4"),
        vec![
            Token::LParen,
            Token::Ident("x"),
            Token::Op(BinaryOp::Add),
            Token::Integer(12),
            Token::RParen,
            Token::Op(BinaryOp::Mul),
            Token::Ident("y"),
            Token::Op(BinaryOp::Div),
            Token::Integer(3),
            Token::Op(BinaryOp::Sub),
            Token::Integer(4),
        ]
    );
}

#[test]
fn whitespace_and_semicolons_are_insignificant() {
    assert_eq!(tokens("  1\t+ 2 ;;"), tokens("1+2"));
}

#[test]
fn maximal_munch_splits_digits_from_letters() {
    assert_eq!(tokens("12ab"), vec![Token::Integer(12), Token::Ident("ab")]);
}

#[test]
fn identifiers_accept_unicode_letters() {
    assert_eq!(
        tokens("café + ü * Ωmega"),
        vec![
            Token::Ident("café"),
            Token::Op(BinaryOp::Add),
            Token::Ident("ü"),
            Token::Op(BinaryOp::Mul),
            Token::Ident("Ωmega"),
        ]
    );
}

#[test]
fn non_letter_symbols_are_still_invalid() {
    let err = Tokens::new("é € 1")
        .find_map(Result::err)
        .map(|err| (err.kind, err.offset));
    assert_eq!(
        err,
        Some((ExprErrorKind::InvalidCharacter { ch: '€' }, Some(3)))
    );
}

#[test]
fn offsets_point_at_token_start() {
    let offsets: Vec<usize> = Tokens::new("a + 10")
        .filter_map(Result::ok)
        .map(|(_, offset)| offset)
        .collect();
    assert_eq!(offsets, vec![0, 2, 4]);
}

#[test]
fn invalid_character_stops_the_scan() {
    let mut scan = Tokens::new("1 % 2");
    assert_eq!(scan.next(), Some(Ok((Token::Integer(1), 0))));
    let err = match scan.next() {
        Some(Err(err)) => err,
        other => panic!("expected scan error, got {other:?}"),
    };
    assert_eq!(err.kind, ExprErrorKind::InvalidCharacter { ch: '%' });
    assert_eq!(err.offset, Some(2));
    assert_eq!(scan.next(), None);
}

#[test]
fn literal_overflow_is_reported() {
    let err = Tokens::new("99999999999999999999")
        .find_map(Result::err)
        .map(|err| err.kind);
    assert_eq!(
        err,
        Some(ExprErrorKind::IntegerOverflow {
            operation: "integer literal"
        })
    );
}

#[test]
fn largest_literal_fits() {
    assert_eq!(
        tokens("9223372036854775807"),
        vec![Token::Integer(i64::MAX)]
    );
}

#[test]
fn multiplicative_binds_tighter() {
    assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
    assert_eq!(BinaryOp::Div.precedence(), BinaryOp::Mul.precedence());
    assert_eq!(BinaryOp::Sub.precedence(), BinaryOp::Add.precedence());
}

////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Parse primitive test suite.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::combinator::maybe;
use crate::parser::Label;
use crate::primitive::*;
use crate::result::ParseResultExt as _;
use crate::test::context_of;


////////////////////////////////////////////////////////////////////////////////
// Char primitives
////////////////////////////////////////////////////////////////////////////////

/// Tests `primitive::any`.
#[test]
fn any_match() {
    assert_eq!(any().parse("abcd").ok(), Some('a'));
}

/// Tests `primitive::any` at the end of the input.
#[test]
fn any_nonmatch() {
    let res = any().parse("");
    assert!(res.is_err());
}

/// Tests `primitive::char_in`.
#[test]
fn char_in_match() {
    assert_eq!(char_in("cab").parse("abcd").ok(), Some('a'));
}

/// Tests `primitive::char_in`.
#[test]
fn char_in_nonmatch() {
    assert!(char_in("bdcbd").parse("abcd").is_err());
}

/// Tests `primitive::char_range`.
#[test]
fn char_range_match() {
    assert_eq!(char_range('0', '9').parse("5x").ok(), Some('5'));
}

/// Tests `primitive::char_range`.
#[test]
fn char_range_nonmatch() {
    assert!(char_range('0', '9').parse("x5").is_err());
}

/// Tests `primitive::char_matching`.
#[test]
fn char_matching_match() {
    assert_eq!(char_matching(|c| c == 'a').parse("abcd").ok(), Some('a'));
}

/// Tests `primitive::char_matching`.
#[test]
fn char_matching_nonmatch() {
    assert!(char_matching(|c| c == 'b').parse("abcd").is_err());
}


////////////////////////////////////////////////////////////////////////////////
// String primitives
////////////////////////////////////////////////////////////////////////////////

/// Tests `primitive::lit`.
#[test]
fn lit_match() {
    let mut ctx = context_of("abcd");
    let res = lit("ab").call(&mut ctx);
    assert_eq!(res.into_value(), Some("ab".to_string()));
    assert_eq!(ctx.pos(), 2);
}

/// Tests that a failed `primitive::lit` does not rewind what it read;
/// restoration belongs to the enclosing checkpoint.
#[test]
fn lit_nonmatch_no_rewind() {
    let mut ctx = context_of("abcd");
    let res = lit("ax").call(&mut ctx);
    assert!(res.is_err());
    assert_eq!(ctx.pos(), 2);
}

/// Tests a failed `primitive::lit` under a checkpointed attempt.
#[test]
fn lit_nonmatch_restored() {
    let p = maybe(lit("ax"));
    let mut ctx = context_of("abcd");
    let res = p.call(&mut ctx);
    assert_eq!(res.into_value(), Some(None));
    assert_eq!(ctx.pos(), 0);
}

/// Tests that a failed `primitive::lit` reports the text it read.
#[test]
fn lit_nonmatch_found() {
    let err = lit("ax").parse("abcd").unwrap_err();
    assert_eq!(err.found.as_deref(), Some("ab"));
    assert_eq!(err.pos, 0);
}

/// Tests `primitive::lit` against a short input.
#[test]
fn lit_short_input() {
    let err = lit("abcd").parse("ab").unwrap_err();
    assert_eq!(err.found.as_deref(), Some("ab"));
}

/// Tests `primitive::lit_ignore_case`.
#[test]
fn lit_ignore_case_match() {
    assert_eq!(
        lit_ignore_case("AbCd").parse("aBcD").ok(),
        Some("aBcD".to_string()));
}

/// Tests `primitive::lit_ignore_case`.
#[test]
fn lit_ignore_case_nonmatch() {
    assert!(lit_ignore_case("AbCd").parse("aBcx").is_err());
}

/// Tests `primitive::whitespace`.
#[test]
fn whitespace_match() {
    let mut ctx = context_of("\t abcd");
    let res = whitespace().call(&mut ctx);
    assert_eq!(res.into_value(), Some("\t ".to_string()));
    assert_eq!(ctx.pos(), 2);
}

/// Tests `primitive::whitespace`.
#[test]
fn whitespace_nonmatch() {
    assert!(whitespace().parse("abcd").is_err());
}

/// Tests `primitive::maybe_whitespace`.
#[test]
fn maybe_whitespace_empty() {
    let mut ctx = context_of("abcd");
    let res = maybe_whitespace().call(&mut ctx);
    assert_eq!(res.into_value(), Some(String::new()));
    assert_eq!(ctx.pos(), 0);
}


////////////////////////////////////////////////////////////////////////////////
// Empty primitives
////////////////////////////////////////////////////////////////////////////////

/// Tests `primitive::end_of_text`.
#[test]
fn end_of_text_match() {
    assert!(end_of_text().parse("").is_ok());
}

/// Tests that `primitive::end_of_text` reports the upcoming non-whitespace
/// run without consuming it.
#[test]
fn end_of_text_nonmatch() {
    let mut ctx = context_of("bar baz");
    let res = end_of_text().call(&mut ctx);
    match res {
        Err(failure) => {
            assert_eq!(failure.expected, Some(Label::token("end-of-text")));
            assert_eq!(failure.found.as_deref(), Some("bar"));
        },
        Ok(_) => panic!("end_of_text matched mid-input"),
    }
    assert_eq!(ctx.pos(), 0);
}

/// Tests `primitive::pure`.
#[test]
fn pure_consumes_nothing() {
    let mut ctx = context_of("abcd");
    let res = pure(10u32).call(&mut ctx);
    assert_eq!(res.into_value(), Some(10));
    assert_eq!(ctx.pos(), 0);
}

/// Tests `primitive::fail`.
#[test]
fn fail_consumes_nothing() {
    let mut ctx = context_of("abcd");
    let res = fail::<char>().call(&mut ctx);
    assert!(res.is_err());
    assert_eq!(ctx.pos(), 0);
}

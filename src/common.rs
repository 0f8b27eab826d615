////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Common parsers.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::combinator::maybe;
use crate::combinator::one_or_more;
use crate::parser::Label;
use crate::parser::Parser;
use crate::primitive::char_matching;
use crate::result::Failure;
use crate::result::ParseIntegerOverflow;
use crate::result::ParseResultExt as _;
use crate::result::Success;
use crate::span::Span;

// Standard library imports.
use std::convert::TryFrom;
use std::convert::TryInto as _;


////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// Integer radix prefix for binary numbers.
pub const INT_RADIX_PREFIX_BIN: &'static str = "0b";

/// Integer radix prefix for octal numbers.
pub const INT_RADIX_PREFIX_OCT: &'static str = "0o";

/// Integer radix prefix for hexadecimal numbers.
pub const INT_RADIX_PREFIX_HEX: &'static str = "0x";


////////////////////////////////////////////////////////////////////////////////
// Integer parsing.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which parses an integer radix prefix.
pub fn prefix_radix_token() -> Parser<String> {
    Parser::new(Label::text("0[box]"), move |ctx| {
        let start = ctx.pos();
        let read = ctx.source().read(2);
        if  read == INT_RADIX_PREFIX_BIN ||
            read == INT_RADIX_PREFIX_OCT ||
            read == INT_RADIX_PREFIX_HEX
        {
            Ok(Success::new(read, Span::new(start, ctx.pos())))
        } else {
            Err(Failure::new(Label::text("0[box]"), start).with_found(read))
        }
    })
}

/// Returns a parser which parses an unsigned integer with an optional radix
/// prefix. Underscores may be used as digit separators.
pub fn uint<T>(int_type: &'static str) -> Parser<T>
    where T: TryFrom<u64> + 'static
{
    let label = Label::text(format!("uint({:?})", int_type));
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let radix_suc = maybe(prefix_radix_token()).call(ctx)?;
        let radix: u32 = match radix_suc.value.as_deref() {
            Some("0b") => 2,
            Some("0o") => 8,
            Some("0x") => 16,
            None => 10,
            // `prefix_radix_token` never succeeds with another string.
            Some(_) => unreachable!(),
        };

        let digit = char_matching(move |c| c.is_digit(radix) || c == '_');
        let digits_suc = one_or_more(digit)
            .call(ctx)
            .source_for(format!("{} integer digits with radix {}",
                int_type, radix))?;
        let digits: String = digits_suc.value.into_iter().collect();

        let mut res: u64 = 0;
        let mut chars = digits.chars();
        while let Some(c) = chars.next() {
            if c == '_' { continue; }

            let val = u64::from(c.to_digit(radix).unwrap());

            match res.checked_mul(u64::from(radix)) {
                Some(x) => res = x,
                None => return Err(overflow_failure(
                    int_type, &digits, u128::from(res), start)),
            }
            match res.checked_add(val) {
                Some(x) => res = x,
                None => return Err(overflow_failure(
                    int_type,
                    &digits,
                    u128::from(res) + u128::from(val),
                    start)),
            }
        }

        match res.try_into() {
            Ok(res) => Ok(Success::new(res, Span::new(start, ctx.pos()))),
            Err(_) => Err(overflow_failure(
                int_type, &digits, u128::from(res), start)),
        }
    })
}

/// Returns the failure raised when an integer parse overflows its type.
fn overflow_failure(
    int_type: &'static str,
    digits: &str,
    value: u128,
    pos: usize)
    -> Failure
{
    Failure {
        expected: Some(Label::text(format!("{} value", int_type))),
        found: Some(digits.to_string()),
        pos,
        source: Some(Box::new(ParseIntegerOverflow {
            int_type: int_type.into(),
            int_text: digits.to_string().into(),
            value,
        })),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Parse primitives.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::combinator::maybe;
use crate::combinator::one_or_more;
use crate::parser::Label;
use crate::parser::Parser;
use crate::result::Failure;
use crate::result::Success;
use crate::span::Span;


////////////////////////////////////////////////////////////////////////////////
// Char parsing.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which parses any single `char`, failing only at the end
/// of the input.
pub fn any() -> Parser<char> {
    Parser::new(Label::token("any"), move |ctx| {
        let start = ctx.pos();
        let read = ctx.source().read(1);
        match read.chars().next() {
            Some(c) => Ok(Success::new(c, Span::new(start, ctx.pos()))),
            None => Err(Failure::new(Label::token("any"), start)),
        }
    })
}

/// Returns a parser which parses any single `char` in the given string.
pub fn char_in<S>(opts: S) -> Parser<char>
    where S: Into<String>
{
    let opts = opts.into();
    let label = Label::text(format!("char_in({:?})", opts));
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let read = ctx.source().read(1);
        match read.chars().next() {
            Some(c) if opts.contains(c) => {
                Ok(Success::new(c, Span::new(start, ctx.pos())))
            },
            _ => {
                let expected = Label::text(format!("one of {}", opts));
                Err(Failure::new(expected, start).with_found(read))
            },
        }
    })
}

/// Returns a parser which parses any single `char` in the given inclusive
/// range.
pub fn char_range(low: char, high: char) -> Parser<char> {
    let label = Label::text(format!("char_range({:?}, {:?})", low, high));
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let read = ctx.source().read(1);
        match read.chars().next() {
            Some(c) if c >= low && c <= high => {
                Ok(Success::new(c, Span::new(start, ctx.pos())))
            },
            _ => {
                let expected = Label::text(
                    format!("char in {:?}..={:?}", low, high));
                Err(Failure::new(expected, start).with_found(read))
            },
        }
    })
}

/// Returns a parser which parses a `char` if it satisfies the given
/// predicate.
pub fn char_matching<F>(f: F) -> Parser<char>
    where F: Fn(char) -> bool + 'static
{
    Parser::new(Label::token("char-matching"), move |ctx| {
        let start = ctx.pos();
        let read = ctx.source().read(1);
        match read.chars().next() {
            Some(c) if (f)(c) => {
                Ok(Success::new(c, Span::new(start, ctx.pos())))
            },
            _ => {
                let expected = Label::text("char satisfying predicate");
                Err(Failure::new(expected, start).with_found(read))
            },
        }
    })
}

/// Returns a parser which parses a whitespace `char`.
pub fn char_whitespace() -> Parser<char> {
    char_matching(char::is_whitespace)
        .named(Label::text("whitespace char"))
}


////////////////////////////////////////////////////////////////////////////////
// String parsing.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which parses the given text literal.
pub fn lit<S>(expect: S) -> Parser<String>
    where S: Into<String>
{
    let expect = expect.into();
    let label = Label::text(format!("lit({:?})", expect));
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let len = expect.chars().count();
        let read = ctx.source().read(len);
        if read == expect {
            Ok(Success::new(read, Span::new(start, ctx.pos())))
        } else {
            let expected = Label::text(format!("{:?}", expect));
            Err(Failure::new(expected, start).with_found(read))
        }
    })
}

/// Returns a parser which parses the given text literal, ignoring ASCII
/// case. Yields the text as it appears in the input.
pub fn lit_ignore_case<S>(expect: S) -> Parser<String>
    where S: Into<String>
{
    let expect = expect.into();
    let label = Label::text(format!("lit_ignore_case({:?})", expect));
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let len = expect.chars().count();
        let read = ctx.source().read(len);
        if read.eq_ignore_ascii_case(&expect) {
            Ok(Success::new(read, Span::new(start, ctx.pos())))
        } else {
            let expected = Label::text(format!("{:?}", expect));
            Err(Failure::new(expected, start).with_found(read))
        }
    })
}

/// Returns a parser which parses any nonzero amount of whitespace.
pub fn whitespace() -> Parser<String> {
    one_or_more(char_whitespace())
        .map(|chars| chars.into_iter().collect())
        .named(Label::token("whitespace"))
}

/// Returns a parser which parses any amount of whitespace, yielding an
/// empty string when none is present.
pub fn maybe_whitespace() -> Parser<String> {
    maybe_whitespace_with(whitespace())
}

/// Returns a parser which parses any amount of whitespace as defined by the
/// given one-or-more whitespace parser, yielding an empty string when none
/// is present.
///
/// Overriding the whitespace definition (e.g. to include comments) happens
/// here: helpers built from the overridden parser dispatch through it.
pub fn maybe_whitespace_with(ws: Parser<String>) -> Parser<String> {
    maybe(ws)
        .map(Option::unwrap_or_default)
        .named(Label::token("maybe-whitespace"))
}


////////////////////////////////////////////////////////////////////////////////
// Empty parsing.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which succeeds at the end of the input, consuming
/// nothing. On failure it reports the upcoming run of non-whitespace
/// characters.
pub fn end_of_text() -> Parser<()> {
    Parser::new(Label::token("end-of-text"), move |ctx| {
        let start = ctx.pos();
        if ctx.eof() {
            return Ok(Success::new((), Span::point(start)));
        }

        // Peek the upcoming non-whitespace run for the failure report.
        ctx.source().checkpoint();
        let mut run = String::new();
        loop {
            let read = ctx.source().read(1);
            match read.chars().next() {
                Some(c) if !c.is_whitespace() => run.push(c),
                _ => break,
            }
        }
        ctx.source().restore();

        Err(Failure::new(Label::token("end-of-text"), start).with_found(run))
    })
}

/// Returns a parser which succeeds without consuming anything, yielding a
/// clone of the given value.
pub fn pure<V>(value: V) -> Parser<V>
    where V: Clone + 'static
{
    Parser::new(Label::token("pure"), move |ctx| {
        Ok(Success::new(value.clone(), Span::point(ctx.pos())))
    })
}

/// Returns a parser which fails without consuming anything. This is the
/// identity of alternation.
pub fn fail<V>() -> Parser<V>
    where V: 'static
{
    Parser::new(Label::token("fail"), move |ctx| {
        Err(Failure::new(Label::token("fail"), ctx.pos()))
    })
}

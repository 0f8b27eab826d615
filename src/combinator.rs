////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Parser combinators.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::define::call_label;
use crate::parser::Label;
use crate::parser::Parser;
use crate::primitive::any;
use crate::primitive::fail;
use crate::primitive::maybe_whitespace_with;
use crate::primitive::whitespace;
use crate::result::Failure;
use crate::result::ParseResultExt as _;
use crate::result::Success;
use crate::span::Span;

// Standard library imports.
use std::cell::RefCell;
use std::ops::Add;
use std::ops::BitOr;
use std::rc::Rc;


////////////////////////////////////////////////////////////////////////////////
// Alternation.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which attempts a parse with the first argument under a
/// checkpoint, restoring and parsing with the second on failure.
///
/// Alternation is left-biased ordered choice: if the first parser succeeds,
/// the second is never tried.
pub fn or<V>(p: Parser<V>, q: Parser<V>) -> Parser<V>
    where V: 'static
{
    let label = Label::text(format!("({} | {})", p.label(), q.label()));
    Parser::new(label, move |ctx| {
        match ctx.attempt(|ctx| p.call(ctx)) {
            Ok(success) => Ok(success),
            Err(_) => q.call(ctx),
        }
    })
}

/// Returns a parser which attempts each of the given parsers in order,
/// yielding the first success. An empty list always fails.
///
/// The alternation chain this is built from is spliced out of the trace, so
/// each alternative appears directly under the `choice` node.
pub fn choice<V, I>(ps: I) -> Parser<V>
    where
        V: 'static,
        I: IntoIterator<Item = Parser<V>>
{
    let ps: Vec<_> = ps.into_iter().collect();
    let labels: Vec<_> = ps.iter().map(|p| p.label().clone()).collect();
    let label = call_label("choice", &labels);

    let mut acc: Parser<V> = fail();
    for p in ps {
        acc = or(acc, p.splice_end());
    }
    Parser::new(label, move |ctx| acc.call(ctx)).splice_start()
}


////////////////////////////////////////////////////////////////////////////////
// Sequencing.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which parses with both arguments in sequence, yielding
/// both results.
///
/// A failure of the second parser fails the sequence without restoring
/// anything; rewinding is the business of the enclosing checkpoint.
pub fn both<L, R>(l: Parser<L>, r: Parser<R>) -> Parser<(L, R)>
    where L: 'static, R: 'static
{
    let label = call_label("both", &[l.label().clone(), r.label().clone()]);
    Parser::new(label, move |ctx| {
        let l_suc = l.call(ctx)?;
        let r_suc = r.call(ctx)?;
        let span = l_suc.span.enclose(r_suc.span);
        Ok(Success::new((l_suc.value, r_suc.value), span))
    })
}

/// Returns a parser which parses with both arguments in sequence, yielding
/// the first result.
pub fn left<L, R>(l: Parser<L>, r: Parser<R>) -> Parser<L>
    where L: 'static, R: 'static
{
    let label = call_label("left", &[l.label().clone(), r.label().clone()]);
    Parser::new(label, move |ctx| {
        let l_suc = l.call(ctx)?;
        let r_suc = r.call(ctx)?;
        let span = l_suc.span.enclose(r_suc.span);
        Ok(Success::new(l_suc.value, span))
    })
}

/// Returns a parser which parses with both arguments in sequence, yielding
/// the second result.
pub fn right<L, R>(l: Parser<L>, r: Parser<R>) -> Parser<R>
    where L: 'static, R: 'static
{
    let label = call_label("right", &[l.label().clone(), r.label().clone()]);
    Parser::new(label, move |ctx| {
        let l_suc = l.call(ctx)?;
        let r_suc = r.call(ctx)?;
        let span = l_suc.span.enclose(r_suc.span);
        Ok(Success::new(r_suc.value, span))
    })
}

/// Returns a parser which parses with every given parser in order, yielding
/// their results in sequence.
pub fn group<V>(ps: Vec<Parser<V>>) -> Parser<Vec<V>>
    where V: 'static
{
    let labels: Vec<_> = ps.iter().map(|p| p.label().clone()).collect();
    let label = call_label("group", &labels);
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let mut vals = Vec::with_capacity(ps.len());
        for p in &ps {
            let success = p.call(ctx)?;
            vals.push(success.value);
        }
        Ok(Success::new(vals, Span::new(start, ctx.pos())))
    })
}

/// Returns a parser which parses with the first argument, then parses the
/// bracketed content, then the closing parser, yielding the content's
/// result.
pub fn bracket<L, V, R>(l: Parser<L>, center: Parser<V>, r: Parser<R>)
    -> Parser<V>
    where L: 'static, V: 'static, R: 'static
{
    let label = call_label("bracket", &[
        l.label().clone(),
        center.label().clone(),
        r.label().clone()]);
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let _ = l.call(ctx)?;
        let center_suc = center.call(ctx)?;
        let _ = r.call(ctx)?;
        Ok(Success::new(center_suc.value, Span::new(start, ctx.pos())))
    })
}


////////////////////////////////////////////////////////////////////////////////
// Result shaping.
////////////////////////////////////////////////////////////////////////////////

/// A parse result which can be concatenated with another of the same type.
pub trait Concat {
    /// Concatenates two values, appending `other` after `self`.
    fn concat(self, other: Self) -> Self;
}

impl Concat for String {
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Concat for Vec<T> {
    fn concat(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// Returns a parser which parses with both arguments in sequence,
/// concatenating their results.
pub fn concat<V>(p: Parser<V>, q: Parser<V>) -> Parser<V>
    where V: Concat + 'static
{
    let label = Label::text(format!("({} + {})", p.label(), q.label()));
    Parser::new(label, move |ctx| {
        let l_suc = p.call(ctx)?;
        let r_suc = q.call(ctx)?;
        let span = l_suc.span.enclose(r_suc.span);
        Ok(Success::new(l_suc.value.concat(r_suc.value), span))
    })
}

/// Returns a parser which concatenates the sequence of strings yielded by
/// the given parser.
pub fn join(p: Parser<Vec<String>>) -> Parser<String> {
    let label = call_label("join", &[p.label().clone()]);
    p.map(|vals| vals.into_iter().collect()).named(label)
}

/// Returns a parser which wraps the given parser's result in a one-element
/// sequence.
pub fn single<V>(p: Parser<V>) -> Parser<Vec<V>>
    where V: 'static
{
    let label = call_label("single", &[p.label().clone()]);
    p.map(|value| vec![value]).named(label)
}


////////////////////////////////////////////////////////////////////////////////
// Speculation.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which will attempt a parse, wrapping the result in
/// `Some` if it succeeds, otherwise restoring the input and yielding `None`.
pub fn maybe<V>(p: Parser<V>) -> Parser<Option<V>>
    where V: 'static
{
    let label = call_label("maybe", &[p.label().clone()]);
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        match ctx.attempt(|ctx| p.call(ctx)) {
            Ok(success) => Ok(Success::new(Some(success.value), success.span)),
            Err(_) => Ok(Success::new(None, Span::point(start))),
        }
    })
}

/// Returns a parser which parses with the given parser and restores the
/// input afterwards, succeeding or failing as it does.
pub fn peek<V>(p: Parser<V>) -> Parser<V>
    where V: 'static
{
    let label = call_label("peek", &[p.label().clone()]);
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        ctx.source().checkpoint();
        let res = p.call(ctx);
        ctx.source().restore();
        match res {
            Ok(success) => Ok(Success::new(success.value, Span::point(start))),
            Err(failure) => Err(failure),
        }
    })
}

/// Returns a parser which parses with `p` only if `q` would not succeed at
/// the current position. If `q` succeeds, the parse fails reporting the text
/// `q` matched.
pub fn unless<Q, V>(q: Parser<Q>, p: Parser<V>) -> Parser<V>
    where Q: 'static, V: 'static
{
    let label = call_label("unless", &[q.label().clone(), p.label().clone()]);
    let not_label = format!("not {}", q.label());
    Parser::new(label, move |ctx| {
        ctx.source().checkpoint();
        let res = q.call(ctx);
        ctx.source().restore();
        match res {
            Ok(success) => {
                let found = ctx.seen_slice(success.span);
                let expected = Label::text(not_label.clone());
                Err(Failure::new(expected, success.span.start)
                    .with_found(found))
            },
            Err(_) => p.call(ctx),
        }
    })
}


////////////////////////////////////////////////////////////////////////////////
// Repetition.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which repeats a parse a given number of times, stopping
/// if a failure occurs or the upper limit is reached, returning the number
/// of successes. Fails if the lower limit is not reached.
///
/// An iteration which succeeds without consuming input terminates the
/// repetition.
///
/// # Panics
///
/// Panics if `high` is less than `low`.
pub fn repeat<V>(low: usize, high: Option<usize>, p: Parser<V>)
    -> Parser<usize>
    where V: 'static
{
    assert!(high.map_or(true, |h| h >= low),
        "repeat upper limit is less than its lower limit");
    let label = Label::text(
        format!("repeat({}, {:?}, {})", low, high, p.label()));
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let mut count = 0;
        loop {
            if high.map_or(false, |h| count >= h) { break; }
            let before = ctx.pos();
            match ctx.attempt(|ctx| p.call(ctx)) {
                Ok(_) => {
                    count += 1;
                    if ctx.pos() == before { break; }
                },
                Err(failure) => {
                    if count < low {
                        return Err(failure)
                            .source_for(repeat_expected(low, high));
                    }
                    break;
                },
            }
        }
        if count < low {
            let expected = Label::text(repeat_expected(low, high));
            return Err(Failure::new(expected, ctx.pos()));
        }
        Ok(Success::new(count, Span::new(start, ctx.pos())))
    })
}

/// Returns a parser which repeats a parse a given number of times, stopping
/// if a failure occurs or the upper limit is reached, returning a `Vec`
/// containing each successful result in order. Fails if the lower limit is
/// not reached.
///
/// An iteration which succeeds without consuming input terminates the
/// repetition.
///
/// # Panics
///
/// Panics if `high` is less than `low`.
pub fn repeat_collect<V>(low: usize, high: Option<usize>, p: Parser<V>)
    -> Parser<Vec<V>>
    where V: 'static
{
    assert!(high.map_or(true, |h| h >= low),
        "repeat upper limit is less than its lower limit");
    let label = Label::text(
        format!("repeat_collect({}, {:?}, {})", low, high, p.label()));
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let mut vals = Vec::new();
        loop {
            if high.map_or(false, |h| vals.len() >= h) { break; }
            let before = ctx.pos();
            match ctx.attempt(|ctx| p.call(ctx)) {
                Ok(success) => {
                    vals.push(success.value);
                    if ctx.pos() == before { break; }
                },
                Err(failure) => {
                    if vals.len() < low {
                        return Err(failure)
                            .source_for(repeat_expected(low, high))
                            .map_value(|_: V| Vec::new());
                    }
                    break;
                },
            }
        }
        if vals.len() < low {
            let expected = Label::text(repeat_expected(low, high));
            return Err(Failure::new(expected, ctx.pos()));
        }
        Ok(Success::new(vals, Span::new(start, ctx.pos())))
    })
}

/// Returns a parser which repeats a parse any number of times, returning
/// each successful result in order. Cannot fail.
pub fn zero_or_more<V>(p: Parser<V>) -> Parser<Vec<V>>
    where V: 'static
{
    let label = call_label("zero_or_more", &[p.label().clone()]);
    repeat_collect(0, None, p).named(label)
}

/// Returns a parser which repeats a parse at least once, returning each
/// successful result in order. Fails if the first attempt fails.
pub fn one_or_more<V>(p: Parser<V>) -> Parser<Vec<V>>
    where V: 'static
{
    let label = call_label("one_or_more", &[p.label().clone()]);
    repeat_collect(1, None, p).named(label)
}

/// Returns a parser which repeats a parse a given number of times with a
/// separator parse between each, returning a `Vec` containing each
/// successful result in order. Fails if the lower limit is not reached.
///
/// The separator's results are discarded, and a trailing separator is never
/// consumed.
///
/// # Panics
///
/// Panics if `high` is less than `low`.
pub fn intersperse_collect<V, S>(
    low: usize,
    high: Option<usize>,
    p: Parser<V>,
    sep: Parser<S>)
    -> Parser<Vec<V>>
    where V: 'static, S: 'static
{
    assert!(high.map_or(true, |h| h >= low),
        "intersperse upper limit is less than its lower limit");
    let label = Label::text(format!("intersperse_collect({}, {:?}, {}, {})",
        low, high, p.label(), sep.label()));
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let mut vals = Vec::new();
        if high == Some(0) {
            return Ok(Success::new(vals, Span::point(start)));
        }

        match ctx.attempt(|ctx| p.call(ctx)) {
            Ok(success) => vals.push(success.value),
            Err(failure) => {
                if low == 0 {
                    return Ok(Success::new(vals, Span::point(start)));
                }
                return Err(failure)
                    .source_for(repeat_expected(low, high))
                    .map_value(|_: V| Vec::new());
            },
        }

        loop {
            if high.map_or(false, |h| vals.len() >= h) { break; }
            let before = ctx.pos();
            let attempt_res = ctx.attempt(|ctx| {
                let _ = sep.call(ctx)?;
                p.call(ctx)
            });
            match attempt_res {
                Ok(success) => {
                    vals.push(success.value);
                    if ctx.pos() == before { break; }
                },
                Err(failure) => {
                    if vals.len() < low {
                        return Err(failure)
                            .source_for(repeat_expected(low, high))
                            .map_value(|_: V| Vec::new());
                    }
                    break;
                },
            }
        }
        if vals.len() < low {
            let expected = Label::text(repeat_expected(low, high));
            return Err(Failure::new(expected, ctx.pos()));
        }
        Ok(Success::new(vals, Span::new(start, ctx.pos())))
    })
}

/// Returns the expected-parse description for a bounded repetition.
fn repeat_expected(low: usize, high: Option<usize>) -> String {
    match high {
        Some(high) => format!("repeat {} to {}", low, high),
        None => format!("repeat {}", low),
    }
}

/// Returns a parser which accumulates characters parsed by `with` (any
/// character by default, see [`take_until`]) until `stop` would succeed,
/// yielding the accumulated string. The stop parse is never consumed.
///
/// [`take_until`]: fn.take_until.html
pub fn take_until_with<S>(stop: Parser<S>, with: Parser<char>)
    -> Parser<String>
    where S: 'static
{
    let label = call_label("take_until_with", &[
        stop.label().clone(),
        with.label().clone()]);
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let mut acc = String::new();
        loop {
            ctx.source().checkpoint();
            let stop_res = stop.call(ctx);
            ctx.source().restore();
            if stop_res.is_ok() { break; }

            let success = with.call(ctx)?;
            acc.push(success.value);
        }
        Ok(Success::new(acc, Span::new(start, ctx.pos())))
    })
}

/// Returns a parser which accumulates characters until `stop` would
/// succeed, yielding the accumulated string. The stop parse is never
/// consumed.
pub fn take_until<S>(stop: Parser<S>) -> Parser<String>
    where S: 'static
{
    let label = call_label("take_until", &[stop.label().clone()]);
    take_until_with(stop, any()).named(label)
}


////////////////////////////////////////////////////////////////////////////////
// Whitespace wrapping.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which parses with the given parser, consuming any
/// whitespace before and after it.
pub fn spaced<V>(p: Parser<V>) -> Parser<V>
    where V: 'static
{
    spaced_with(whitespace(), p)
}

/// Returns a parser which parses with the given parser, consuming
/// whitespace as defined by the given one-or-more whitespace parser before
/// and after it.
pub fn spaced_with<V>(ws: Parser<String>, p: Parser<V>) -> Parser<V>
    where V: 'static
{
    let label = call_label("spaced", &[p.label().clone()]);
    bracket(
        maybe_whitespace_with(ws.clone()),
        p,
        maybe_whitespace_with(ws))
        .named(label)
}


////////////////////////////////////////////////////////////////////////////////
// Deferred construction.
////////////////////////////////////////////////////////////////////////////////

/// Returns a parser which defers construction of its inner parser until
/// first invocation, permitting cyclic grammars. The built parser is
/// memoized.
pub fn lazy<V, F>(f: F) -> Parser<V>
    where
        V: 'static,
        F: Fn() -> Parser<V> + 'static
{
    let cell: Rc<RefCell<Option<Parser<V>>>> = Rc::new(RefCell::new(None));
    Parser::new(Label::token("lazy"), move |ctx| {
        let parser = {
            let mut slot = cell.borrow_mut();
            match &*slot {
                Some(parser) => parser.clone(),
                None => {
                    let built = (f)();
                    *slot = Some(built.clone());
                    built
                },
            }
        };
        parser.call(ctx)
    })
}

/// Constructs the fixpoint of the given function: `f` receives a parser
/// which parses with `f`'s own result.
///
/// # Panics
///
/// The self-reference panics if invoked while `f` is still constructing the
/// parser; defer any such invocation with [`lazy`].
///
/// [`lazy`]: fn.lazy.html
pub fn recursive<V, F>(f: F) -> Parser<V>
    where
        V: 'static,
        F: FnOnce(Parser<V>) -> Parser<V>
{
    let cell: Rc<RefCell<Option<Parser<V>>>> = Rc::new(RefCell::new(None));
    let self_ref = {
        let cell = Rc::clone(&cell);
        Parser::new(Label::token("recursive"), move |ctx| {
            let parser = match &*cell.borrow() {
                Some(parser) => parser.clone(),
                None => panic!("recursive parser invoked during construction"),
            };
            parser.call(ctx)
        })
    };
    let built = (f)(self_ref);
    *cell.borrow_mut() = Some(built.clone());
    built
}

/// Returns a parser which parses a seed value and then iteratively extends
/// it: each round builds a new parser from the running result via `step` and
/// attempts it under a checkpoint, adopting its result on success and
/// yielding the running result on failure.
///
/// This turns left-recursive grammar fragments into bottom-up iteration,
/// yielding left-associative structures without unbounded recursion. A step
/// which succeeds without consuming input terminates the iteration.
pub fn reduce<V, F>(seed: Parser<V>, step: F) -> Parser<V>
    where
        V: Clone + 'static,
        F: Fn(V) -> Parser<V> + 'static
{
    let label = call_label("reduce", &[seed.label().clone()]);
    Parser::new(label, move |ctx| {
        let start = ctx.pos();
        let mut acc = seed.call(ctx)?.value;
        loop {
            let before = ctx.pos();
            let stepper = (step)(acc.clone());
            match ctx.attempt(|ctx| stepper.call(ctx)) {
                Ok(success) => {
                    acc = success.value;
                    if ctx.pos() == before { break; }
                },
                Err(_) => break,
            }
        }
        Ok(Success::new(acc, Span::new(start, ctx.pos())))
    })
}


////////////////////////////////////////////////////////////////////////////////
// Operators.
////////////////////////////////////////////////////////////////////////////////

impl<V> BitOr for Parser<V>
    where V: 'static
{
    type Output = Parser<V>;

    /// Alternation. Equivalent to [`or`].
    ///
    /// [`or`]: fn.or.html
    fn bitor(self, rhs: Self) -> Self::Output {
        or(self, rhs)
    }
}

impl<V> Add for Parser<V>
    where V: Concat + 'static
{
    type Output = Parser<V>;

    /// Concatenation. Equivalent to [`concat`].
    ///
    /// [`concat`]: fn.concat.html
    fn add(self, rhs: Self) -> Self::Output {
        concat(self, rhs)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Parse results.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::parser::Label;
use crate::span::Span;
use crate::trace::display::render_trace;
use crate::trace::TraceTree;

// Standard library imports.
use std::borrow::Cow;


////////////////////////////////////////////////////////////////////////////////
// ParseResult
////////////////////////////////////////////////////////////////////////////////
/// The result of a parse attempt.
pub type ParseResult<V> = Result<Success<V>, Failure>;

/// Extension trait for parse results.
pub trait ParseResultExt<V>: Sized {
    /// Converts a failed result into a source for a new failure with the
    /// given expected label.
    fn source_for<L>(self, expected: L) -> Self
        where L: Into<Label>;

    /// Returns a reference to the value produced by a successful parse, or
    /// None if the parse was not successful.
    fn value(&self) -> Option<&V>;

    /// Consumes the result, returning the value produced by a successful
    /// parse, or None if the parse was not successful.
    fn into_value(self) -> Option<V>;

    /// Returns the input span covered by a successful parse.
    fn span(&self) -> Option<Span>;

    /// Applies the given closure to the parsed value. Will only be called if
    /// the parse was successful.
    fn map_value<F, U>(self, f: F) -> ParseResult<U>
        where F: FnOnce(V) -> U;

    /// Discards the parsed value.
    fn discard_value(self) -> ParseResult<()> {
        self.map_value(|_| ())
    }
}

impl<V> ParseResultExt<V> for ParseResult<V> {
    fn source_for<L>(self, expected: L) -> Self
        where L: Into<Label>
    {
        self.map_err(|failure| {
            let found = failure.found.clone();
            let pos = failure.pos;
            Failure {
                expected: Some(expected.into()),
                found,
                pos,
                source: Some(Box::new(failure)),
            }
        })
    }

    fn value(&self) -> Option<&V> {
        self.as_ref().ok().map(|success| &success.value)
    }

    fn into_value(self) -> Option<V> {
        self.ok().map(|success| success.value)
    }

    fn span(&self) -> Option<Span> {
        self.as_ref().ok().map(|success| success.span)
    }

    fn map_value<F, U>(self, f: F) -> ParseResult<U>
        where F: FnOnce(V) -> U
    {
        self.map(|success| Success {
            value: (f)(success.value),
            span: success.span,
        })
    }
}


////////////////////////////////////////////////////////////////////////////////
// Success and Failure
////////////////////////////////////////////////////////////////////////////////
/// A struct representing a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Success<V> {
    /// The parsed value.
    pub value: V,
    /// The input span covered by the parse.
    pub span: Span,
}

impl<V> Success<V> {
    /// Constructs a new `Success` from the given value and span.
    pub fn new(value: V, span: Span) -> Self {
        Success { value, span }
    }
}

/// A struct representing a failed parse.
///
/// As the failure propagates out of an explicitly named parser, the parser
/// chains itself on via [`source_for`], so the final failure names the
/// outermost expectation while retaining the originating one as its
/// [`source`].
///
/// [`source_for`]: trait.ParseResultExt.html#tymethod.source_for
/// [`source`]: https://doc.rust-lang.org/stable/std/error/trait.Error.html#method.source
#[derive(Debug)]
pub struct Failure {
    /// The expected parse, if known.
    pub expected: Option<Label>,
    /// The text found at the failure position, if any was read.
    pub found: Option<String>,
    /// The absolute character offset of the failure.
    pub pos: usize,
    /// The parse failure that caused this one.
    pub source: Option<Box<dyn std::error::Error + 'static>>,
}

impl Failure {
    /// Constructs a new `Failure` at the given position with the given
    /// expected label.
    pub fn new<L>(expected: L, pos: usize) -> Self
        where L: Into<Label>
    {
        Failure {
            expected: Some(expected.into()),
            found: None,
            pos,
            source: None,
        }
    }

    /// Sets the text found at the failure position. An empty string is
    /// treated as nothing found.
    pub fn with_found(mut self, found: String) -> Self {
        self.found = if found.is_empty() { None } else { Some(found) };
        self
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error")?;
        if let Some(expected) = &self.expected {
            write!(f, ": expected {}", expected)?;
        }
        if let Some(found) = &self.found {
            write!(f, ", found {:?}", found)?;
        }
        write!(f, " at position {}", self.pos)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|src| src.as_ref())
    }
}


////////////////////////////////////////////////////////////////////////////////
// ParseError
////////////////////////////////////////////////////////////////////////////////
/// A failed top-level parse.
///
/// Carries the failure data together with the parse trace and the seen input
/// text. The `Display` impl renders the trace as a visual diagnostic pinned
/// to the offending input line.
#[derive(Debug)]
pub struct ParseError {
    /// The expected parse, if known.
    pub expected: Option<Label>,
    /// The text found at the failure position, if any was read.
    pub found: Option<String>,
    /// The absolute character offset of the failure.
    pub pos: usize,
    /// The 1-based line number of the failure.
    pub line: usize,
    /// The 1-based character column of the failure.
    pub column: usize,
    trace: TraceTree,
    source_text: String,
    source: Option<Box<dyn std::error::Error + 'static>>,
}

impl ParseError {
    /// Constructs a new `ParseError` from an in-flight failure, the parse
    /// trace, and the input text.
    pub fn new(failure: Failure, trace: &TraceTree, source_text: String)
        -> Self
    {
        let (line, column) = line_col(&source_text, failure.pos);
        ParseError {
            expected: failure.expected,
            found: failure.found,
            pos: failure.pos,
            line,
            column,
            trace: trace.collapsed(),
            source_text,
            source: failure.source,
        }
    }

    /// Returns the parse trace, with splice scopes collapsed.
    pub fn trace(&self) -> &TraceTree {
        &self.trace
    }

    /// Returns the input text seen by the parse.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Renders the parse trace as a visual diagnostic.
    pub fn rendered_trace(&self) -> String {
        render_trace(&self.trace, &self.source_text)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error")?;
        if let Some(expected) = &self.expected {
            write!(f, ": expected {}", expected)?;
        }
        if let Some(found) = &self.found {
            write!(f, ", found {:?}", found)?;
        }
        writeln!(f, " at {}:{}", self.line, self.column)?;
        write!(f, "{}", self.rendered_trace())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|src| src.as_ref())
    }
}

/// Returns the 1-based line and character column of the given offset.
fn line_col(text: &str, pos: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for c in text.chars().take(pos) {
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}


////////////////////////////////////////////////////////////////////////////////
// ParseIntegerOverflow
////////////////////////////////////////////////////////////////////////////////
/// An overflow error occurred while parsing an integer.
#[derive(Debug, Clone)]
pub struct ParseIntegerOverflow {
    /// The integer type.
    pub int_type: Cow<'static, str>,
    /// The integer text.
    pub int_text: Cow<'static, str>,
    /// The parsed value.
    pub value: u128,
}

impl std::fmt::Display for ParseIntegerOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "integer value '{}' ({}) does not fit in type {}",
            self.int_text, self.value, self.int_type)
    }
}

impl std::error::Error for ParseIntegerOverflow {}

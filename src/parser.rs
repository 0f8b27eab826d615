////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! The parser value.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::context::Context;
use crate::result::ParseError;
use crate::result::ParseResult;
use crate::result::ParseResultExt as _;
use crate::result::Success;
use crate::source::StringSource;
use crate::source::TextSource;
use crate::span::Span;
use crate::trace::Outcome;
use crate::trace::SpliceMarks;

// External library imports.
use tracing::event;
use tracing::Level;
use tracing::span;

// Standard library imports.
use std::borrow::Cow;
use std::rc::Rc;


////////////////////////////////////////////////////////////////////////////////
// Label
////////////////////////////////////////////////////////////////////////////////
/// A textual identifier attached to a parser for diagnostics.
///
/// Labels are cosmetic: they shape traces and failure messages, never parse
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// A source-like label, rendered as written, e.g. `lit("foo")`.
    Text(Cow<'static, str>),
    /// An opaque token label, rendered in angle brackets, e.g.
    /// `<end-of-text>`.
    Token(Cow<'static, str>),
}

impl Label {
    /// Constructs a source-like label.
    pub fn text<S>(s: S) -> Self
        where S: Into<Cow<'static, str>>
    {
        Label::Text(s.into())
    }

    /// Constructs an opaque token label.
    pub fn token<S>(s: S) -> Self
        where S: Into<Cow<'static, str>>
    {
        Label::Token(s.into())
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Text(s)  => write!(f, "{}", s),
            Label::Token(s) => write!(f, "<{}>", s),
        }
    }
}

impl From<&'static str> for Label {
    fn from(s: &'static str) -> Self {
        Label::Text(s.into())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Text(s.into())
    }
}


////////////////////////////////////////////////////////////////////////////////
// Parser
////////////////////////////////////////////////////////////////////////////////
/// A labeled, reusable parse descriptor producing a value of type `V`.
///
/// A `Parser` pairs a label with an invocation body. Invoking it through
/// [`call`] records a node in the parse trace, runs the body, and stamps the
/// node with the covered span and outcome. Parsers are cheaply cloneable and
/// may be invoked on many inputs; all per-parse state lives in the
/// [`Context`].
///
/// [`call`]: #method.call
/// [`Context`]: ../context/struct.Context.html
pub struct Parser<V>
    where V: 'static
{
    label: Label,
    named: bool,
    splice: SpliceMarks,
    body: Rc<dyn Fn(&mut Context) -> ParseResult<V>>,
}

impl<V> Clone for Parser<V>
    where V: 'static
{
    fn clone(&self) -> Self {
        Parser {
            label: self.label.clone(),
            named: self.named,
            splice: self.splice,
            body: Rc::clone(&self.body),
        }
    }
}

impl<V> std::fmt::Debug for Parser<V>
    where V: 'static
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("label", &self.label)
            .field("named", &self.named)
            .field("splice", &self.splice)
            .finish()
    }
}

impl<V> Parser<V>
    where V: 'static
{
    /// Returns the parser's label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Attaches an explicit label to the parser.
    ///
    /// An explicitly labeled parser chains its label onto failures
    /// propagating out of it, so diagnostics name the outermost intent.
    pub fn named<L>(mut self, label: L) -> Self
        where L: Into<Label>
    {
        self.label = label.into();
        self.named = true;
        self
    }

    /// Marks the parser's trace node as the start of a splice scope.
    pub fn splice_start(mut self) -> Self {
        self.splice.start = true;
        self
    }

    /// Marks the parser's trace node as the end of a splice scope.
    pub fn splice_end(mut self) -> Self {
        self.splice.end = true;
        self
    }

    /// Invokes the parser within the given context, recording a trace node
    /// for the invocation.
    pub fn call(&self, ctx: &mut Context) -> ParseResult<V> {
        let trace_span = span!(Level::TRACE, "call", label = %self.label);
        let _enter = trace_span.enter();

        let node = ctx.enter_node(self.label.clone(), self.splice);
        match (self.body)(ctx) {
            Ok(success) => {
                let end = ctx.pos();
                let start = ctx.exit_node(node, Outcome::Success);
                Ok(Success::new(success.value, Span::new(start, end)))
            },
            Err(failure) => {
                event!(Level::TRACE, "failure: {}", failure);
                let _ = ctx.exit_node_at(node, Outcome::Failure, failure.pos);
                if self.named {
                    Err(failure).source_for(self.label.clone())
                } else {
                    Err(failure)
                }
            },
        }
    }

    /// Constructs a new `Parser` from a label and an invocation body.
    pub fn new<L, F>(label: L, body: F) -> Self
        where
            L: Into<Label>,
            F: Fn(&mut Context) -> ParseResult<V> + 'static
    {
        Parser {
            label: label.into(),
            named: false,
            splice: SpliceMarks::default(),
            body: Rc::new(body),
        }
    }

    /// Returns a parser which applies the given closure to this parser's
    /// result.
    pub fn map<F, U>(self, f: F) -> Parser<U>
        where
            F: Fn(V) -> U + 'static,
            U: 'static
    {
        let label = Label::text(format!("map({})", self.label));
        Parser::new(label, move |ctx| {
            let success = self.call(ctx)?;
            Ok(Success::new((f)(success.value), success.span))
        })
    }

    /// Parses the given text, returning the root parser's value or a
    /// [`ParseError`] carrying the parse trace.
    ///
    /// [`ParseError`]: ../result/struct.ParseError.html
    pub fn parse(&self, text: &str) -> Result<V, ParseError> {
        self.parse_impl(
            Box::new(StringSource::new(text)),
            Some(text.to_string()))
    }

    /// Parses the given character stream, returning the root parser's value
    /// or a [`ParseError`] carrying the parse trace.
    ///
    /// On success the stream is left positioned just past what the root
    /// parser consumed; on failure, at the furthest restoration point
    /// reached.
    ///
    /// [`ParseError`]: ../result/struct.ParseError.html
    pub fn parse_source(&self, source: Box<dyn TextSource>)
        -> Result<V, ParseError>
    {
        self.parse_impl(source, None)
    }

    fn parse_impl(
        &self,
        source: Box<dyn TextSource>,
        full_text: Option<String>)
        -> Result<V, ParseError>
    {
        let trace_span = span!(Level::DEBUG, "parse", label = %self.label);
        let _enter = trace_span.enter();

        let mut ctx = Context::new(source);
        match self.call(&mut ctx) {
            Ok(success) => {
                ctx.close_root(Outcome::Success);
                Ok(success.value)
            },
            Err(failure) => {
                ctx.close_root(Outcome::Failure);
                event!(Level::DEBUG, "parse failed: {}", failure);
                let text = full_text.unwrap_or_else(|| ctx.seen_text());
                Err(ParseError::new(failure, ctx.trace(), text))
            },
        }
    }
}

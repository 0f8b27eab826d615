////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Per-parse state.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::parser::Label;
use crate::result::ParseResult;
use crate::source::BackedSource;
use crate::source::TextSource;
use crate::span::Span;
use crate::trace::NodeId;
use crate::trace::Outcome;
use crate::trace::SpliceMarks;
use crate::trace::TraceTree;


////////////////////////////////////////////////////////////////////////////////
// Context
////////////////////////////////////////////////////////////////////////////////
/// The state of a single top-level parse: the checkpointed input source, the
/// parse trace under construction, and the trace node the next parser
/// invocation will attach under.
///
/// A `Context` is owned by exactly one parse call and discarded (or carried
/// off by the raised failure) when it returns.
#[derive(Debug)]
pub struct Context {
    source: BackedSource,
    tree: TraceTree,
    current: NodeId,
}

impl Context {
    /// Constructs a new `Context` over the given character stream.
    pub fn new(source: Box<dyn TextSource>) -> Self {
        let source = BackedSource::new(source);
        let tree = TraceTree::new(Label::token("parse"), source.pos());
        let current = tree.root();
        Context { source, tree, current }
    }

    /// Returns the checkpointed input source.
    pub fn source(&mut self) -> &mut BackedSource {
        &mut self.source
    }

    /// Returns the current absolute character offset.
    pub fn pos(&self) -> usize {
        self.source.pos()
    }

    /// Returns true if no further character is available.
    pub fn eof(&mut self) -> bool {
        self.source.eof()
    }

    /// Returns the seen characters covered by the given span.
    pub fn seen_slice(&self, span: Span) -> String {
        self.source.seen_slice(span)
    }

    /// Returns every character consumed from the stream at its furthest
    /// extent.
    pub fn seen_text(&self) -> String {
        self.source.seen_text()
    }

    /// Returns the parse trace.
    pub fn trace(&self) -> &TraceTree {
        &self.tree
    }

    /// Runs the given closure under a fresh checkpoint: committed on
    /// success, restored on failure.
    ///
    /// This is the single restoration mechanism of the library; primitives
    /// never rewind what they read on a mismatch.
    pub fn attempt<V, F>(&mut self, f: F) -> ParseResult<V>
        where F: FnOnce(&mut Context) -> ParseResult<V>
    {
        self.source.checkpoint();
        match (f)(self) {
            Ok(success) => {
                self.source.commit();
                Ok(success)
            },
            Err(failure) => {
                self.source.restore();
                Err(failure)
            },
        }
    }

    /// Appends a new pending trace node under the current one and makes it
    /// current.
    pub(crate) fn enter_node(&mut self, label: Label, splice: SpliceMarks)
        -> NodeId
    {
        let id = self.tree.append_child(
            self.current,
            label,
            self.source.pos(),
            splice);
        self.current = id;
        id
    }

    /// Stamps the given trace node with the current position and the given
    /// outcome, and makes its parent current again. Returns the node's start
    /// position.
    pub(crate) fn exit_node(&mut self, id: NodeId, outcome: Outcome)
        -> usize
    {
        let pos = self.source.pos();
        self.exit_node_at(id, outcome, pos)
    }

    /// Stamps the given trace node with the given end position and outcome,
    /// and makes its parent current again. Returns the node's start
    /// position.
    ///
    /// Failed invocations record the position their failure occurred at,
    /// which may precede the furthest position they read to.
    pub(crate) fn exit_node_at(
        &mut self,
        id: NodeId,
        outcome: Outcome,
        pos: usize)
        -> usize
    {
        let (start, parent) = {
            let node = self.tree.node_mut(id);
            node.end = Some(pos);
            node.outcome = outcome;
            (node.start, node.parent)
        };
        self.current = match parent {
            Some(parent) => parent,
            None => self.tree.root(),
        };
        start
    }

    /// Stamps the synthetic root node with its end position and outcome.
    pub(crate) fn close_root(&mut self, outcome: Outcome) {
        let pos = self.source.pos();
        let root = self.tree.root();
        let node = self.tree.node_mut(root);
        node.end = Some(pos);
        node.outcome = outcome;
    }
}

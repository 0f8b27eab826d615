////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Input source test suite.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::source::BackedSource;
use crate::source::StringSource;
use crate::source::TextSource;
use crate::span::Span;


////////////////////////////////////////////////////////////////////////////////
// Span
////////////////////////////////////////////////////////////////////////////////

/// Tests the `Span` width accessors.
#[test]
fn span_len() {
    let span = Span::new(2, 5);
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
    assert!(Span::point(4).is_empty());
}

/// Tests `Span::enclose`.
#[test]
fn span_enclose() {
    let l = Span::new(1, 3);
    let r = Span::new(2, 6);
    assert_eq!(l.enclose(r), Span::new(1, 6));
    assert_eq!(r.enclose(l), Span::new(1, 6));
}


////////////////////////////////////////////////////////////////////////////////
// StringSource
////////////////////////////////////////////////////////////////////////////////

/// Tests `StringSource::read`.
#[test]
fn string_source_read() {
    let mut source = StringSource::new("abcd");
    assert_eq!(source.read(2), "ab");
    assert_eq!(source.pos(), 2);
    assert_eq!(source.read(3), "cd");
    assert_eq!(source.pos(), 4);
    assert_eq!(source.read(1), "");
    assert!(source.eof());
}

/// Tests `StringSource::unget`.
#[test]
fn string_source_unget() {
    let mut source = StringSource::new("abcd");
    assert_eq!(source.read(3), "abc");
    source.unget('c');
    source.unget('b');
    assert_eq!(source.pos(), 1);
    assert_eq!(source.read(3), "bcd");
}


////////////////////////////////////////////////////////////////////////////////
// BackedSource
////////////////////////////////////////////////////////////////////////////////

/// Tests `BackedSource::read` outside any checkpoint.
#[test]
fn backed_source_read_committed() {
    let mut source = BackedSource::new(Box::new(StringSource::new("abcd")));
    assert_eq!(source.read(2), "ab");
    assert_eq!(source.pos(), 2);
    assert_eq!(source.depth(), 0);
}

/// Tests `BackedSource::restore`.
#[test]
fn backed_source_restore() {
    let mut source = BackedSource::new(Box::new(StringSource::new("abcd")));
    assert_eq!(source.read(1), "a");

    source.checkpoint();
    assert_eq!(source.read(2), "bc");
    assert_eq!(source.pos(), 3);
    source.restore();

    assert_eq!(source.pos(), 1);
    assert_eq!(source.read(2), "bc");
}

/// Tests that committed checkpoints merge into their enclosing checkpoint.
#[test]
fn backed_source_nested_commit() {
    let mut source = BackedSource::new(Box::new(StringSource::new("abcdef")));
    assert_eq!(source.read(2), "ab");

    source.checkpoint();
    assert_eq!(source.read(2), "cd");

    source.checkpoint();
    assert_eq!(source.read(1), "e");
    source.commit();
    assert_eq!(source.depth(), 1);

    // The outer checkpoint rewinds past the committed inner region.
    source.restore();
    assert_eq!(source.pos(), 2);
    assert_eq!(source.read(3), "cde");
}

/// Tests that an inner restore affects only the innermost checkpoint.
#[test]
fn backed_source_nested_restore() {
    let mut source = BackedSource::new(Box::new(StringSource::new("abcdef")));
    source.checkpoint();
    assert_eq!(source.read(2), "ab");

    source.checkpoint();
    assert_eq!(source.read(2), "cd");
    source.restore();
    assert_eq!(source.pos(), 2);

    source.restore();
    assert_eq!(source.pos(), 0);
}

/// Tests `BackedSource::unget_str`.
#[test]
fn backed_source_unget_str() {
    let mut source = BackedSource::new(Box::new(StringSource::new("abcd")));
    source.checkpoint();
    assert_eq!(source.read(3), "abc");
    source.unget_str("bc");
    assert_eq!(source.pos(), 1);
    assert_eq!(source.read(2), "bc");

    source.restore();
    assert_eq!(source.pos(), 0);
}

/// Tests that the seen cache records each offset once across restores.
#[test]
fn backed_source_seen() {
    let mut source = BackedSource::new(Box::new(StringSource::new("abcdef")));
    assert_eq!(source.read(1), "a");

    source.checkpoint();
    assert_eq!(source.read(3), "bcd");
    source.restore();
    assert_eq!(source.read(2), "bc");

    assert_eq!(source.seen_text(), "abcd");
    assert_eq!(source.seen_slice(Span::new(1, 3)), "bc");
}

/// Tests `BackedSource::eof`.
#[test]
fn backed_source_eof() {
    let mut source = BackedSource::new(Box::new(StringSource::new("ab")));
    assert!(!source.eof());
    assert_eq!(source.read(2), "ab");
    assert!(source.eof());
}

////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Scoria test suite module.
////////////////////////////////////////////////////////////////////////////////

mod primitive_suite;
mod setup_suite;
mod source_suite;

// Local imports.
use crate::context::Context;
use crate::source::StringSource;

/// Returns a parse context over the given text.
fn context_of(text: &str) -> Context {
    Context::new(Box::new(StringSource::new(text)))
}

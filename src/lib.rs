////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Scoria library modules.
//!
//! Scoria is a backtracking parser combinator library. Parsers are labeled,
//! reusable descriptors which consume characters from a checkpointed input
//! stream and record every invocation in a parse trace. A failed parse
//! surfaces the trace as a visual diagnostic pinned to the offending input
//! line.
////////////////////////////////////////////////////////////////////////////////
#![warn(anonymous_parameters)]
#![warn(bad_style)]
#![warn(bare_trait_objects)]
#![warn(dead_code)]
#![warn(elided_lifetimes_in_paths)]
#![warn(improper_ctypes)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(no_mangle_generic_items)]
#![warn(non_shorthand_field_patterns)]
#![warn(nonstandard_style)]
#![warn(overflowing_literals)]
#![warn(path_statements)]
#![warn(patterns_in_fns_without_body)]
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unconditional_recursion)]
#![warn(unreachable_pub)]
#![warn(unused)]
#![warn(unused_allocation)]
#![warn(unused_comparisons)]
#![warn(unused_parens)]
#![warn(unused_qualifications)]
#![warn(variant_size_differences)]
#![warn(while_true)]

// Internal modules.
#[cfg(test)]
mod test;

// Public modules.
pub mod combinator;
pub mod common;
pub mod context;
pub mod define;
pub mod parser;
pub mod primitive;
pub mod result;
pub mod setup;
pub mod source;
pub mod span;
pub mod trace;

// Exports.
pub use combinator::*;
pub use common::*;
pub use context::Context;
pub use parser::Label;
pub use parser::Parser;
pub use primitive::*;
pub use result::Failure;
pub use result::ParseError;
pub use result::ParseIntegerOverflow;
pub use result::ParseResult;
pub use result::ParseResultExt;
pub use result::Success;
pub use source::BackedSource;
pub use source::StringSource;
pub use source::TextSource;
pub use span::Span;
pub use trace::TraceTree;

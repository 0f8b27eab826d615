////////////////////////////////////////////////////////////////////////////////
// Scoria parser library
////////////////////////////////////////////////////////////////////////////////
// Copyright 2020 Skylor R. Schermer
// This code is dual licenced using the MIT or Apache 2 license.
// See licence-mit.md and licence-apache.md for details.
////////////////////////////////////////////////////////////////////////////////
//! Combinator definition support.
////////////////////////////////////////////////////////////////////////////////

// Local imports.
use crate::parser::Label;
use crate::parser::Parser;


////////////////////////////////////////////////////////////////////////////////
// ArgLabel
////////////////////////////////////////////////////////////////////////////////
/// A combinator argument which can contribute to a reconstructed call label.
///
/// Parsers contribute their own labels; literal values contribute a
/// canonical rendering.
pub trait ArgLabel {
    /// Returns the label contribution of the argument.
    fn arg_label(&self) -> Label;
}

impl<V> ArgLabel for Parser<V>
    where V: 'static
{
    fn arg_label(&self) -> Label {
        self.label().clone()
    }
}

impl ArgLabel for &str {
    fn arg_label(&self) -> Label {
        Label::text(format!("{:?}", self))
    }
}

impl ArgLabel for String {
    fn arg_label(&self) -> Label {
        Label::text(format!("{:?}", self))
    }
}

impl ArgLabel for char {
    fn arg_label(&self) -> Label {
        Label::text(format!("{:?}", self))
    }
}

impl ArgLabel for bool {
    fn arg_label(&self) -> Label {
        Label::text(format!("{}", self))
    }
}

impl ArgLabel for usize {
    fn arg_label(&self) -> Label {
        Label::text(format!("{}", self))
    }
}

impl ArgLabel for u32 {
    fn arg_label(&self) -> Label {
        Label::text(format!("{}", self))
    }
}

impl ArgLabel for u64 {
    fn arg_label(&self) -> Label {
        Label::text(format!("{}", self))
    }
}

impl ArgLabel for i32 {
    fn arg_label(&self) -> Label {
        Label::text(format!("{}", self))
    }
}

impl ArgLabel for i64 {
    fn arg_label(&self) -> Label {
        Label::text(format!("{}", self))
    }
}

impl<T> ArgLabel for Option<T>
    where T: ArgLabel
{
    fn arg_label(&self) -> Label {
        match self {
            Some(inner) => Label::text(
                format!("Some({})", inner.arg_label())),
            None => Label::text("None"),
        }
    }
}


////////////////////////////////////////////////////////////////////////////////
// Call labels.
////////////////////////////////////////////////////////////////////////////////

/// Reconstructs a call-site-like label from a combinator name and its
/// argument labels, e.g. `bracket(lit("<"), uint("u32"), lit(">"))`.
pub fn call_label(name: &str, args: &[Label]) -> Label {
    let mut out = String::from(name);
    out.push('(');
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(&arg.to_string());
    }
    out.push(')');
    Label::text(out)
}

/// Wraps the given parser in a fresh parser explicitly labeled with the
/// given call label. Both the wrapper and the inner parser appear in the
/// trace.
pub fn wrap_call<V>(label: Label, inner: Parser<V>) -> Parser<V>
    where V: 'static
{
    Parser::new(label.clone(), move |ctx| inner.call(ctx)).named(label)
}

/// Overwrites the given parser's label with the given call label, without
/// introducing a new trace node.
pub fn relabel_call<V>(label: Label, inner: Parser<V>) -> Parser<V>
    where V: 'static
{
    inner.named(label)
}


////////////////////////////////////////////////////////////////////////////////
// combinator!
////////////////////////////////////////////////////////////////////////////////

/// Declares a named combinator function whose returned parser carries a
/// label reconstructed from the call site, e.g. `name(arg, arg)`.
///
/// By default the body-built parser is wrapped in a fresh named node, so
/// both labels appear in the trace. With a leading `@nowrap`, the body-built
/// parser's own label is overwritten instead and no extra node is
/// introduced.
#[macro_export]
macro_rules! combinator {
    (@nowrap
        $(#[$attr:meta])*
        $vis:vis fn $name:ident ( $($arg:ident : $ty:ty),* $(,)? ) -> $out:ty
        $body:block
    ) => {
        $(#[$attr])*
        $vis fn $name($($arg: $ty),*) -> $out {
            let call = $crate::define::call_label(
                stringify!($name),
                &[$($crate::define::ArgLabel::arg_label(&$arg)),*]);
            let inner = $body;
            $crate::define::relabel_call(call, inner)
        }
    };
    (
        $(#[$attr:meta])*
        $vis:vis fn $name:ident ( $($arg:ident : $ty:ty),* $(,)? ) -> $out:ty
        $body:block
    ) => {
        $(#[$attr])*
        $vis fn $name($($arg: $ty),*) -> $out {
            let call = $crate::define::call_label(
                stringify!($name),
                &[$($crate::define::ArgLabel::arg_label(&$arg)),*]);
            let inner = $body;
            $crate::define::wrap_call(call, inner)
        }
    };
}

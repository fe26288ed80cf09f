//! The compiler for the `Aggregate!`, `Tuple!`, and `Variant!` macros of the vitta crate.
//!
//! A macro invocation is parsed into an [`Invocation`]: the [`Kind`] of container being
//! aggregated, and a list of [`Syntax`] tokens. [`Invocation::compile`] classifies each token as
//! plain or as an instance of the container (splicing nested invocations of the same macro in
//! place), and produces a [`Target`], which renders as the type-level aggregation in vitta.

use {proc_macro2::Span, std::ops, syn::Error};

pub mod parse;
mod syntax;
mod target;

pub use syntax::{Invocation, Kind, Syntax};
pub use target::{Target, Token};

/// The largest number of tokens a single invocation may aggregate, after nested invocations are
/// spliced in. This is the largest tuple for which vitta implements its tuple conversions.
pub const MAX_TOKENS: usize = 128;

/// A shim for associating a [`Span`] with some piece of syntax, so that errors may be reported at
/// the right place.
#[derive(Debug, Clone, Copy)]
pub struct Spanned<T> {
    /// The inner value.
    pub inner: T,
    /// The span of the syntax the inner value came from.
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Associate a span with some value.
    pub fn new(inner: T, span: Span) -> Self {
        Spanned { inner, span }
    }
}

impl<T> From<T> for Spanned<T> {
    fn from(inner: T) -> Self {
        Spanned {
            inner,
            span: Span::call_site(),
        }
    }
}

impl<T> ops::Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> ops::DerefMut for Spanned<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

/// The errors the compiler can report about an invocation, beyond those of parsing it.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("expected at least one type to aggregate")]
    NoTokens,
    #[error("found {0} tokens, but at most {max} can be aggregated at once; group some of them into instances", max = MAX_TOKENS)]
    TooManyTokens(usize),
    #[error("expected only type arguments to `{0}`")]
    NonTypeArgument(String),
}

impl From<Spanned<CompileError>> for Error {
    fn from(error: Spanned<CompileError>) -> Self {
        Error::new(error.span, error.inner.to_string())
    }
}

/// Combine a list of errors into a single error reporting all of them, if there are any.
pub(crate) fn combine(errors: Vec<Error>) -> Option<Error> {
    let mut maybe_error: Option<Error> = None;
    for new_error in errors {
        match maybe_error.as_mut() {
            None => maybe_error = Some(new_error),
            Some(accumulated_errors) => accumulated_errors.combine(new_error),
        }
    }
    maybe_error
}

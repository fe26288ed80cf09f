//! The parser for the surface syntax of the `Aggregate!`, `Tuple!`, and `Variant!` macros.

use syn::{
    parse::{Parse, ParseStream, Result},
    spanned::Spanned as _,
    Path, Token, Type,
};

use crate::{
    syntax::{Invocation, Kind, Syntax},
    Spanned,
};

impl Parse for Syntax {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Token![..]) {
            // Syntax::Splice: ..<type>
            input.parse::<Token![..]>()?;
            Ok(Syntax::Splice(input.parse::<Type>()?))
        } else {
            // Syntax::Type: <type>
            Ok(Syntax::Type(input.parse::<Type>()?))
        }
    }
}

impl Parse for Spanned<Syntax> {
    fn parse(input: ParseStream) -> Result<Self> {
        let span = input.span();
        let syntax = input.parse::<Syntax>()?;
        Ok(Spanned::new(syntax, span))
    }
}

impl Invocation {
    /// Parse the comma-separated tokens of an invocation aggregating into the given kind of
    /// container. A trailing comma is allowed.
    pub fn parse_body(kind: Kind, input: ParseStream) -> Result<Self> {
        let span = input.span();
        let tokens = input
            .parse_terminated::<Spanned<Syntax>, Token![,]>(Spanned::<Syntax>::parse)?
            .into_iter()
            .collect();
        Ok(Invocation { kind, tokens, span })
    }

    /// Parse the tokens of a `Tuple!` invocation.
    pub fn parse_tuple(input: ParseStream) -> Result<Self> {
        Invocation::parse_body(Kind::Tuple, input)
    }

    /// Parse the tokens of a `Variant!` invocation.
    pub fn parse_variant(input: ParseStream) -> Result<Self> {
        Invocation::parse_body(Kind::Variant, input)
    }
}

/// An `Aggregate!` invocation: the path of the container, then a semicolon, then the tokens.
impl Parse for Invocation {
    fn parse(input: ParseStream) -> Result<Self> {
        let path = input.call(Path::parse_mod_style)?;
        let span = path.span();
        input.parse::<Token![;]>()?;
        let invocation = Invocation::parse_body(Kind::Family(path), input)?;
        Ok(Invocation {
            span: span.join(invocation.span).unwrap_or(span),
            ..invocation
        })
    }
}

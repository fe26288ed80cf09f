//! The target language of the aggregation macros, produced by the compiler.

use {
    lazy_static::lazy_static,
    proc_macro2::{Span, TokenStream},
    proc_macro_crate::FoundCrate,
    quote::{quote_spanned, ToTokens},
    std::fmt,
    syn::{Ident, Type},
};

use crate::{syntax::Kind, Spanned};

/// A compiled token: either a plain type, which becomes a single element, or an instance of the
/// container, whose elements are spliced.
#[derive(Clone, Debug)]
pub enum Token {
    /// Type-level token: `Just<T>`.
    Plain(Type),
    /// Type-level token: the instance itself.
    Splice(Type),
}

/// The target language of the macros: a type-level aggregation in vitta.
///
/// This is a one-to-one mapping to the literal syntax you would write without the macros, namely
/// `<(Token, ...) as Aggregate<Family>>::Output`, with every token already classified and every
/// nested invocation already spliced into a single flat list.
#[derive(Clone, Debug)]
pub struct Target {
    /// The kind of container being aggregated into.
    pub kind: Kind,
    /// The flattened tokens, in order.
    pub tokens: Vec<Spanned<Token>>,
    /// The span of the whole invocation.
    pub span: Span,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Plain(ty) => write!(f, "Just<{}>", ty.to_token_stream()),
            Token::Splice(ty) => write!(f, "{}", ty.to_token_stream()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Kind::Tuple => write!(f, "Tuples"),
            Kind::Variant => write!(f, "Variants"),
            Kind::Family(path) => write!(f, "<{}<()> as Instance>::Family", path.to_token_stream()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let count = self.tokens.len();
        write!(f, "<(")?;
        for (i, token) in self.tokens.iter().enumerate() {
            write!(f, "{}", token.inner)?;
            if i + 1 < count {
                write!(f, ", ")?;
            }
        }
        if count == 1 {
            write!(f, ",")?;
        }
        write!(f, ") as Aggregate<{}>>::Output", self.kind)
    }
}

lazy_static! {
    static ref CRATE_NAME: String = match proc_macro_crate::crate_name("vitta") {
        Ok(FoundCrate::Name(name)) => name,
        Ok(FoundCrate::Itself) | Err(_) => "vitta".to_owned(),
    };
}

fn crate_ident(span: Span) -> Ident {
    Ident::new(&**CRATE_NAME, span)
}

impl ToTokens for Spanned<Token> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        // Each token gets the span of where it was written, so that unsatisfied bounds on any one
        // token are reported there
        let span = self.span;
        let vitta_crate = crate_ident(span);
        match &self.inner {
            Token::Plain(ty) => quote_spanned!(span=> #vitta_crate::Just<#ty>).to_tokens(tokens),
            Token::Splice(ty) => quote_spanned!(span=> #ty).to_tokens(tokens),
        }
    }
}

impl ToTokens for Target {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let span = self.span;
        let vitta_crate = crate_ident(span);
        let family = match &self.kind {
            Kind::Tuple => quote_spanned!(span=> #vitta_crate::families::Tuples),
            Kind::Variant => quote_spanned!(span=> #vitta_crate::families::Variants),
            Kind::Family(path) => {
                quote_spanned!(span=> <#path<()> as #vitta_crate::Instance>::Family)
            }
        };
        let elements = &self.tokens;
        quote_spanned!(span=> <(#(#elements,)*) as #vitta_crate::Aggregate<#family>>::Output)
            .to_tokens(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn target(kind: Kind, tokens: Vec<Token>) -> Target {
        Target {
            kind,
            tokens: tokens.into_iter().map(Spanned::from).collect(),
            span: Span::call_site(),
        }
    }

    fn ty(s: &str) -> Type {
        syn::parse_str(s).unwrap()
    }

    #[test]
    fn display_single_token() {
        let t = target(Kind::Tuple, vec![Token::Plain(ty("A"))]);
        assert_eq!(t.to_string(), "<(Just<A>,) as Aggregate<Tuples>>::Output");
    }

    #[test]
    fn display_many_tokens() {
        let t = target(
            Kind::Variant,
            vec![Token::Plain(ty("A")), Token::Splice(ty("B")), Token::Plain(ty("C"))],
        );
        assert_eq!(
            t.to_string(),
            "<(Just<A>, B, Just<C>) as Aggregate<Variants>>::Output"
        );
    }

    #[test]
    fn display_family() {
        let t = target(
            Kind::Family(syn::parse_str("Test").unwrap()),
            vec![Token::Splice(ty("Row"))],
        );
        assert_eq!(
            t.to_string(),
            "<(Row,) as Aggregate<<Test<()> as Instance>::Family>>::Output"
        );
    }

    #[test]
    fn tokens_are_qualified() {
        let t = target(Kind::Tuple, vec![Token::Plain(ty("A")), Token::Splice(ty("B"))]);
        assert_eq!(
            t.to_token_stream().to_string(),
            quote!(<(vitta::Just<A>, B,) as vitta::Aggregate<vitta::families::Tuples>>::Output)
                .to_string()
        );
    }
}

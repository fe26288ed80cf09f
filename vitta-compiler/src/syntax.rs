use {
    proc_macro2::Span,
    quote::ToTokens,
    syn::{
        parse::{ParseStream, Parser},
        punctuated::Punctuated,
        spanned::Spanned as _,
        visit_mut::{self, VisitMut},
        Error, GenericArgument, Ident, Macro, Path, PathArguments, Type, TypeGroup, TypeParen,
        TypePath, TypeTuple,
    },
};

use crate::{
    target::{Target, Token},
    CompileError, Spanned, MAX_TOKENS,
};

/// The container an invocation aggregates into, which determines which tokens are written as its
/// instances.
#[derive(Debug, Clone)]
pub enum Kind {
    /// `Tuple!`: instances are written as tuple types, like `(A, B)`.
    Tuple,
    /// `Variant!`: instances are written as `Union<A, ...>`, or as nested `Variant![...]`s.
    Variant,
    /// `Aggregate![Container; ...]`: instances are written as `Container<A, B>`, which is sugar for
    /// the actual `Container<(A, B)>`.
    Family(Path),
}

impl Kind {
    /// The name of the macro which aggregates into this kind of container.
    pub fn macro_name(&self) -> &'static str {
        match self {
            Kind::Tuple => "Tuple",
            Kind::Variant => "Variant",
            Kind::Family(_) => "Aggregate",
        }
    }

    fn container(&self) -> Option<&Ident> {
        match self {
            Kind::Family(path) => path.segments.last().map(|segment| &segment.ident),
            _ => None,
        }
    }

    /// Whether this is the same kind of container as another, for the purposes of splicing a
    /// nested invocation.
    fn same_as(&self, other: &Kind) -> bool {
        match (self, other) {
            (Kind::Tuple, Kind::Tuple) | (Kind::Variant, Kind::Variant) => true,
            (Kind::Family(this), Kind::Family(that)) => {
                this.to_token_stream().to_string() == that.to_token_stream().to_string()
            }
            _ => false,
        }
    }

    /// Whether the type is written literally as an instance of this kind of container.
    fn is_instance(&self, ty: &Type) -> bool {
        match (self, ty) {
            (Kind::Tuple, Type::Tuple(_)) => true,
            (Kind::Variant, Type::Path(TypePath { qself: None, path })) => path
                .segments
                .last()
                .map_or(false, |segment| segment.ident == "Union"),
            (Kind::Family(_), Type::Path(TypePath { qself: None, path })) => {
                path.segments.last().map(|segment| &segment.ident) == self.container()
            }
            _ => false,
        }
    }

    /// Rewrite every occurrence of the container's variadic sugar within the type into the actual
    /// single-parameter form. Only user families have such sugar; other types are left unchanged.
    fn desugar(&self, ty: &Type, errors: &mut Vec<Error>) -> Type {
        let mut ty = ty.clone();
        if let Some(container) = self.container() {
            Desugar { container, errors }.visit_type_mut(&mut ty);
        }
        ty
    }
}

/// Rewrites `Container<A, B>` to `Container<(A, B)>`, `Container<A>` to `Container<(A,)>`, and
/// `Container<>` to `Container<()>`, wherever they occur. A container whose only argument is a
/// tuple type, like `Container<(A, B)>`, is left as written.
struct Desugar<'a> {
    container: &'a Ident,
    errors: &'a mut Vec<Error>,
}

impl VisitMut for Desugar<'_> {
    fn visit_type_path_mut(&mut self, node: &mut TypePath) {
        // Rewrite inside-out, so nested sugar is rewritten exactly once
        visit_mut::visit_type_path_mut(self, node);

        if node.qself.is_some() {
            return;
        }
        let segment = match node.path.segments.last_mut() {
            Some(segment) if segment.ident == *self.container => segment,
            _ => return,
        };
        if let PathArguments::AngleBracketed(arguments) = &mut segment.arguments {
            // A single tuple argument is already the actual form
            let mut args = arguments.args.iter();
            if let (Some(GenericArgument::Type(Type::Tuple(_))), None) = (args.next(), args.next()) {
                return;
            }
            let mut elems = Punctuated::new();
            for argument in &arguments.args {
                match argument {
                    GenericArgument::Type(ty) => elems.push(ty.clone()),
                    other => self.errors.push(
                        Spanned::new(
                            CompileError::NonTypeArgument(self.container.to_string()),
                            other.span(),
                        )
                        .into(),
                    ),
                }
            }
            if elems.len() == 1 {
                elems.push_punct(Default::default());
            }
            let tuple = Type::Tuple(TypeTuple {
                paren_token: Default::default(),
                elems,
            });
            arguments.args = std::iter::once(GenericArgument::Type(tuple)).collect();
        }
    }
}

/// A parsed macro invocation: the kind of container to aggregate into, and the tokens to
/// aggregate, in order.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub kind: Kind,
    pub tokens: Vec<Spanned<Syntax>>,
    pub span: Span,
}

/// The surface syntax of a single token.
#[derive(Debug, Clone)]
pub enum Syntax {
    /// A type, which is classified as plain or as an instance by how it is written.
    Type(Type),
    /// `..T`: a type which is always spliced, whether or not it is written as an instance.
    Splice(Type),
}

impl Invocation {
    /// Compile this invocation, classifying every token and splicing nested invocations of the
    /// same container, or report every error found in doing so.
    pub fn compile(&self) -> Result<Target, Error> {
        let mut errors = Vec::new();
        let mut tokens = Vec::new();
        self.flatten_into(&mut tokens, &mut errors);

        if tokens.len() > MAX_TOKENS {
            errors.push(Spanned::new(CompileError::TooManyTokens(tokens.len()), self.span).into());
        }

        match crate::combine(errors) {
            Some(error) => Err(error),
            None => Ok(Target {
                kind: self.kind.clone(),
                tokens,
                span: self.span,
            }),
        }
    }

    fn flatten_into(&self, tokens: &mut Vec<Spanned<Token>>, errors: &mut Vec<Error>) {
        if self.tokens.is_empty() {
            errors.push(Spanned::new(CompileError::NoTokens, self.span).into());
        }

        for token in &self.tokens {
            match &token.inner {
                Syntax::Splice(ty) => {
                    let ty = self.kind.desugar(ty, errors);
                    tokens.push(Spanned::new(Token::Splice(ty), token.span));
                }
                Syntax::Type(ty) => self.classify(ty, token.span, tokens, errors),
            }
        }
    }

    fn classify(
        &self,
        ty: &Type,
        span: Span,
        tokens: &mut Vec<Spanned<Token>>,
        errors: &mut Vec<Error>,
    ) {
        match ty {
            // Parentheses and invisible groups don't change what a type is written as
            Type::Paren(TypeParen { elem, .. }) | Type::Group(TypeGroup { elem, .. }) => {
                self.classify(elem, span, tokens, errors)
            }
            Type::Macro(type_macro) => match self.nested(&type_macro.mac) {
                Some(Ok(nested)) => nested.flatten_into(tokens, errors),
                Some(Err(error)) => errors.push(error),
                None => tokens.push(Spanned::new(Token::Plain(ty.clone()), span)),
            },
            _ if self.kind.is_instance(ty) => {
                let ty = self.kind.desugar(ty, errors);
                tokens.push(Spanned::new(Token::Splice(ty), span));
            }
            _ => {
                let ty = self.kind.desugar(ty, errors);
                tokens.push(Spanned::new(Token::Plain(ty), span));
            }
        }
    }

    /// Parse a macro in token position as a nested invocation, if it is an invocation of the same
    /// macro for the same container. Any other macro is a plain type.
    fn nested(&self, mac: &Macro) -> Option<Result<Invocation, Error>> {
        let name = &mac.path.segments.last()?.ident;
        if name != self.kind.macro_name() {
            return None;
        }

        let span = mac.path.span();
        let parsed = match &self.kind {
            Kind::Family(_) => syn::parse2::<Invocation>(mac.tokens.clone()),
            kind => {
                let kind = kind.clone();
                (move |input: ParseStream| Invocation::parse_body(kind, input))
                    .parse2(mac.tokens.clone())
            }
        };

        match parsed {
            Ok(nested) if nested.kind.same_as(&self.kind) => Some(Ok(Invocation { span, ..nested })),
            Ok(_) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

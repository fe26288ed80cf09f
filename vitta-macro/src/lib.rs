extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::TokenStream as TokenStream2,
    quote::{format_ident, quote, ToTokens},
    syn::{parse_macro_input, Ident, LitInt},
    vitta_compiler::Invocation,
};

/// Aggregate a list of types and instances of a user-declared family into one instance of that
/// family.
///
/// The first argument is the path of the container type, followed by a semicolon and then the
/// tokens to aggregate. An instance of the container among the tokens is spliced rather than
/// nested. Instances may be written in the variadic form `Container<A, B>`, which is rewritten
/// to the actual `Container<(A, B)>` wherever it occurs. An instance already written in the actual
/// form, with a single tuple argument, is left as it is; so a container of one tuple element is
/// written `Container<((A, B),)>`. Any token can be spliced explicitly by writing it as `..T`, and
/// a nested `Aggregate!` for the same container is spliced as well.
///
/// The container must have been declared as a family with the `family!` macro.
///
/// Instances are recognized by the last segment of their path alone, so a different type with the
/// same name as the container, from another module, is treated as an instance too. To aggregate
/// such a type as a single element, name it with a type synonym.
///
/// # Examples
///
/// ```
/// use std::marker::PhantomData;
/// use static_assertions::assert_type_eq_all;
/// use vitta::{family, Aggregate};
///
/// pub struct Row<T>(PhantomData<T>);
/// family!(pub Rows for Row);
///
/// type Key = Row<(u8, u16)>;
///
/// assert_type_eq_all!(
///     Aggregate![Row; u8, Row<u16, u32>, u64],
///     Aggregate![Row; Row<(u8, u16)>, Row<(u32, u64)>],
///     Aggregate![Row; ..Key, Aggregate![Row; u32, u64]],
///     Row<(u8, u16, u32, u64)>,
/// );
/// assert_type_eq_all!(Aggregate![Row; Row<((u8, u16),)>], Row<((u8, u16),)>);
/// ```
#[proc_macro]
#[allow(non_snake_case)]
pub fn Aggregate(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as Invocation);
    compile(invocation)
}

/// Aggregate a list of types and tuples into one flat tuple.
///
/// A token written as a tuple type, including the unit type `()`, is spliced: each of its elements
/// becomes an element of the result, in order. Every other token becomes a single element. To splice
/// a tuple that is named by a type synonym, write it as `..T`. A nested `Tuple!` is spliced as well.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use vitta::Tuple;
///
/// type Pair = (bool, char);
///
/// assert_type_eq_all!(Tuple![i32], (i32,));
/// assert_type_eq_all!(Tuple![i32, (bool, char), ()], (i32, bool, char));
/// assert_type_eq_all!(Tuple![i32, ..Pair], Tuple![i32, Tuple![bool, char]]);
/// assert_type_eq_all!(Tuple![i32, Pair], (i32, (bool, char)));
/// ```
///
/// At least one token is required:
///
/// ```compile_fail
/// type Nothing = vitta::Tuple![];
/// ```
#[proc_macro]
#[allow(non_snake_case)]
pub fn Tuple(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input with Invocation::parse_tuple);
    compile(invocation)
}

/// Aggregate a list of types and sum types into one flat sum type, a
/// [`Union`](../vitta/families/enum.Union.html) of every alternative.
///
/// A token written as a `Union<...>` type, or as a nested `Variant!`, is spliced: each of its
/// alternatives becomes an alternative of the result, in order. Every other token, tuples
/// included, becomes a single alternative. Alternatives are never deduplicated. A synonym for a
/// sum type is a single alternative unless it is written `..T`.
///
/// Sum types are recognized by the last segment of their path alone, so any other type named
/// `Union` is spliced as well. To use such a type as a single alternative, name it with a type
/// synonym.
///
/// # Examples
///
/// ```
/// use static_assertions::assert_type_eq_all;
/// use vitta::{families::{Union, Void}, Variant};
///
/// type Number = Variant![u8, u16];
///
/// assert_type_eq_all!(Variant![i32], Union<i32, Void>);
/// assert_type_eq_all!(
///     Variant![i32, ..Number, Variant![u8]],
///     Union<i32, Union<u8, Union<u16, Union<u8, Void>>>>,
/// );
/// ```
///
/// Aggregating nothing would be a sum of no alternatives, which is rejected:
///
/// ```compile_fail
/// type Nothing = vitta::Variant![];
/// ```
#[proc_macro]
#[allow(non_snake_case)]
pub fn Variant(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input with Invocation::parse_variant);
    compile(invocation)
}

fn compile(invocation: Invocation) -> TokenStream {
    match invocation.compile() {
        Ok(target) => target.into_token_stream().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn type_params(n: usize) -> Vec<Ident> {
    (0..n).map(|i| format_ident!("T{}", i)).collect()
}

/// The inductive list `(T0, (T1, ... ()))` holding the given parameters.
fn cons_list(params: &[Ident]) -> TokenStream2 {
    params
        .iter()
        .rev()
        .fold(quote!(()), |rest, param| quote!((#param, #rest)))
}

fn parse_max(input: TokenStream) -> syn::Result<usize> {
    syn::parse::<LitInt>(input)?.base10_parse()
}

/// Implement `Tuple` and `List` for all tuples of sizes from zero up to and including the given
/// literal, in a module which has both traits in scope.
#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = match parse_max(input) {
        Ok(max) => max,
        Err(error) => return error.to_compile_error().into(),
    };

    let mut impls = TokenStream2::new();
    for n in 0..=max {
        let params = type_params(n);
        let list = cons_list(&params);
        quote! {
            impl<#(#params),*> Tuple for (#(#params,)*) {
                type AsList = #list;
            }

            impl<#(#params),*> List for #list {
                type AsTuple = (#(#params,)*);
            }
        }
        .to_tokens(&mut impls);
    }
    impls.into()
}

/// Make every tuple of sizes from zero up to and including the given literal a token and an
/// instance of the `Tuples` family, in a module which has `Token`, `Instance`, and `Tuples` in
/// scope.
#[doc(hidden)]
#[proc_macro]
pub fn impl_tuple_tokens(input: TokenStream) -> TokenStream {
    let max = match parse_max(input) {
        Ok(max) => max,
        Err(error) => return error.to_compile_error().into(),
    };

    let mut impls = TokenStream2::new();
    for n in 0..=max {
        let params = type_params(n);
        let list = cons_list(&params);
        quote! {
            impl<#(#params),*> Token<Tuples> for (#(#params,)*) {
                type Elements = #list;
            }

            impl<#(#params),*> Instance for (#(#params,)*) {
                type Family = Tuples;
            }
        }
        .to_tokens(&mut impls);
    }
    impls.into()
}

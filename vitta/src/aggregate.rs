//! The aggregation of a sequence of tokens into a single, flat instance of a family.

use crate::{
    family::{Apply, Family, Token},
    tuple::{Concat, Tuple},
};

/// Aggregate a tuple of [`Token`]s into one instance of the family `F`, holding the elements
/// contributed by every token in order.
///
/// A plain type `T` must be written as [`Just<T>`](crate::Just), and contributes itself. An
/// instance of `F` contributes all of its elements, spliced in place: aggregating never nests one
/// instance of `F` inside another unless asked to with [`Just`](crate::Just).
///
/// The first token seeds the aggregate, and every following token extends it in turn. When the
/// tokens are exhausted, the accumulated elements are [`Apply`]ed to `F`. The result is the same
/// however the elements are grouped into tokens:
///
/// ```
/// use vitta::{families::Tuples, Aggregated, Just};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     Aggregated<Tuples, (Just<u8>, Just<u16>, Just<u32>)>,
///     Aggregated<Tuples, ((u8, u16), Just<u32>)>,
///     Aggregated<Tuples, (Just<u8>, (u16,), (u32,))>,
///     Aggregated<Tuples, ((u8, u16, u32),)>,
///     (u8, u16, u32),
/// );
/// ```
///
/// # Errors
///
/// Aggregation is all-or-nothing: a token list which can't be aggregated fails to type check.
///
/// There must be at least one token:
///
/// ```compile_fail
/// # use vitta::{families::Tuples, Aggregated};
/// type Nothing = Aggregated<Tuples, ()>;
/// let _: Nothing = ();
/// ```
///
/// Plain types must be marked with [`Just`](crate::Just):
///
/// ```compile_fail
/// # use vitta::{families::Tuples, Aggregated};
/// type Unmarked = Aggregated<Tuples, (u8,)>;
/// let _: Unmarked = (0u8,);
/// ```
///
/// An instance of a different family can't be spliced, only embedded with
/// [`Just`](crate::Just):
///
/// ```compile_fail
/// # use vitta::{families::{Union, Variants, Void}, Aggregated, Just};
/// fn spliced(_: Aggregated<Variants, (Just<u8>, (u16, u32))>) {}
/// ```
///
/// ```
/// # use vitta::{families::{Union, Variants, Void}, Aggregated, Just};
/// fn embedded(_: Aggregated<Variants, (Just<u8>, Just<(u16, u32)>)>) {}
/// ```
pub trait Aggregate<F: Family>: Tuple {
    /// The aggregated instance of `F`.
    type Output;
}

impl<F: Family, Tokens: Tuple> Aggregate<F> for Tokens
where
    Tokens::AsList: Seed<F>,
{
    type Output = <Tokens::AsList as Seed<F>>::Output;
}

/// The instance of `F` aggregated from the tuple of tokens `Tokens`.
///
/// This is shorthand for `<Tokens as Aggregate<F>>::Output`.
pub type Aggregated<F, Tokens> = <Tokens as Aggregate<F>>::Output;

/// Start an aggregation from the first token of a non-empty inductive list of tokens.
///
/// The accumulator is initialized to the elements of the first token: `T` alone for `Just<T>`, or
/// all of `Ts` for an instance of `F` holding `Ts`.
pub trait Seed<F: Family> {
    /// The aggregated instance of `F`.
    type Output;
}

impl<F: Family, First: Token<F>, Rest> Seed<F> for (First, Rest)
where
    Rest: AggregateOnto<F, First::Elements>,
{
    type Output = <Rest as AggregateOnto<F, First::Elements>>::Output;
}

/// Continue an aggregation by appending the elements of each token in this inductive list to the
/// accumulated elements `Acc`, one token at a time.
///
/// Once no tokens remain, the accumulated elements are applied to `F`. Each step consumes exactly
/// one token, so an aggregation of `N` tokens after the first completes in `N` steps.
pub trait AggregateOnto<F: Family, Acc> {
    /// The aggregated instance of `F`.
    type Output;
}

impl<F: Apply<Acc>, Acc> AggregateOnto<F, Acc> for () {
    type Output = F::Applied;
}

impl<F: Family, Acc, Next: Token<F>, Rest> AggregateOnto<F, Acc> for (Next, Rest)
where
    Acc: Concat<Next::Elements>,
    Rest: AggregateOnto<F, <Acc as Concat<Next::Elements>>::Concatenated>,
{
    type Output =
        <Rest as AggregateOnto<F, <Acc as Concat<Next::Elements>>::Concatenated>>::Output;
}

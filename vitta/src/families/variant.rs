#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::{
    aggregate::Aggregated,
    family::{Apply, Family, Instance, Token},
    tuple::HasLength,
    unary::{Unary, S, Z},
};

/// The family of closed sum types, each of which is a [`Union`] of one or more alternatives.
///
/// When aggregating into this family, a [`Union`] token is spliced: every one of its alternatives
/// becomes an alternative of the aggregate, in order. Alternatives are never deduplicated.
///
/// A sum type needs at least one alternative, so this family cannot be applied to the empty list:
///
/// ```compile_fail
/// use vitta::{families::Variants, Apply};
///
/// fn empty(_: <Variants as Apply<()>>::Applied) {}
/// ```
///
/// # Examples
///
/// ```
/// use vitta::{families::{Union, Variants, Void}, Aggregated, Just};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     Aggregated<Variants, (Just<i32>, Union<bool, Union<char, Void>>)>,
///     Union<i32, Union<bool, Union<char, Void>>>,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variants {}

impl Family for Variants {}

impl<H> Apply<(H, ())> for Variants {
    type Applied = Union<H, Void>;
}

impl<H, Next, Rest> Apply<(H, (Next, Rest))> for Variants
where
    Variants: Apply<(Next, Rest)>,
{
    type Applied = Union<H, <Variants as Apply<(Next, Rest)>>::Applied>;
}

/// A value of one of several types: either the first alternative `H`, or one of the alternatives
/// of the remaining sum `T`.
///
/// A sum of the types `A`, `B`, and `C` is written `Union<A, Union<B, Union<C, Void>>>`, and is
/// most conveniently spelled with the [`Variant!`](macro@crate::Variant) macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Union<H, T> {
    /// The first alternative.
    Here(H),
    /// One of the remaining alternatives.
    There(T),
}

/// The sum of no alternatives, which has no values. It terminates every [`Union`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Void {}

/// The alternatives of a properly [`Void`]-terminated sum, as an inductive list.
pub trait Alternatives {
    /// The alternatives, in order.
    type AsList: HasLength;
}

impl Alternatives for Void {
    type AsList = ();
}

impl<H, T: Alternatives> Alternatives for Union<H, T> {
    type AsList = (H, T::AsList);
}

impl<H, T: Alternatives> Token<Variants> for Union<H, T> {
    type Elements = <Self as Alternatives>::AsList;
}

impl<H, T: Alternatives> Instance for Union<H, T> {
    type Family = Variants;
}

impl<H, T: Alternatives> Union<H, T> {
    /// The number of alternatives of this sum type.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitta::Variant;
    ///
    /// assert_eq!(<Variant![u8, u16, u8]>::ALTERNATIVES, 3);
    /// ```
    pub const ALTERNATIVES: usize =
        <<<Self as Alternatives>::AsList as HasLength>::Length as Unary>::VALUE;
}

/// Inject a value of type `T` into a sum type which has `T` as the alternative at position
/// `Index`, or project it back out.
///
/// When `T` occurs once among the alternatives, `Index` is inferred. When it occurs more than once,
/// the index must be given, because the alternatives are never merged.
///
/// # Examples
///
/// ```
/// use vitta::{families::Inject, unary::{S, Z}, Variant};
///
/// type Number = Variant![u8, u16, u8];
///
/// let n: Number = Inject::inject(7u16);
/// assert_eq!(Inject::<u16, _>::get(&n), Some(&7));
///
/// let first = <Number as Inject<u8, Z>>::inject(1);
/// let last = <Number as Inject<u8, S<S<Z>>>>::inject(1);
/// assert_ne!(first, last);
/// assert_eq!(Inject::<u8, S<S<Z>>>::get(&last), Some(&1));
/// assert_eq!(Inject::<u8, Z>::get(&last), None);
/// ```
pub trait Inject<T, Index> {
    /// Construct the alternative at `Index` from `value`.
    fn inject(value: T) -> Self;

    /// Get a reference to the value, if this is the alternative at `Index`.
    fn get(&self) -> Option<&T>;
}

impl<H, T> Inject<H, Z> for Union<H, T> {
    fn inject(value: H) -> Self {
        Union::Here(value)
    }

    fn get(&self) -> Option<&H> {
        match self {
            Union::Here(value) => Some(value),
            Union::There(_) => None,
        }
    }
}

impl<H, T, X, Index> Inject<X, S<Index>> for Union<H, T>
where
    T: Inject<X, Index>,
{
    fn inject(value: X) -> Self {
        Union::There(T::inject(value))
    }

    fn get(&self) -> Option<&X> {
        match self {
            Union::Here(_) => None,
            Union::There(rest) => rest.get(),
        }
    }
}

/// The sum type aggregated from the tuple of tokens `Tokens`.
///
/// # Examples
///
/// ```
/// use vitta::{families::{Union, VariantAggregate, Void}, Just};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     VariantAggregate<(Just<i32>, Just<bool>, Just<char>)>,
///     VariantAggregate<(Union<i32, Union<bool, Void>>, Just<char>)>,
///     VariantAggregate<(Just<i32>, Union<bool, Union<char, Void>>)>,
///     Union<i32, Union<bool, Union<char, Void>>>,
/// );
/// ```
pub type VariantAggregate<Tokens> = Aggregated<Variants, Tokens>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Just;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    type Three = Union<i32, Union<bool, Union<char, Void>>>;

    #[test]
    fn unions_are_tokens() {
        assert_impl_all!(Union<i32, Void>: Token<Variants>, Instance);
        assert_impl_all!(Three: Token<Variants>, Instance);
        assert_not_impl_any!(Void: Token<Variants>, Instance);
        assert_not_impl_any!(Union<i32, bool>: Token<Variants>, Instance);
    }

    #[test]
    fn empty_variant_does_not_apply() {
        assert_not_impl_any!(Variants: Apply<()>);
        assert_impl_all!(Variants: Apply<(i32, ())>);
    }

    #[test]
    fn scenarios() {
        assert_type_eq_all!(VariantAggregate<(Just<i32>,)>, Union<i32, Void>);
        assert_type_eq_all!(VariantAggregate<(Union<i32, Void>,)>, Union<i32, Void>);
        assert_type_eq_all!(
            VariantAggregate<(Just<i32>, Just<bool>, Just<char>)>,
            VariantAggregate<(Union<i32, Union<bool, Void>>, Just<char>)>,
            VariantAggregate<(Union<i32, Void>, Union<bool, Void>, Union<char, Void>)>,
            VariantAggregate<(Three,)>,
            Three,
        );
    }

    #[test]
    fn duplicates_are_kept() {
        assert_type_eq_all!(
            VariantAggregate<(Just<i32>, Union<i32, Void>)>,
            Union<i32, Union<i32, Void>>,
        );
    }

    #[cfg(feature = "tuple")]
    #[test]
    fn tuples_are_plain_alternatives() {
        assert_not_impl_any!(((i32, bool),): crate::Aggregate<Variants>);
        assert_type_eq_all!(
            VariantAggregate<(Just<(i32, bool)>,)>,
            Union<(i32, bool), Void>
        );
    }

    #[test]
    fn alternatives_are_counted() {
        assert_eq!(<Union<i32, Void>>::ALTERNATIVES, 1);
        assert_eq!(Three::ALTERNATIVES, 3);
    }

    #[test]
    fn inject_and_get() {
        let b: Three = Inject::inject(true);
        assert_eq!(b, Union::There(Union::Here(true)));
        assert_eq!(Inject::<bool, _>::get(&b), Some(&true));
        assert_eq!(Inject::<i32, _>::get(&b), None);
        assert_eq!(Inject::<char, _>::get(&b), None);
    }
}

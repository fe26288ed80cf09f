//! Container families, and the tokens which contribute element types to them.
//!
//! Rust has no way to name a generic type constructor like `Vec` or `(_, _)` on its own, so a
//! container "template" is named instead by a *family*: an uninhabited marker type implementing
//! [`Family`], which knows how to [`Apply`] itself to a list of element types.

use std::marker::PhantomData;

use crate::tuple::HasLength;

/// A family of container types, each of which is parameterized by an ordered list of element
/// types.
///
/// A family alone says nothing about *which* lists it accepts: that is the job of [`Apply`].
pub trait Family: Sized + 'static {}

/// Instantiate the family `Self` with the inductive list of element types `Args`.
///
/// A family may decline to implement this for some lists: for instance,
/// [`Variants`](crate::families::Variants) has no instantiation for the empty list, because a sum
/// type with no alternatives cannot hold a value.
///
/// # Examples
///
/// ```
/// use vitta::{families::Tuples, Apply};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<Tuples as Apply<(u8, (u16, ()))>>::Applied, (u8, u16));
/// ```
pub trait Apply<Args>: Family {
    /// The container holding exactly the elements of `Args`, in order.
    type Applied;
}

/// A type which may appear in the input to an aggregation into the family `F`.
///
/// Every token contributes an ordered list of element types, its [`Elements`](Token::Elements):
///
/// - a plain type, wrapped in [`Just`], contributes only itself;
/// - an instance of `F` contributes all of its own elements, which are spliced into the aggregate
///   in place of the instance itself.
///
/// An instance of some *other* family is not a token for `F`; to aggregate it as an element, wrap
/// it in [`Just`].
pub trait Token<F: Family> {
    /// The element types contributed by this token.
    type Elements: HasLength;
}

/// A plain type token: `Just<T>` contributes exactly the element `T` to an aggregation, whatever
/// the shape of `T`.
///
/// This is never constructed; it exists only to mark `T` as an element rather than a container to
/// be spliced.
///
/// # Examples
///
/// ```
/// use vitta::{families::Tuples, Aggregated, Just};
/// use static_assertions::assert_type_eq_all;
///
/// // Without `Just`, the inner tuple would be spliced into the outer one
/// assert_type_eq_all!(Aggregated<Tuples, (Just<(u8, u16)>,)>, ((u8, u16),));
/// assert_type_eq_all!(Aggregated<Tuples, ((u8, u16),)>, (u8, u16));
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = ""),
    Default(bound = "")
)]
pub struct Just<T>(PhantomData<fn() -> T>);

impl<F: Family, T> Token<F> for Just<T> {
    type Elements = (T, ());
}

/// A container which is an instance of some [`Family`].
///
/// This is the reverse of [`Apply`]: it recovers the family from one of its instances, so that a
/// family can be named by mentioning any of its members.
///
/// # Examples
///
/// ```
/// use vitta::{families::Tuples, Instance};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(u8, u16) as Instance>::Family, Tuples);
/// ```
pub trait Instance {
    /// The family this is an instance of.
    type Family: Family;
}

//! Conversions back and forth between flat tuples and their corresponding inductive list
//! structures, and concatenation of inductive lists.
//!
//! Internally, this library aggregates over inductive type-level lists, but presents an external
//! interface in terms of tuples, for readability. The traits here convert between the two
//! equivalent representations.
//!
//! At present, tuples up to size 128 are supported.

use super::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: HasLength + Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;
}

/// Take the length of a type-level list as a unary type-level number.
///
/// Unlike [`List`], this is defined for inductive lists of any length.
///
/// # Examples
///
/// ```
/// use vitta::tuple::HasLength;
/// use vitta::unary::Unary;
///
/// assert_eq!(<<(u8, (u16, ())) as HasLength>::Length as Unary>::VALUE, 2);
/// ```
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Append the inductive list `Suffix` to the end of this one, preserving the order of both.
///
/// # Examples
///
/// ```
/// use vitta::tuple::Concat;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     <(u8, (u16, ())) as Concat<(u32, ())>>::Concatenated,
///     (u8, (u16, (u32, ()))),
/// );
/// assert_type_eq_all!(<() as Concat<()>>::Concatenated, ());
/// ```
pub trait Concat<Suffix> {
    /// The list holding every element of `Self`, followed by every element of `Suffix`.
    type Concatenated;
}

impl<Suffix> Concat<Suffix> for () {
    type Concatenated = Suffix;
}

impl<T, Ts: Concat<Suffix>, Suffix> Concat<Suffix> for (T, Ts) {
    type Concatenated = (T, Ts::Concatenated);
}

vitta_macro::impl_tuples!(128);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    #[test]
    fn tuples_convert_to_lists() {
        assert_type_eq_all!(<() as Tuple>::AsList, ());
        assert_type_eq_all!(<(u8,) as Tuple>::AsList, (u8, ()));
        assert_type_eq_all!(<(u8, u16, u32) as Tuple>::AsList, (u8, (u16, (u32, ()))));
    }

    #[test]
    fn lists_convert_to_tuples() {
        assert_type_eq_all!(<() as List>::AsTuple, ());
        assert_type_eq_all!(<(u8, ()) as List>::AsTuple, (u8,));
        assert_type_eq_all!(<(u8, (u16, ())) as List>::AsTuple, (u8, u16));
    }

    #[test]
    fn nested_tuples_stay_elements() {
        assert_type_eq_all!(<((u8, u16), u32) as Tuple>::AsList, ((u8, u16), (u32, ())));
    }

    #[test]
    fn improper_lists_are_not_lists() {
        assert_impl_all!((u8, ()): List);
        assert_not_impl_any!((u8, u16): List);
    }

    #[test]
    fn concat_keeps_order() {
        type Front = <(u8, u16) as Tuple>::AsList;
        type Back = <(u32, u64) as Tuple>::AsList;
        assert_type_eq_all!(
            <<Front as Concat<Back>>::Concatenated as List>::AsTuple,
            (u8, u16, u32, u64)
        );
        assert_type_eq_all!(<Front as Concat<()>>::Concatenated, Front);
    }

    #[test]
    fn length_counts_elements() {
        assert_eq!(<<() as HasLength>::Length as Unary>::VALUE, 0);
        assert_eq!(
            <<<(u8, u8, u8, u8) as Tuple>::AsList as HasLength>::Length as Unary>::VALUE,
            4
        );
    }
}

use crate::{
    aggregate::Aggregated,
    family::{Apply, Family, Instance, Token},
    tuple::List,
};

/// The family of Rust tuples of up to 128 elements, including the unit tuple `()`.
///
/// When aggregating into this family, a tuple token is spliced: `(A, B)` contributes `A` and then
/// `B`. To keep a tuple as a single element, wrap it in [`Just`](crate::Just).
///
/// # Examples
///
/// ```
/// use vitta::{families::Tuples, Aggregated, Just};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Aggregated<Tuples, (Just<u8>,)>, (u8,));
/// assert_type_eq_all!(Aggregated<Tuples, ((), Just<u8>, ())>, (u8,));
/// assert_type_eq_all!(Aggregated<Tuples, ((),)>, ());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tuples {}

impl Family for Tuples {}

impl<L: List> Apply<L> for Tuples {
    type Applied = L::AsTuple;
}

vitta_macro::impl_tuple_tokens!(128);

/// The tuple aggregated from the tuple of tokens `Tokens`.
///
/// # Examples
///
/// ```
/// use vitta::{families::TupleAggregate, Just};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     TupleAggregate<(Just<i32>, (i32,), Just<i32>)>,
///     (i32, i32, i32),
/// );
/// ```
pub type TupleAggregate<Tokens> = Aggregated<Tuples, Tokens>;

static_assertions::assert_type_eq_all!(TupleAggregate<((u8, u16), (u32,))>, (u8, u16, u32));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Just;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    #[test]
    fn tuples_are_tokens() {
        assert_impl_all!((): Token<Tuples>, Instance);
        assert_impl_all!((i32,): Token<Tuples>, Instance);
        assert_impl_all!((i32, bool, char): Token<Tuples>, Instance);
        assert_not_impl_any!(i32: Token<Tuples>, Instance);
    }

    #[test]
    fn scenarios() {
        assert_type_eq_all!(TupleAggregate<(Just<i32>,)>, (i32,));
        assert_type_eq_all!(TupleAggregate<((i32,),)>, (i32,));
        assert_type_eq_all!(
            TupleAggregate<(Just<i32>, Just<i32>)>,
            TupleAggregate<((i32,), Just<i32>)>,
            TupleAggregate<((i32, i32),)>,
            (i32, i32),
        );
        assert_type_eq_all!(
            TupleAggregate<(Just<i32>, (i32,), Just<i32>)>,
            TupleAggregate<((i32, i32), (i32,))>,
            (i32, i32, i32),
        );
    }

    #[test]
    fn unit_tokens_contribute_nothing() {
        assert_type_eq_all!(TupleAggregate<((), (), ())>, ());
        assert_type_eq_all!(TupleAggregate<(Just<()>,)>, ((),));
    }

    #[test]
    fn wide_tuples_splice() {
        assert_type_eq_all!(
            TupleAggregate<(
                (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8),
                Just<u16>,
            )>,
            (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u16),
        );
    }
}

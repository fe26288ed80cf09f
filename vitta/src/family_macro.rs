/// The `family!` macro declares that a container with a single tuple parameter, such as
/// `struct Row<T>(T)`, forms a [`Family`](crate::Family) whose element types are the components
/// of that tuple.
///
/// Invoked as `family!(pub RowFamily for Row)`, it defines the uninhabited marker type
/// `RowFamily` along with:
///
/// - [`Apply`](crate::Apply) for every list of up to 128 element types, producing
///   `Row<(A, B, ...)>`;
/// - [`Token`](crate::Token) for every `Row<(A, B, ...)>`, contributing `A, B, ...`; and
/// - [`Instance`](crate::Instance) for every `Row<(A, B, ...)>`, naming `RowFamily`.
///
/// The container must be in scope under the given name, and may be generic in nothing but its
/// tuple parameter. The marker names the family of every instance of the container, so it must be
/// at least as visible as the container itself:
///
/// ```compile_fail
/// # use std::marker::PhantomData;
/// # use vitta::family;
/// pub struct Row<T>(PhantomData<T>);
///
/// family!(RowFamily for Row);
/// # fn main() {}
/// ```
///
/// A private container may have a private marker:
///
/// ```
/// # use std::marker::PhantomData;
/// # use static_assertions::assert_type_eq_all;
/// # use vitta::{family, Aggregated, Just};
/// struct Row<T>(PhantomData<T>);
///
/// family!(RowFamily for Row);
///
/// assert_type_eq_all!(Aggregated<RowFamily, (Just<u8>,)>, Row<(u8,)>);
/// # fn main() {}
/// ```
///
/// # Examples
///
/// ```
/// use std::marker::PhantomData;
/// use static_assertions::assert_type_eq_all;
/// use vitta::{family, Aggregated, Just};
///
/// pub struct Row<T>(PhantomData<T>);
///
/// family!(pub RowFamily for Row);
///
/// assert_type_eq_all!(
///     Aggregated<RowFamily, (Row<(u8, u16)>, Just<u32>, Row<(u64,)>)>,
///     Row<(u8, u16, u32, u64)>,
/// );
/// ```
///
/// Attributes written before the visibility are attached to the marker:
///
/// ```
/// # use std::marker::PhantomData;
/// # use vitta::family;
/// # pub struct Row<T>(PhantomData<T>);
/// family! {
///     /// The family of rows.
///     pub RowFamily for Row
/// }
/// ```
#[macro_export]
macro_rules! family {
    ($(#[$attr:meta])* $vis:vis $family:ident for $container:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $family {}

        impl $crate::Family for $family {}

        impl<L: $crate::tuple::List> $crate::Apply<L> for $family {
            type Applied = $container<<L as $crate::tuple::List>::AsTuple>;
        }

        impl<T: $crate::tuple::Tuple> $crate::Token<$family> for $container<T> {
            type Elements = <T as $crate::tuple::Tuple>::AsList;
        }

        impl<T: $crate::tuple::Tuple> $crate::Instance for $container<T> {
            type Family = $family;
        }
    };
}

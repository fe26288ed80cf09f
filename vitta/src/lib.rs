/*!
Compile-time aggregation of types and containers of types into a single, flat container.

Given a sequence of *tokens*, each either a plain type or an instance of some container, this crate
computes (entirely in the type system) one instance of that container holding every element in
order. Instances of the container among the tokens are spliced in rather than nested:

```
use vitta::Tuple;
use static_assertions::assert_type_eq_all;

assert_type_eq_all!(Tuple![i32, (bool, char), u8], (i32, bool, char, u8));
```

There is no runtime component: every aggregation is resolved during type checking, and any
aggregation which can't be resolved is a type error.

## Families and tokens

A container "template" is named by a [`Family`], which can be [`Apply`]ed to a list of element
types. Two families are built in (see [`families`]):

- [`Tuples`](families::Tuples), whose instances are Rust's tuples, and
- [`Variants`](families::Variants), whose instances are the closed sum type
  [`Union`](families::Union).

Any other container with a single tuple parameter can be declared a family with [`family!`].

The type-level entry point is the [`Aggregate`] trait (or its shorthand [`Aggregated`]), which
aggregates a tuple of [`Token`]s. A plain type is marked by wrapping it in [`Just`], while
instances of the family are used as-is:

```
use vitta::{families::Tuples, Aggregated, Just};
use static_assertions::assert_type_eq_all;

assert_type_eq_all!(
    Aggregated<Tuples, (Just<i32>, (bool, char), Just<u8>)>,
    (i32, bool, char, u8),
);
```

## Macros

Spelling out [`Just`] gets tiresome, so the [`Aggregate!`](macro@Aggregate),
[`Tuple!`](macro@Tuple), and [`Variant!`](macro@Variant) macros accept tokens in their natural
syntax, and decide which are plain and which are instances by how they are written. A token
written `..T` is always spliced, which is useful for type synonyms of instances:

```
use vitta::{Tuple, Variant};
use static_assertions::assert_type_eq_all;

type Pair = (bool, char);

assert_type_eq_all!(Tuple![i32, ..Pair], (i32, bool, char));
assert_type_eq_all!(Variant![i32, Variant![bool, char]], Variant![i32, bool, char]);
```

## Crate features

- `tuple` (default): the [`Tuples`](families::Tuples) family and the [`Tuple!`](macro@Tuple)
  macro.
- `variant` (default): the [`Variants`](families::Variants) family, [`Union`](families::Union),
  and the [`Variant!`](macro@Variant) macro.
- `serde`: `Serialize` and `Deserialize` for [`Union`](families::Union) and
  [`Void`](families::Void).
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod families;
pub mod tuple;
pub mod unary;

mod aggregate;
mod family;
mod family_macro;

pub use aggregate::{Aggregate, AggregateOnto, Aggregated, Seed};
pub use family::{Apply, Family, Instance, Just, Token};
pub use vitta_macro::Aggregate;
#[cfg(feature = "tuple")]
pub use vitta_macro::Tuple;
#[cfg(feature = "variant")]
pub use vitta_macro::Variant;

/// The prelude module for quickly getting started with vitta.
///
/// This module is designed to be imported as `use vitta::prelude::*;`, which brings into scope the
/// aggregation traits, the built-in families, and the macros.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::families::*;
    #[doc(no_inline)]
    pub use crate::family;
    #[doc(no_inline)]
    pub use crate::{Aggregate, Aggregated, Apply, Family, Instance, Just, Token};
    #[cfg(feature = "tuple")]
    #[doc(no_inline)]
    pub use vitta_macro::Tuple;
    #[cfg(feature = "variant")]
    #[doc(no_inline)]
    pub use vitta_macro::Variant;
}

//! The two built-in families: Rust's own tuples, and the closed sum type [`Union`].
//!
//! Each is gated behind a feature of the same name (`tuple` and `variant`), both of which are on
//! by default.

#[cfg(feature = "tuple")]
mod tuple;
#[cfg(feature = "variant")]
mod variant;

#[cfg(feature = "tuple")]
pub use tuple::{TupleAggregate, Tuples};
#[cfg(feature = "variant")]
pub use variant::{Alternatives, Inject, Union, VariantAggregate, Variants, Void};

//! Deferred type-level computation.
//!
//! A query is a marker type naming one step of a computation, and
//! [`Resolve`] runs it. Query impls list every sub-query they use as a
//! where-clause, so inside an impl the sub-results stay opaque: the solver
//! checks each impl once against its own bounds, and at a use site each query
//! is solved once per argument set and cached.
//!
//! ```text
//! impl Resolve for Outer<T>
//! where
//!     Inner<T>: Resolve,                           // opaque inside this impl
//!     ValidOf<..>: Branch<Ready<..>, Fallback<T>>,  // picks one arm, resolves only that one
//! ```
//!
//! [`Branch`] and [`AndThen`] dispatch on `Present`/`Absent` through
//! separate impls. The arm that is not taken is never resolved.

use core::marker::PhantomData;

use super::bool::{Absent, Bool, Present};
use crate::detect::requires::Clause;
use crate::model::{Ty, ValidOf};

/// A query that resolves to a modeled type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be resolved here",
    label = "add `{Self}: Resolve` to the where-clause of the enclosing impl",
    note = "inside generic code every query used must be listed as a where-clause"
)]
pub trait Resolve: 'static {
    type Out: Ty;
}

/// An already computed type.
pub struct Ready<T>(PhantomData<T>);

impl<T: Ty> Resolve for Ready<T> {
    type Out = T;
}

/// `Self ? Then : Else`, resolving only the chosen query.
pub trait Branch<Then, Else> {
    type Out: Ty;
}

impl<Then: Resolve, Else> Branch<Then, Else> for Present {
    type Out = <Then as Resolve>::Out;
}

impl<Then, Else: Resolve> Branch<Then, Else> for Absent {
    type Out = <Else as Resolve>::Out;
}

/// `T` if it is valid, otherwise the result of `Next`.
pub struct FirstValid<T, Next>(PhantomData<(T, Next)>);

impl<T: Ty, Next: 'static> Resolve for FirstValid<T, Next>
where
    ValidOf<T>: Branch<Ready<T>, Next>,
{
    type Out = <ValidOf<T> as Branch<Ready<T>, Next>>::Out;
}

/// `Self && Next`, checking the clause `Next` only when `Self` holds.
pub trait AndThen<Next> {
    type Out: Bool;
}

impl<Next: Clause> AndThen<Next> for Present {
    type Out = <Next as Clause>::Holds;
}

impl<Next> AndThen<Next> for Absent {
    type Out = Absent;
}

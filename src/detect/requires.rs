//! `requires_` emulation.
//!
//! A [`Requirement`] maps an argument pack to a [`Clause`]. Clauses are
//! type-level booleans; a clause list (`clauses![..]`) is their conjunction,
//! evaluated left to right. A failing clause stops evaluation: the `Clause`
//! impls of the clauses after it are never selected, so their where-clauses
//! are never checked.
//!
//! ```text
//! HCons<C, Rest>::Holds = C::Holds.AndThen(Rest)
//!     Present ──► Rest::Holds
//!     Absent  ──► Absent          (Rest untouched)
//! ```

use core::marker::PhantomData;

use crate::common::TyList;
use crate::model::{HCons, HNil, Ty, ValidOf};
use crate::primitives::{Absent, AndThen, Bool, Present};

/// A requirement clause.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a requirement clause",
    label = "expected a clause",
    note = "wrap type-level booleans in `Is<..>` and type validity in `Valid<..>`"
)]
pub trait Clause: 'static {
    type Holds: Bool;
}

impl Clause for Present {
    type Holds = Present;
}

impl Clause for Absent {
    type Holds = Absent;
}

impl Clause for HNil {
    type Holds = Present;
}

impl<C: Clause, Rest: 'static> Clause for HCons<C, Rest>
where
    <C as Clause>::Holds: AndThen<Rest>,
{
    type Holds = <<C as Clause>::Holds as AndThen<Rest>>::Out;
}

/// Holds when `T` is a valid type (the expression it stands for is well-formed).
pub struct Valid<T>(PhantomData<T>);

impl<T: Ty> Clause for Valid<T> {
    type Holds = ValidOf<T>;
}

/// Holds when the type-level boolean `B` is `Present`.
pub struct Is<B>(PhantomData<B>);

impl<B: Bool> Clause for Is<B> {
    type Holds = B;
}

/// A named requirement with one parametrized check.
///
/// # Usage
/// ```
/// use tola_concepts::{clauses, requires, Requirement, TyList, Valid};
/// use tola_concepts::concepts::ConvertibleTo;
///
/// // the second argument exists and converts to the first
/// struct TakesFrom;
/// impl<Args: TyList> Requirement<Args> for TakesFrom {
///     type Check = clauses![
///         Valid<<Args as TyList>::Second>,
///         ConvertibleTo<<Args as TyList>::Second, <Args as TyList>::First>,
///     ];
/// }
///
/// assert!(requires::<TakesFrom, (i64, i32)>());
/// assert!(!requires::<TakesFrom, (i32,)>());
/// ```
pub trait Requirement<Args>: 'static {
    type Check;
}

/// `requires_<R, Args...>`
pub type Requires<R, Args> = <<R as Requirement<Args>>::Check as Clause>::Holds;

pub const fn requires<R: Requirement<Args>, Args: TyList>() -> bool
where
    <R as Requirement<Args>>::Check: Clause,
{
    <Requires<R, Args> as Bool>::VALUE
}

/// Holds when the requirement `R` is met by `Args`; usable as a clause.
pub struct Satisfies<R, Args>(PhantomData<(R, Args)>);

impl<R: Requirement<Args>, Args: 'static> Clause for Satisfies<R, Args>
where
    <R as Requirement<Args>>::Check: Clause,
{
    type Holds = Requires<R, Args>;
}

/// A clause list, checked left to right.
#[macro_export]
macro_rules! clauses {
    ($($c:ty),* $(,)?) => { $crate::hlist![$($c),*] };
}

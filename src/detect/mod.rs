//! # Layer 4: Detection
//!
//! The detection idiom over modeled types, the `requires_` emulation built on
//! it, and inherent-const checks for real Rust traits.
//!
//! An [`Operation`] is a type-level function of an argument pack. It is total:
//! where the C++ expression would be ill-formed it yields [`Nonesuch`], so a
//! failed detection is a value, never a build error.
//!
//! ```text
//! Op::Apply<Args>  ──► valid type T   ──► DetectedT = T,        IsDetected = Present
//!                  └─► Nonesuch       ──► DetectedT = Nonesuch, IsDetected = Absent
//! ```

pub mod native;
pub mod requires;

use crate::common::{CommonReference, CommonType, FoldCommonReference, FoldCommonType, TyList};
use crate::model::{Nonesuch, ObjOf, Object, SigList, Ty, ValidOf};
use crate::primitives::{And, Bool, Branch, Peano, Ready, Resolve, Select, S, Z};
use crate::relation::{ConditionalOf, Convertible, IsSame};
use crate::transform::{Clref, Decay, RemoveCvref, Rref};

pub use requires::{requires, Clause, Is, Requirement, Requires, Satisfies, Valid};

// =============================================================================
// Operations
// =============================================================================

/// A type-level operation over the argument pack `Args`.
///
/// Operations built on queries list them as where-clauses; the result is only
/// resolved for the packs it is asked about.
///
/// # Usage
/// ```
/// use tola_concepts::{is_detected, AddLref, Operation, TyList};
///
/// // `T&`, for one argument
/// struct LvalueOf;
/// impl<Args: TyList> Operation<Args> for LvalueOf {
///     type Apply = AddLref<<Args as TyList>::First>;
/// }
///
/// assert!(is_detected::<LvalueOf, (i32,)>());
/// assert!(!is_detected::<LvalueOf, ()>());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a detection operation over `{Args}`",
    note = "implement `Operation<Args>` with `type Apply: Ty`"
)]
pub trait Operation<Args>: 'static {
    /// The result, or `Nonesuch` when ill-formed.
    type Apply: Ty;
}

type Arity<Args, N> = <<Args as TyList>::Len as Peano>::Eq<N>;
type First<Args> = <Args as TyList>::First;
type Second<Args> = <Args as TyList>::Second;

type Unary<Args, T> = Select<Arity<Args, S<Z>>, T, Nonesuch>;

/// `common_type_t<Args...>`
#[derive(Debug)]
pub struct CommonTypeOp;

impl<Args: TyList> Operation<Args> for CommonTypeOp
where
    FoldCommonType<Args>: Resolve,
{
    type Apply = CommonType<Args>;
}

/// `common_reference_t<Args...>`
#[derive(Debug)]
pub struct CommonReferenceOp;

impl<Args: TyList> Operation<Args> for CommonReferenceOp
where
    FoldCommonReference<Args>: Resolve,
{
    type Apply = CommonReference<Args>;
}

/// `decltype(false ? declval<T>() : declval<U>())`
#[derive(Debug)]
pub struct ConditionalOp;

type TwoArgs<Args> = Arity<Args, S<S<Z>>>;

impl<Args: TyList> Operation<Args> for ConditionalOp
where
    TwoArgs<Args>: Branch<ConditionalOf<First<Args>, Second<Args>>, Ready<Nonesuch>>,
{
    type Apply = <TwoArgs<Args> as Branch<ConditionalOf<First<Args>, Second<Args>>, Ready<Nonesuch>>>::Out;
}

/// `invoke_result_t<F, Args...>` from the signatures registered on `F`'s object.
pub type InvokeResult<F, Args> = <<ObjOf<F> as Object>::Calls as SigList>::Match<Args>;

/// `invoke_result_t<F, Args...>`; the pack's first element is the callee.
#[derive(Debug)]
pub struct InvokeResultOp;

impl<Args: TyList> Operation<Args> for InvokeResultOp {
    type Apply = InvokeResult<First<Args>, <Args as TyList>::Rest>;
}

/// `decay_t<T>`
#[derive(Debug)]
pub struct DecayOp;

impl<Args: TyList> Operation<Args> for DecayOp {
    type Apply = Unary<Args, Decay<First<Args>>>;
}

/// `clref_t<T>`
#[derive(Debug)]
pub struct ClrefOp;

impl<Args: TyList> Operation<Args> for ClrefOp {
    type Apply = Unary<Args, Clref<First<Args>>>;
}

/// `rref_t<T>`
#[derive(Debug)]
pub struct RrefOp;

impl<Args: TyList> Operation<Args> for RrefOp {
    type Apply = Unary<Args, Rref<First<Args>>>;
}

/// `remove_cvref_t<T>`
#[derive(Debug)]
pub struct RemoveCvrefOp;

impl<Args: TyList> Operation<Args> for RemoveCvrefOp {
    type Apply = Unary<Args, RemoveCvref<First<Args>>>;
}

// =============================================================================
// Detection
// =============================================================================

/// `detected_t<Op, Args...>`: the result, or `Nonesuch`.
pub type DetectedT<Op, Args> = <Op as Operation<Args>>::Apply;

/// `is_detected<Op, Args...>`
pub type IsDetected<Op, Args> = ValidOf<DetectedT<Op, Args>>;

/// `detected_or_t<Default, Op, Args...>`
pub type DetectedOr<Default, Op, Args> = Select<IsDetected<Op, Args>, DetectedT<Op, Args>, Default>;

/// `is_detected_exact<Expected, Op, Args...>`
///
/// Gated on detection, so `Expected = Nonesuch` never matches a failure.
pub type IsDetectedExact<Expected, Op, Args> =
    And<IsDetected<Op, Args>, IsSame<DetectedT<Op, Args>, Expected>>;

/// `is_detected_convertible<To, Op, Args...>`
pub type IsDetectedConvertible<To, Op, Args> = Convertible<DetectedT<Op, Args>, To>;

pub const fn is_detected<Op: Operation<Args>, Args: TyList>() -> bool {
    <IsDetected<Op, Args> as Bool>::VALUE
}

pub const fn is_detected_exact<Expected: Ty, Op: Operation<Args>, Args: TyList>() -> bool {
    <IsDetectedExact<Expected, Op, Args> as Bool>::VALUE
}

pub const fn is_detected_convertible<To: Ty, Op: Operation<Args>, Args: TyList>() -> bool {
    <IsDetectedConvertible<To, Op, Args> as Bool>::VALUE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_same, ty};

    #[test]
    fn test_builtin_ops_check_arity() {
        assert!(is_detected::<DecayOp, (ty!(const i32 &),)>());
        assert!(!is_detected::<DecayOp, ()>());
        assert!(!is_detected::<DecayOp, (i32, i32)>());
        assert!(!is_detected::<ConditionalOp, (i32,)>());
        assert!(is_detected::<ConditionalOp, (i32, i64)>());
        assert!(!is_detected::<ConditionalOp, (i32, i64, u8)>());
    }

    #[test]
    fn test_detected_or() {
        assert!(is_same::<DetectedOr<u8, DecayOp, ()>, u8>());
        assert!(is_same::<DetectedOr<u8, DecayOp, (ty!(i32 &&),)>, i32>());
    }

    #[test]
    fn test_exact_never_matches_sentinel() {
        assert!(!is_detected_exact::<Nonesuch, CommonTypeOp, ()>());
        assert!(is_same::<DetectedT<CommonTypeOp, ()>, Nonesuch>());
        assert!(is_detected_exact::<i32, CommonTypeOp, (i32, i16)>());
    }

    #[test]
    fn test_invoke_result_needs_a_callee() {
        assert!(!is_detected::<InvokeResultOp, ()>());
        assert!(!is_detected::<InvokeResultOp, (i32, i32)>());
    }
}

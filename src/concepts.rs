//! # Layer 5: Concepts
//!
//! Core-language concepts as [`Clause`]s. Each concept is a conjunction of
//! earlier results, checked left to right, so a later clause is only
//! evaluated once the earlier ones hold.
//!
//! Every concept has a `const fn` mirror in snake case, e.g.
//! [`common_reference_with`].
//!
//! ```text
//! Same, DerivedFrom, ConvertibleTo, CommonReferenceWith, CommonWith
//! Integral, SignedIntegral, UnsignedIntegral
//! Assignable, Swappable, SwappableWith, Destructible, Constructible,
//! DefaultConstructible, MoveConstructible, CopyConstructible
//! Boolean, EqualityComparable(With), StrictTotallyOrdered(With)
//! Movable, Copyable, Semiregular, Regular
//! Invocable, RegularInvocable, Predicate, Relation, StrictWeakOrder
//! ```
//!
//! Operators are modeled per object: `==`/`!=` and `<`/`>`/`<=`/`>=` exist
//! for arithmetic operands (or operands converting to one), and for objects
//! registered with `#[object(eq(..))]` / `#[object(ord(..))]`. Their result
//! is `bool`. Calls come from `#[object(invoke(fn(..) -> R))]`.
//!
//! # Usage
//! ```
//! use tola_concepts::{ty, Object};
//! use tola_concepts::concepts::{assignable, common_with, derived_from};
//!
//! #[derive(Object)]
//! pub struct Base;
//! #[derive(Object)]
//! #[object(bases(Base))]
//! pub struct Derived;
//!
//! assert!(derived_from::<Derived, Base>());
//! assert!(common_with::<Base, Derived>());
//! assert!(assignable::<ty!(i32 &), f64>());
//! assert!(!assignable::<ty!(i32 &&), i32>());
//! ```

use core::marker::PhantomData;

use crate::common::{CommonReference2, CommonReferenceOf, CommonType2, CommonTypeOf, TyList};
use crate::detect::{DetectedT, InvokeResult, IsDetectedConvertible, IsDetectedExact, Operation};
use crate::detect::{Clause, Is, Requirement, Satisfies, Valid};
use crate::model::{
    CvOf, CvQual, Kind, KindOf, Nonesuch, ObjList, ObjOf, Object, RefKind, RefOf, Ty, ValidOf,
};
use crate::primitives::{And, Bool, Not, Or, Peano, Resolve, Select, S, Z};
use crate::relation::{Convertible, IsBaseOf, IsSame};
use crate::transform::{AddConst, AddLref, Clref, RemoveCvref, RemoveRef, Rref};

type ConstLref<T> = AddLref<AddConst<T>>;

// A concept defined by a clause list. Queries named after `where` are the
// ones the list's type arguments resolve.
macro_rules! concept {
    (
        $(#[$meta:meta])*
        pub struct $name:ident<$($p:ident: $bound:path),+>
        $(where $($query:ty),+)?
        = [$($clause:ty),* $(,)?];
    ) => {
        $(#[$meta])*
        pub struct $name<$($p),+>(PhantomData<($($p,)+)>);

        impl<$($p: $bound),+> Clause for $name<$($p),+>
        where
            $($($query: Resolve,)+)?
            crate::clauses![$($clause),*]: Clause,
        {
            type Holds = <crate::clauses![$($clause),*] as Clause>::Holds;
        }
    };
}

macro_rules! concept_fn {
    ($($name:ident<$($p:ident: $bound:path),+>;)+) => {
        $(
            ::paste::paste! {
                #[doc = concat!("[`", stringify!($name), "`] as a `const fn`.")]
                pub const fn [<$name:snake>]<$($p: $bound),+>() -> bool
                where
                    $name<$($p),+>: Clause,
                {
                    <<$name<$($p),+> as Clause>::Holds as Bool>::VALUE
                }
            }
        )+
    };
}

// =============================================================================
// Identity and derivation
// =============================================================================

/// `T` and `U` denote the same type.
pub struct Same<T, U>(PhantomData<(T, U)>);

impl<T: Ty, U: Ty> Clause for Same<T, U> {
    type Holds = And<IsSame<T, U>, IsSame<U, T>>;
}

/// `Base` is `Derived` or one of its (transitive) bases. Both are class types.
pub struct DerivedFrom<Derived, Base>(PhantomData<(Derived, Base)>);

impl<D: Ty, B: Ty> Clause for DerivedFrom<D, B> {
    type Holds = IsBaseOf<B, D>;
}

/// An expression of type `From` implicitly converts to `To`.
pub struct ConvertibleTo<From, To>(PhantomData<(From, To)>);

impl<F: Ty, T: Ty> Clause for ConvertibleTo<F, T> {
    type Holds = Convertible<F, T>;
}

// =============================================================================
// Common types
// =============================================================================

concept! {
    /// `T` and `U` share a common reference type, the same in both orders,
    /// that both convert to.
    pub struct CommonReferenceWith<T: Ty, U: Ty>
    where CommonReferenceOf<T, U>, CommonReferenceOf<U, T>
    = [
        Same<CommonReference2<T, U>, CommonReference2<U, T>>,
        ConvertibleTo<T, CommonReference2<T, U>>,
        ConvertibleTo<U, CommonReference2<T, U>>,
    ];
}

concept! {
    /// `T` and `U` share a common type that both convert to, consistent with
    /// the common reference of their const lvalues.
    pub struct CommonWith<T: Ty, U: Ty>
    where
        CommonTypeOf<T, U>,
        CommonTypeOf<U, T>,
        CommonReferenceOf<ConstLref<T>, ConstLref<U>>
    = [
        Same<CommonType2<T, U>, CommonType2<U, T>>,
        ConvertibleTo<T, CommonType2<T, U>>,
        ConvertibleTo<U, CommonType2<T, U>>,
        CommonReferenceWith<ConstLref<T>, ConstLref<U>>,
        CommonReferenceWith<
            AddLref<CommonType2<T, U>>,
            CommonReference2<ConstLref<T>, ConstLref<U>>,
        >,
    ];
}

// =============================================================================
// Arithmetic
// =============================================================================

/// A (possibly cv-qualified) integral type. References are not integral.
pub struct Integral<T>(PhantomData<T>);

impl<T: Ty> Clause for Integral<T> {
    type Holds = And<<KindOf<T> as Kind>::IsIntegral, <RefOf<T> as RefKind>::IsNone>;
}

concept! {
    pub struct SignedIntegral<T: Ty> = [Integral<T>, Is<<KindOf<T> as Kind>::IsSigned>];
}

concept! {
    pub struct UnsignedIntegral<T: Ty> = [Integral<T>, Is<<KindOf<T> as Kind>::IsUnsigned>];
}

// =============================================================================
// Assignment and swapping
// =============================================================================

/// The expression `lhs = std::forward<R>(rhs)` for `lhs` of type `L`.
///
/// Well-formed when `L` names a non-const lvalue and the right-hand side
/// converts to its object type. The expression has type `L`.
type AssignExpr<L, R> = Select<
    And<
        <RefOf<L> as RefKind>::IsLvalue,
        And<Not<<CvOf<L> as CvQual>::IsConst>, Convertible<R, ObjOf<L>>>,
    >,
    L,
    Nonesuch,
>;

/// The assignment expression is valid and yields the left-hand side's type.
#[derive(Debug)]
pub struct AssignReq;

impl<Args: TyList> Requirement<Args> for AssignReq {
    type Check = crate::clauses![
        Valid<AssignExpr<<Args as TyList>::First, <Args as TyList>::Second>>,
        Same<AssignExpr<<Args as TyList>::First, <Args as TyList>::Second>, <Args as TyList>::First>,
    ];
}

concept! {
    /// An lvalue of `L` can be assigned from an expression of `R`.
    ///
    /// Only lvalue-reference left-hand sides qualify; `L&&` is never assignable.
    pub struct Assignable<L: Ty, R: Ty> = [
        Is<<RefOf<L> as RefKind>::IsLvalue>,
        CommonReferenceWith<Clref<L>, Clref<R>>,
        Satisfies<AssignReq, (L, R)>,
    ];
}

concept! {
    /// Lvalues of `T` can be swapped: `T` is move constructible and move
    /// assignable.
    pub struct Swappable<T: Ty> = [
        MoveConstructible<RemoveRef<T>>,
        Satisfies<AssignReq, (AddLref<RemoveRef<T>>, Rref<T>)>,
    ];
}

type BothLvalues<T, U> = And<<RefOf<T> as RefKind>::IsLvalue, <RefOf<U> as RefKind>::IsLvalue>;

concept! {
    /// `swap(t, u)` is valid for expressions of `T` and `U`: lvalues of one
    /// swappable type.
    pub struct SwapExpr<T: Ty, U: Ty> = [
        Is<BothLvalues<T, U>>,
        Same<RemoveRef<T>, RemoveRef<U>>,
        Swappable<RemoveRef<T>>,
    ];
}

concept! {
    /// Expressions of `T` and `U` can be swapped with each other.
    pub struct SwappableWith<T: Ty, U: Ty> = [
        SwapExpr<T, T>,
        SwapExpr<U, U>,
        CommonReferenceWith<Clref<T>, Clref<U>>,
        SwapExpr<T, U>,
        SwapExpr<U, T>,
    ];
}

// =============================================================================
// Construction
// =============================================================================

/// Instances can be destroyed (including references). Every valid type qualifies.
pub struct Destructible<T>(PhantomData<T>);

impl<T: Ty> Clause for Destructible<T> {
    type Holds = ValidOf<T>;
}

type ArgCount<Args, N> = <<Args as TyList>::Len as Peano>::Eq<N>;

type InitializableFrom<T, Args> = <ArgCount<Args, Z> as Bool>::Elif<
    <RefOf<T> as RefKind>::IsNone,
    And<ArgCount<Args, S<Z>>, Convertible<<Args as TyList>::First, T>>,
>;

concept! {
    /// A variable of type `T` can be initialized from `Args`.
    ///
    /// No arguments: any non-reference type. One argument: implicit conversion.
    /// Constructors taking more arguments are not modeled.
    pub struct Constructible<T: Ty, Args: TyList> = [
        Destructible<T>,
        Is<InitializableFrom<T, Args>>,
    ];
}

concept! {
    pub struct DefaultConstructible<T: Ty> = [Constructible<T, ()>];
}

concept! {
    pub struct MoveConstructible<T: Ty> = [Constructible<T, (T,)>, ConvertibleTo<T, T>];
}

concept! {
    /// Constructible from a (possibly const) lvalue or a const rvalue of itself.
    pub struct CopyConstructible<T: Ty> = [
        MoveConstructible<T>,
        Constructible<T, (AddLref<T>,)>,
        ConvertibleTo<AddLref<T>, T>,
        Constructible<T, (ConstLref<T>,)>,
        ConvertibleTo<ConstLref<T>, T>,
        Constructible<T, (AddConst<T>,)>,
        ConvertibleTo<AddConst<T>, T>,
    ];
}

// =============================================================================
// Comparison
// =============================================================================

type ToArithmetic<T> = Or<
    <KindOf<T> as Kind>::IsArithmetic,
    <<ObjOf<T> as Object>::ConvertsTo as ObjList>::AnyArithmetic,
>;

type BothValid<T, U> = And<ValidOf<T>, ValidOf<U>>;

type BuiltinOperands<T, U> = And<ToArithmetic<T>, ToArithmetic<U>>;

// Registered on one operand's object for the other operand's object or one of its bases.
type EqualityRegistered<T, U> = Or<
    <<ObjOf<T> as Object>::Equality as ObjList>::AnyBaseOf<ObjOf<U>>,
    <<ObjOf<U> as Object>::Equality as ObjList>::AnyBaseOf<ObjOf<T>>,
>;

type OrderingRegistered<T, U> = Or<
    <<ObjOf<T> as Object>::Ordering as ObjList>::AnyBaseOf<ObjOf<U>>,
    <<ObjOf<U> as Object>::Ordering as ObjList>::AnyBaseOf<ObjOf<T>>,
>;

/// `t == u` and `t != u` are valid for `const T&` and `const U&` operands.
type EqualityOp<T, U> = And<BothValid<T, U>, Or<BuiltinOperands<T, U>, EqualityRegistered<T, U>>>;

/// `t < u`, `t > u`, `t <= u` and `t >= u` are valid.
type OrderingOp<T, U> = And<BothValid<T, U>, Or<BuiltinOperands<T, U>, OrderingRegistered<T, U>>>;

concept! {
    /// Usable in boolean contexts: movable, converts to `bool`, and compares
    /// with itself and with `bool`.
    pub struct Boolean<B: Ty> = [
        Movable<RemoveCvref<B>>,
        ConvertibleTo<Clref<B>, bool>,
        Is<EqualityOp<B, B>>,
        Is<EqualityOp<B, bool>>,
        Is<EqualityOp<bool, B>>,
    ];
}

concept! {
    /// `==` and `!=` are valid between `T` and `U` in either order.
    pub struct WeaklyEqualityComparableWith<T: Ty, U: Ty> = [
        Is<EqualityOp<T, U>>,
        Is<EqualityOp<U, T>>,
    ];
}

concept! {
    pub struct EqualityComparable<T: Ty> = [WeaklyEqualityComparableWith<T, T>];
}

concept! {
    /// Mixed comparison, consistent with comparing through the common reference.
    pub struct EqualityComparableWith<T: Ty, U: Ty>
    where CommonReferenceOf<Clref<T>, Clref<U>>
    = [
        EqualityComparable<T>,
        EqualityComparable<U>,
        CommonReferenceWith<Clref<T>, Clref<U>>,
        EqualityComparable<CommonReference2<Clref<T>, Clref<U>>>,
        WeaklyEqualityComparableWith<T, U>,
    ];
}

concept! {
    pub struct StrictTotallyOrdered<T: Ty> = [EqualityComparable<T>, Is<OrderingOp<T, T>>];
}

concept! {
    pub struct StrictTotallyOrderedWith<T: Ty, U: Ty>
    where CommonReferenceOf<Clref<T>, Clref<U>>
    = [
        StrictTotallyOrdered<T>,
        StrictTotallyOrdered<U>,
        CommonReferenceWith<Clref<T>, Clref<U>>,
        StrictTotallyOrdered<CommonReference2<Clref<T>, Clref<U>>>,
        EqualityComparableWith<T, U>,
        Is<OrderingOp<T, U>>,
        Is<OrderingOp<U, T>>,
    ];
}

// =============================================================================
// Object concepts
// =============================================================================

type IsObjectType<T> = And<ValidOf<T>, <RefOf<T> as RefKind>::IsNone>;

concept! {
    /// An object type that can be moved and swapped.
    pub struct Movable<T: Ty> = [
        Is<IsObjectType<T>>,
        MoveConstructible<T>,
        Assignable<AddLref<T>, T>,
        Swappable<T>,
    ];
}

concept! {
    pub struct Copyable<T: Ty> = [
        CopyConstructible<T>,
        Movable<T>,
        Assignable<AddLref<T>, ConstLref<T>>,
    ];
}

concept! {
    pub struct Semiregular<T: Ty> = [Copyable<T>, DefaultConstructible<T>];
}

concept! {
    pub struct Regular<T: Ty> = [Semiregular<T>, EqualityComparable<T>];
}

// =============================================================================
// Callables
// =============================================================================

concept! {
    /// `F` can be called with arguments of the types in `Args`.
    pub struct Invocable<F: Ty, Args: TyList> = [Valid<InvokeResult<F, Args>>];
}

concept! {
    /// [`Invocable`], and the call is equality preserving (not checked).
    pub struct RegularInvocable<F: Ty, Args: TyList> = [Invocable<F, Args>];
}

concept! {
    /// A call yielding a [`Boolean`] result.
    pub struct Predicate<F: Ty, Args: TyList> = [
        RegularInvocable<F, Args>,
        Boolean<InvokeResult<F, Args>>,
    ];
}

concept! {
    /// A binary predicate over every pairing of `T` and `U`.
    pub struct Relation<R: Ty, T: Ty, U: Ty> = [
        Predicate<R, (T, T)>,
        Predicate<R, (U, U)>,
        Predicate<R, (T, U)>,
        Predicate<R, (U, T)>,
    ];
}

concept! {
    /// A [`Relation`] imposing a strict weak order (not checked).
    pub struct StrictWeakOrder<R: Ty, T: Ty, U: Ty> = [Relation<R, T, U>];
}

// =============================================================================
// Detection
// =============================================================================

/// `Op<Args...>` is well-formed.
pub struct Detected<Op, Args>(PhantomData<(Op, Args)>);

impl<Op: Operation<Args>, Args: TyList> Clause for Detected<Op, Args> {
    type Holds = ValidOf<DetectedT<Op, Args>>;
}

/// `Op<Args...>` is well-formed and is exactly `Expected`.
pub struct DetectedExact<Expected, Op, Args>(PhantomData<(Expected, Op, Args)>);

impl<E: Ty, Op: Operation<Args>, Args: TyList> Clause for DetectedExact<E, Op, Args> {
    type Holds = IsDetectedExact<E, Op, Args>;
}

/// `Op<Args...>` is well-formed and converts to `To`.
pub struct DetectedConvertible<To, Op, Args>(PhantomData<(To, Op, Args)>);

impl<To: Ty, Op: Operation<Args>, Args: TyList> Clause for DetectedConvertible<To, Op, Args> {
    type Holds = IsDetectedConvertible<To, Op, Args>;
}

concept_fn! {
    Same<T: Ty, U: Ty>;
    DerivedFrom<D: Ty, B: Ty>;
    ConvertibleTo<F: Ty, T: Ty>;
    CommonReferenceWith<T: Ty, U: Ty>;
    CommonWith<T: Ty, U: Ty>;
    Integral<T: Ty>;
    SignedIntegral<T: Ty>;
    UnsignedIntegral<T: Ty>;
    Assignable<L: Ty, R: Ty>;
    Swappable<T: Ty>;
    SwappableWith<T: Ty, U: Ty>;
    Destructible<T: Ty>;
    Constructible<T: Ty, Args: TyList>;
    DefaultConstructible<T: Ty>;
    MoveConstructible<T: Ty>;
    CopyConstructible<T: Ty>;
    Boolean<B: Ty>;
    WeaklyEqualityComparableWith<T: Ty, U: Ty>;
    EqualityComparable<T: Ty>;
    EqualityComparableWith<T: Ty, U: Ty>;
    StrictTotallyOrdered<T: Ty>;
    StrictTotallyOrderedWith<T: Ty, U: Ty>;
    Movable<T: Ty>;
    Copyable<T: Ty>;
    Semiregular<T: Ty>;
    Regular<T: Ty>;
    Invocable<F: Ty, Args: TyList>;
    RegularInvocable<F: Ty, Args: TyList>;
    Predicate<F: Ty, Args: TyList>;
    Relation<R: Ty, T: Ty, U: Ty>;
    StrictWeakOrder<R: Ty, T: Ty, U: Ty>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty;

    #[test]
    fn test_integral_family() {
        assert!(integral::<ty!(const i16)>());
        assert!(!integral::<ty!(i32 &)>());
        assert!(!integral::<f32>());
        assert!(signed_integral::<i64>());
        assert!(!signed_integral::<u64>());
        assert!(unsigned_integral::<bool>());
        assert!(!unsigned_integral::<f64>());
    }

    #[test]
    fn test_assignable_lhs_category() {
        assert!(assignable::<ty!(i32 &), i32>());
        assert!(assignable::<ty!(volatile u8 &), ty!(const u8 &)>());
        assert!(!assignable::<ty!(const i32 &), i32>());
        assert!(!assignable::<ty!(i32 &&), i32>());
        assert!(!assignable::<i32, i32>());
    }

    #[test]
    fn test_constructible_arity() {
        assert!(constructible::<i32, ()>());
        assert!(!constructible::<ty!(i32 &), ()>());
        assert!(constructible::<ty!(const i32 &), (i64,)>());
        assert!(!constructible::<ty!(i32 &), (i64,)>());
        assert!(!constructible::<i32, (i32, i32)>());
    }

    #[test]
    fn test_copy_constructible() {
        assert!(copy_constructible::<f32>());
        assert!(move_constructible::<ty!(i32 &&)>());
        assert!(!destructible::<Nonesuch>());
    }

    #[test]
    fn test_object_concepts_on_arithmetic() {
        assert!(movable::<i32>());
        assert!(!movable::<ty!(i32 &)>());
        assert!(!movable::<ty!(const i32)>());
        assert!(regular::<f64>());
        assert!(default_constructible::<u8>());
        assert!(!default_constructible::<ty!(const i32 &)>());
    }

    #[test]
    fn test_swap_needs_matching_lvalues() {
        assert!(swappable::<i32>());
        assert!(!swappable::<ty!(const i32)>());
        assert!(swappable_with::<ty!(i32 &), ty!(i32 &)>());
        assert!(!swappable_with::<ty!(i32 &), ty!(i64 &)>());
        assert!(!swappable_with::<i32, i32>());
    }

    #[test]
    fn test_builtin_comparisons() {
        assert!(boolean::<bool>());
        assert!(boolean::<ty!(const i32 &)>());
        assert!(!boolean::<Nonesuch>());
        assert!(equality_comparable_with::<i32, f64>());
        assert!(strict_totally_ordered_with::<u8, ty!(const i64 &)>());
    }
}

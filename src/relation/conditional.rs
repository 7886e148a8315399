//! The conditional operator.
//!
//! `Conditional<E1, E2>` is the type of `b ? e1 : e2` where `e1: E1` and
//! `e2: E2`. Reference kinds double as value categories: `T&` is an lvalue,
//! `T&&` an xvalue, `T` a prvalue.
//!
//! ```text
//!  same type, same glvalue category ─────────────────────────────► E1
//!  differing types with a class operand, or
//!  same-category glvalues differing only in cv ──► try E1→E2 and E2→E1
//!        both succeed ─► ambiguous (Nonesuch)
//!        one succeeds ─► convert that operand, continue below
//!  same-category glvalues of one type ───────────────────────────► that glvalue
//!  otherwise prvalue: same type after lvalue-to-rvalue ──────────► that type
//!                     both arithmetic ─────────► usual arithmetic conversions
//!                     else ──────────────────────────────────────► Nonesuch
//! ```
//!
//! Each box is a query ([`Resolve`]); the conversion outcome picks exactly
//! one continuation through [`ConvertOne`].

use core::marker::PhantomData;

use crate::model::{
    Build, Canon, CvOf, CvQual, KindOf, Kind, Nonesuch, NoRef, ObjOf, RefKind, RefOf, Ty,
    UsualArithmetic, ValidOf,
};
use crate::primitives::{Absent, And, Branch, Elif, Not, Or, Present, Ready, Resolve, Select};
use crate::relation::convert::{Convertible, RefCompatible};
use crate::relation::identity::{IsSame, SameObject, SameOrDerived};

type IsClass<T> = <KindOf<T> as Kind>::IsClass;
type IsArithmetic<T> = <KindOf<T> as Kind>::IsArithmetic;
type IsGlvalue<T> = <RefOf<T> as RefKind>::IsRef;
type IsLvalue<T> = <RefOf<T> as RefKind>::IsLvalue;
type IsXvalue<T> = <RefOf<T> as RefKind>::IsRvalue;
type IsPrvalue<T> = <RefOf<T> as RefKind>::IsNone;

type AnyClass<A, B> = Or<IsClass<A>, IsClass<B>>;
type SameCategory<A, B> = <RefOf<A> as RefKind>::Same<RefOf<B>>;
type SameCv<A, B> = <CvOf<A> as CvQual>::Same<CvOf<B>>;

/// Same type once references are ignored.
type SameReferent<A, B> = And<SameObject<ObjOf<A>, ObjOf<B>>, SameCv<A, B>>;

/// The prvalue an operand turns into after lvalue-to-rvalue conversion.
pub type Prvalue<E> = Build<ObjOf<E>, <KindOf<E> as Kind>::PrvalueCv<CvOf<E>>, NoRef>;

/// Type of `b ? e1 : e2`, or `Nonesuch`.
pub type Conditional<E1, E2> = <ConditionalOf<E1, E2> as Resolve>::Out;

/// Query for [`Conditional`].
pub struct ConditionalOf<E1, E2>(PhantomData<(E1, E2)>);

type BothValid<E1, E2> = And<ValidOf<E1>, ValidOf<E2>>;

impl<E1: Ty, E2: Ty> Resolve for ConditionalOf<E1, E2>
where
    BothValid<E1, E2>: Branch<Operands<E1, E2>, Ready<Nonesuch>>,
{
    type Out = <BothValid<E1, E2> as Branch<Operands<E1, E2>, Ready<Nonesuch>>>::Out;
}

/// Two valid operands.
pub struct Operands<E1, E2>(PhantomData<(E1, E2)>);

impl<E1: Ty, E2: Ty> Resolve for Operands<E1, E2>
where
    NeedsConversion<E1, E2>: Branch<Converted<E1, E2>, Finish<E1, E2>>,
{
    type Out = <NeedsConversion<E1, E2> as Branch<Converted<E1, E2>, Finish<E1, E2>>>::Out;
}

type NeedsConversion<E1, E2> = Or<
    And<Not<SameReferent<E1, E2>>, AnyClass<E1, E2>>,
    And<
        And<IsGlvalue<E1>, SameCategory<E1, E2>>,
        And<SameObject<ObjOf<E1>, ObjOf<E2>>, Not<SameCv<E1, E2>>>,
    >,
>;

// =============================================================================
// Operand conversion
// =============================================================================

// E1 binds directly to a reference to E2: an lvalue to `T2&`, or an xvalue
// or class prvalue to `T2&&`.
type BindsDirectly<E1, E2> = And<
    RefCompatible<E1, E2>,
    Or<
        And<IsLvalue<E2>, IsLvalue<E1>>,
        And<IsXvalue<E2>, Or<IsXvalue<E1>, And<IsPrvalue<E1>, IsClass<E1>>>>,
    >,
>;

// Prvalue target, tried when E2 is a prvalue or when direct binding failed with a class operand.
type PrvalueApplies<E1, E2> = Or<IsPrvalue<E2>, And<Not<BindsDirectly<E1, E2>>, AnyClass<E1, E2>>>;

type ClassesRelated<E1, E2> = And<
    And<IsClass<E1>, IsClass<E2>>,
    Or<SameOrDerived<ObjOf<E1>, ObjOf<E2>>, SameOrDerived<ObjOf<E2>, ObjOf<E1>>>,
>;

// Related classes: only toward a base with at least E1's qualification.
// Otherwise any implicit conversion to E2's prvalue.
type PrvalueConverts<E1, E2> = Elif<
    ClassesRelated<E1, E2>,
    And<SameOrDerived<ObjOf<E1>, ObjOf<E2>>, <CvOf<E2> as CvQual>::Covers<CvOf<E1>>>,
    Convertible<E1, Prvalue<E2>>,
>;

/// E1 can be converted to match E2.
type Converts<E1, E2> = Or<BindsDirectly<E1, E2>, And<PrvalueApplies<E1, E2>, PrvalueConverts<E1, E2>>>;

/// What E1 becomes when it converts toward E2.
type Target<E1, E2> = Select<BindsDirectly<E1, E2>, Canon<E2>, Prvalue<E2>>;

/// Operands that need a conversion first.
pub struct Converted<E1, E2>(PhantomData<(E1, E2)>);

type Outcome<E1, E2> = (Converts<E1, E2>, Converts<E2, E1>);

impl<E1: Ty, E2: Ty> Resolve for Converted<E1, E2>
where
    Outcome<E1, E2>: ConvertOne<E1, E2>,
{
    type Out = <Outcome<E1, E2> as ConvertOne<E1, E2>>::Out;
}

/// Continuation picked by `(E1 converts to E2, E2 converts to E1)`.
pub trait ConvertOne<E1, E2> {
    type Out: Ty;
}

// Both directions: ambiguous.
impl<E1, E2> ConvertOne<E1, E2> for (Present, Present) {
    type Out = Nonesuch;
}

impl<E1: Ty, E2: Ty> ConvertOne<E1, E2> for (Present, Absent)
where
    Finish<Target<E1, E2>, E2>: Resolve,
{
    type Out = <Finish<Target<E1, E2>, E2> as Resolve>::Out;
}

impl<E1: Ty, E2: Ty> ConvertOne<E1, E2> for (Absent, Present)
where
    Finish<E1, Target<E2, E1>>: Resolve,
{
    type Out = <Finish<E1, Target<E2, E1>> as Resolve>::Out;
}

impl<E1: Ty, E2: Ty> ConvertOne<E1, E2> for (Absent, Absent)
where
    Finish<E1, E2>: Resolve,
{
    type Out = <Finish<E1, E2> as Resolve>::Out;
}

// =============================================================================
// Result
// =============================================================================

type SameGlvalue<X, Y> = And<IsGlvalue<X>, And<SameCategory<X, Y>, SameReferent<X, Y>>>;

/// Result once the operands have been matched up.
pub struct Finish<X, Y>(PhantomData<(X, Y)>);

impl<X: Ty, Y: Ty> Resolve for Finish<X, Y> {
    type Out = Select<SameGlvalue<X, Y>, Canon<X>, PrvalueResult<X, Y>>;
}

type PrvalueResult<X, Y> = Select<
    IsSame<Prvalue<X>, Prvalue<Y>>,
    Prvalue<X>,
    Select<
        And<IsArithmetic<X>, IsArithmetic<Y>>,
        UsualArithmetic<ObjOf<X>, ObjOf<Y>>,
        Nonesuch,
    >,
>;

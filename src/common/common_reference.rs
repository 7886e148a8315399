//! Pairwise `common_reference`.
//!
//! Four tiers, first success wins:
//!
//! ```text
//! simple ──► basic (user entries + xref) ──► b ? t() : u() ──► common_type
//! ```
//!
//! Every tier is a query. A tier is resolved only when all earlier ones gave
//! `Nonesuch`, and the simple tier picks its rule from the two reference
//! kinds through [`SimpleRule`].

use core::marker::PhantomData;

use crate::common::common_type::CommonTypeOf;
use crate::model::{
    Canon, LRef, NoRef, Nonesuch, ObjOf, Object, RRef, RefKind, RefOf, RefSpecs, Ty, ValidOf,
};
use crate::primitives::{And, Branch, FirstValid, Ready, Resolve, Select};
use crate::relation::conditional::{Conditional, ConditionalOf};
use crate::relation::Convertible;
use crate::transform::{AddConst, AddLref, CopyCv, RemoveRef, Rref, XRef};

/// `common_reference<T, U>`, or `Nonesuch`.
pub type CommonReference2<T, U> = <CommonReferenceOf<T, U> as Resolve>::Out;

/// Query for [`CommonReference2`].
pub struct CommonReferenceOf<T, U>(PhantomData<(T, U)>);

type BothValid<T, U> = And<ValidOf<T>, ValidOf<U>>;

impl<T: Ty, U: Ty> Resolve for CommonReferenceOf<T, U>
where
    BothValid<T, U>: Branch<SimpleTier<T, U>, Ready<Nonesuch>>,
{
    type Out = <BothValid<T, U> as Branch<SimpleTier<T, U>, Ready<Nonesuch>>>::Out;
}

/// Tier 1, falling through to [`BasicTier`].
pub struct SimpleTier<T, U>(PhantomData<(T, U)>);

impl<T: Ty, U: Ty> Resolve for SimpleTier<T, U>
where
    SimpleOf<T, U>: Resolve,
    FirstValid<SimpleCommonReference<T, U>, BasicTier<T, U>>: Resolve,
{
    type Out = <FirstValid<SimpleCommonReference<T, U>, BasicTier<T, U>> as Resolve>::Out;
}

/// Tier 2, falling through to [`ConditionalTier`].
pub struct BasicTier<T, U>(PhantomData<(T, U)>);

impl<T: Ty, U: Ty> Resolve for BasicTier<T, U>
where
    FirstValid<BasicCommonReference<T, U>, ConditionalTier<T, U>>: Resolve,
{
    type Out = <FirstValid<BasicCommonReference<T, U>, ConditionalTier<T, U>> as Resolve>::Out;
}

/// Tier 3, falling through to `common_type`.
pub struct ConditionalTier<T, U>(PhantomData<(T, U)>);

impl<T: Ty, U: Ty> Resolve for ConditionalTier<T, U>
where
    ConditionalOf<T, U>: Resolve,
    FirstValid<Conditional<T, U>, CommonTypeOf<T, U>>: Resolve,
{
    type Out = <FirstValid<Conditional<T, U>, CommonTypeOf<T, U>> as Resolve>::Out;
}

// =============================================================================
// Simple common reference
// =============================================================================

/// `false ? copy_cv(A, B)& : copy_cv(B, A)&`, kept only if it is a reference.
///
/// `A` and `B` are the referents.
pub type LvalueScr<A, B> = <LvalueScrOf<A, B> as Resolve>::Out;

/// Both rvalue references: the rvalue form of the lvalue result, if both operands convert to it.
pub type RvalueScr<A, B> = <RvalueScrOf<A, B> as Resolve>::Out;

/// `A&` with `B&&`: `lvalue_scr(A, const B)` if `B&&` converts to it.
pub type MixedScr<A, B> = <MixedScrOf<A, B> as Resolve>::Out;

/// Simple common reference of two reference types, or `Nonesuch`.
pub type SimpleCommonReference<T, U> = <SimpleOf<T, U> as Resolve>::Out;

/// Query for [`LvalueScr`].
pub struct LvalueScrOf<A, B>(PhantomData<(A, B)>);

type LvalueCond<A, B> = ConditionalOf<AddLref<CopyCv<A, B>>, AddLref<CopyCv<B, A>>>;

type KeepReference<C> = Select<<RefOf<C> as RefKind>::IsRef, C, Nonesuch>;

impl<A: Ty, B: Ty> Resolve for LvalueScrOf<A, B>
where
    LvalueCond<A, B>: Resolve,
{
    type Out = KeepReference<<LvalueCond<A, B> as Resolve>::Out>;
}

/// Query for [`RvalueScr`].
pub struct RvalueScrOf<A, B>(PhantomData<(A, B)>);

impl<A: Ty, B: Ty> Resolve for RvalueScrOf<A, B>
where
    LvalueScrOf<A, B>: Resolve,
{
    type Out = Select<
        And<
            Convertible<Rref<A>, Rref<LvalueScr<A, B>>>,
            Convertible<Rref<B>, Rref<LvalueScr<A, B>>>,
        >,
        Rref<LvalueScr<A, B>>,
        Nonesuch,
    >;
}

/// Query for [`MixedScr`].
pub struct MixedScrOf<A, B>(PhantomData<(A, B)>);

impl<A: Ty, B: Ty> Resolve for MixedScrOf<A, B>
where
    LvalueScrOf<A, AddConst<B>>: Resolve,
{
    type Out = Select<
        Convertible<Rref<B>, LvalueScr<A, AddConst<B>>>,
        LvalueScr<A, AddConst<B>>,
        Nonesuch,
    >;
}

/// Query for [`SimpleCommonReference`].
pub struct SimpleOf<T, U>(PhantomData<(T, U)>);

type RefPair<T, U> = (RefOf<T>, RefOf<U>);

impl<T: Ty, U: Ty> Resolve for SimpleOf<T, U>
where
    RefPair<T, U>: SimpleRule<RemoveRef<T>, RemoveRef<U>>,
{
    type Out = <RefPair<T, U> as SimpleRule<RemoveRef<T>, RemoveRef<U>>>::Out;
}

/// Rule picked by the two reference kinds; `A` and `B` are the referents.
pub trait SimpleRule<A, B> {
    type Out: Ty;
}

impl<A: Ty, B: Ty> SimpleRule<A, B> for (LRef, LRef)
where
    LvalueScrOf<A, B>: Resolve,
{
    type Out = LvalueScr<A, B>;
}

impl<A: Ty, B: Ty> SimpleRule<A, B> for (RRef, RRef)
where
    RvalueScrOf<A, B>: Resolve,
{
    type Out = RvalueScr<A, B>;
}

impl<A: Ty, B: Ty> SimpleRule<A, B> for (LRef, RRef)
where
    MixedScrOf<A, B>: Resolve,
{
    type Out = MixedScr<A, B>;
}

impl<A: Ty, B: Ty> SimpleRule<A, B> for (RRef, LRef)
where
    MixedScrOf<B, A>: Resolve,
{
    type Out = MixedScr<B, A>;
}

// A non-reference on either side.
macro_rules! no_simple_rule {
    ($(($l:ty, $r:ty)),* $(,)?) => {
        $(
            impl<A, B> SimpleRule<A, B> for ($l, $r) {
                type Out = Nonesuch;
            }
        )*
    };
}

no_simple_rule!((NoRef, NoRef), (NoRef, LRef), (NoRef, RRef), (LRef, NoRef), (RRef, NoRef));

// =============================================================================
// Basic common reference
// =============================================================================

/// The user entry on `T`'s object for `U`'s object, applied to both qualifier transforms.
pub type BasicCommonReference<T, U> = Canon<
    <<ObjOf<T> as Object>::CommonReferences as RefSpecs>::Lookup<ObjOf<U>, XRef<T>, XRef<U>>,
>;

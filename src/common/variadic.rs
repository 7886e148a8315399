//! Argument packs and the left folds over them.
//!
//! Packs are tuples of modeled types, up to eight elements:
//!
//! ```text
//! ()          -> Nonesuch
//! (T,)        -> common_type<T, T>        / T
//! (T, U)      -> pairwise
//! (T, U, ..)  -> (pairwise(T, U), ..)     (Nonesuch stays Nonesuch)
//! ```

use core::marker::PhantomData;

use crate::common::common_reference::{CommonReference2, CommonReferenceOf};
use crate::common::common_type::{CommonType2, CommonTypeOf};
use crate::model::{Nonesuch, Ty};
use crate::primitives::{Peano, Resolve, S, Z};

/// A pack of modeled types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a pack of modeled types",
    note = "packs are tuples of at most eight modeled types, e.g. `(i32,)` or `(A, B)`"
)]
pub trait TyList: 'static {
    type Len: Peano;
    /// First element, or `Nonesuch`.
    type First: Ty;
    /// Second element, or `Nonesuch`.
    type Second: Ty;
    /// The pack without its first element.
    type Rest: TyList;
}

impl TyList for () {
    type Len = Z;
    type First = Nonesuch;
    type Second = Nonesuch;
    type Rest = ();
}

impl<A: Ty> TyList for (A,) {
    type Len = S<Z>;
    type First = A;
    type Second = Nonesuch;
    type Rest = ();
}

macro_rules! impl_ty_list {
    ($($rest:ident),+) => {
        impl<A: Ty, B: Ty, $($rest: Ty),*> TyList for (A, B, $($rest),*) {
            type Len = S<<(B, $($rest),*) as TyList>::Len>;
            type First = A;
            type Second = B;
            type Rest = (B, $($rest),*);
        }
    };
    () => {
        impl<A: Ty, B: Ty> TyList for (A, B) {
            type Len = S<S<Z>>;
            type First = A;
            type Second = B;
            type Rest = (B,);
        }
    };
}

impl_ty_list!();
impl_ty_list!(C);
impl_ty_list!(C, D);
impl_ty_list!(C, D, E);
impl_ty_list!(C, D, E, F);
impl_ty_list!(C, D, E, F, G);
impl_ty_list!(C, D, E, F, G, H);

/// Left fold of `common_type` over a pack.
pub struct FoldCommonType<Ts>(PhantomData<Ts>);

/// Left fold of `common_reference` over a pack.
pub struct FoldCommonReference<Ts>(PhantomData<Ts>);

impl Resolve for FoldCommonType<()> {
    type Out = Nonesuch;
}

impl Resolve for FoldCommonReference<()> {
    type Out = Nonesuch;
}

impl<A: Ty> Resolve for FoldCommonType<(A,)>
where
    CommonTypeOf<A, A>: Resolve,
{
    type Out = CommonType2<A, A>;
}

impl<A: Ty> Resolve for FoldCommonReference<(A,)> {
    type Out = A;
}

impl<A: Ty, B: Ty> Resolve for FoldCommonType<(A, B)>
where
    CommonTypeOf<A, B>: Resolve,
{
    type Out = CommonType2<A, B>;
}

impl<A: Ty, B: Ty> Resolve for FoldCommonReference<(A, B)>
where
    CommonReferenceOf<A, B>: Resolve,
{
    type Out = CommonReference2<A, B>;
}

// (A, B, Rest..) folds into (pairwise(A, B), Rest..).
macro_rules! impl_fold {
    ($($rest:ident),+) => {
        impl<A: Ty, B: Ty, $($rest: Ty),+> Resolve for FoldCommonType<(A, B, $($rest),+)>
        where
            CommonTypeOf<A, B>: Resolve,
            FoldCommonType<(CommonType2<A, B>, $($rest),+)>: Resolve,
        {
            type Out = <FoldCommonType<(CommonType2<A, B>, $($rest),+)> as Resolve>::Out;
        }

        impl<A: Ty, B: Ty, $($rest: Ty),+> Resolve for FoldCommonReference<(A, B, $($rest),+)>
        where
            CommonReferenceOf<A, B>: Resolve,
            FoldCommonReference<(CommonReference2<A, B>, $($rest),+)>: Resolve,
        {
            type Out = <FoldCommonReference<(CommonReference2<A, B>, $($rest),+)> as Resolve>::Out;
        }
    };
}

impl_fold!(C);
impl_fold!(C, D);
impl_fold!(C, D, E);
impl_fold!(C, D, E, F);
impl_fold!(C, D, E, F, G);
impl_fold!(C, D, E, F, G, H);

/// `common_type<Ts...>` for a tuple pack.
pub type CommonType<Ts> = <FoldCommonType<Ts> as Resolve>::Out;

/// `common_reference<Ts...>` for a tuple pack.
pub type CommonReference<Ts> = <FoldCommonReference<Ts> as Resolve>::Out;

/// `CommonType` over a comma-separated list.
///
/// # Usage
/// ```
/// use tola_concepts::{common_type, is_same};
///
/// assert!(is_same::<common_type!(i32, i16, u8), i32>());
/// ```
#[macro_export]
macro_rules! common_type {
    ($($t:ty),* $(,)?) => { $crate::CommonType<($($t,)*)> };
}

/// `CommonReference` over a comma-separated list.
#[macro_export]
macro_rules! common_reference {
    ($($t:ty),* $(,)?) => { $crate::CommonReference<($($t,)*)> };
}

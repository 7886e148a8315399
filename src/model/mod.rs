//! # Layer 1: The type model
//!
//! C++-style types are modeled as Rust types implementing [`Ty`]:
//!
//! ```text
//! const Base&&   ==  Qual<Base, Const, RRef>
//! int            ==  i32                      (a plain object is its own spelling)
//! <failure>      ==  Nonesuch
//! ```
//!
//! A modeled type is an [`Object`] plus a [`CvQual`] plus a [`RefKind`].
//! Operations always return the canonical spelling: the bare object when
//! unqualified and not a reference, `Qual<..>` otherwise, and `Nonesuch` when
//! the object is the sentinel.

use core::marker::PhantomData;

use crate::primitives::{Absent, Bool};

pub mod arith;
pub mod list;
pub mod name;
pub mod object;
pub mod qual;

pub use arith::{
    Rank, RankDouble, RankFloat, RankInt, RankLong, RankUInt, RankULong, UsualArithmetic,
};
pub use list::{
    HCons, HNil, ObjList, Params, RefRule, RefSpecs, Sig, SigList, Spec, TypeSpecs, WithTQual,
    WithUQual,
};
pub use name::{type_name, TyName};
pub use object::{
    Arithmetic, Class, Float, Kind, Object, ObjectEq, Sentinel, SignedInt, UnsignedInt,
};
pub use qual::{Const, ConstVolatile, CvQual, LRef, NoCv, NoRef, RRef, RefKind, Volatile};

// =============================================================================
// Ty
// =============================================================================

/// A modeled (C++-style) type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a modeled type",
    label = "not registered with the type model",
    note = "derive `Object` for the type, or wrap a registered object in `Qual<..>` / `ty!(..)`"
)]
pub trait Ty: 'static {
    /// `Absent` only for the failure sentinel.
    type Valid: Bool;
    /// The type with references and top-level cv stripped.
    type Obj: Object;
    type Cv: CvQual;
    type Ref: RefKind;
}

/// An object type with cv-qualification `C` and reference kind `R`.
///
/// Prefer [`ty!`](crate::ty) for spelling these.
pub struct Qual<O, C = NoCv, R = NoRef>(PhantomData<(O, C, R)>);

impl<O: Object, C: CvQual, R: RefKind> Ty for Qual<O, C, R> {
    type Valid = <O as Ty>::Valid;
    type Obj = O;
    type Cv = C;
    type Ref = R;
}

/// The "no such type" sentinel.
///
/// Uninhabited. Every transform maps it to itself, and every predicate
/// involving it (other than identity) is false.
#[derive(Debug)]
pub enum Nonesuch {}

impl Ty for Nonesuch {
    type Valid = Absent;
    type Obj = Nonesuch;
    type Cv = NoCv;
    type Ref = NoRef;
}

// =============================================================================
// Component access and canonical spelling
// =============================================================================

pub type ObjOf<T> = <T as Ty>::Obj;
pub type CvOf<T> = <T as Ty>::Cv;
pub type RefOf<T> = <T as Ty>::Ref;
pub type ValidOf<T> = <T as Ty>::Valid;
pub type KindOf<T> = <<T as Ty>::Obj as Object>::Kind;

/// Canonical spelling of object `O` with qualification `C` and kind `R`.
pub type Build<O, C, R> = <C as CvQual>::Build<O, R>;

/// Canonical spelling of any modeled type.
pub type Canon<T> = Build<ObjOf<T>, CvOf<T>, RefOf<T>>;

// =============================================================================
// ty! - C++-like spelling
// =============================================================================

/// Spell a modeled type in C++-like syntax.
///
/// # Usage
/// ```
/// use tola_concepts::{ty, Qual, Const, ConstVolatile, LRef, RRef, NoCv};
///
/// fn same<A: 'static, B: 'static>() -> bool {
///     core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
/// }
///
/// assert!(same::<ty!(i32), i32>());
/// assert!(same::<ty!(const i32 &), Qual<i32, Const, LRef>>());
/// assert!(same::<ty!(const volatile u8 &&), Qual<u8, ConstVolatile, RRef>>());
/// assert!(same::<ty!(i64 &&), Qual<i64, NoCv, RRef>>());
/// ```
#[macro_export]
macro_rules! ty {
    (const volatile $($p:ident)::+ &&) => { $crate::Qual<$($p)::+, $crate::ConstVolatile, $crate::RRef> };
    (const volatile $($p:ident)::+ &) => { $crate::Qual<$($p)::+, $crate::ConstVolatile, $crate::LRef> };
    (const volatile $($p:ident)::+) => { $crate::Qual<$($p)::+, $crate::ConstVolatile, $crate::NoRef> };
    (const $($p:ident)::+ &&) => { $crate::Qual<$($p)::+, $crate::Const, $crate::RRef> };
    (const $($p:ident)::+ &) => { $crate::Qual<$($p)::+, $crate::Const, $crate::LRef> };
    (const $($p:ident)::+) => { $crate::Qual<$($p)::+, $crate::Const, $crate::NoRef> };
    (volatile $($p:ident)::+ &&) => { $crate::Qual<$($p)::+, $crate::Volatile, $crate::RRef> };
    (volatile $($p:ident)::+ &) => { $crate::Qual<$($p)::+, $crate::Volatile, $crate::LRef> };
    (volatile $($p:ident)::+) => { $crate::Qual<$($p)::+, $crate::Volatile, $crate::NoRef> };
    ($($p:ident)::+ &&) => { $crate::Qual<$($p)::+, $crate::NoCv, $crate::RRef> };
    ($($p:ident)::+ &) => { $crate::Qual<$($p)::+, $crate::NoCv, $crate::LRef> };
    ($($p:ident)::+) => { $($p)::+ };
}

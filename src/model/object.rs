//! Object types: the unqualified, non-reference core of every modeled type.
//!
//! An object knows its identity, its kind, its direct bases, its implicit
//! conversions in both directions, the operators and call signatures it
//! declares, and the two user extension points (`common_type` and
//! `basic_common_reference` entries keyed on the other operand).

use core::marker::PhantomData;

use crate::model::list::{HNil, ObjList, RefSpecs, SigList, TypeSpecs};
use crate::model::qual::{CvQual, NoCv};
use crate::model::arith::{Rank, RankInt};
use crate::model::{Nonesuch, Ty};
use crate::primitives::{
    Absent, And, Bool, ConstStream, HashStream, IdEnd, Identity, Not, Present, StreamEq, X0,
};

/// An object (class or arithmetic) type.
///
/// Implement with `#[derive(Object)]` or [`impl_object!`](crate::impl_object).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not registered as an object type",
    label = "missing `#[derive(Object)]`",
    note = "register the type with `#[derive(Object)]` or `impl_object!`"
)]
pub trait Object: Ty {
    const NAME: &'static str;

    /// Routing hash of the identity string.
    type Stream: HashStream;
    /// The identity string itself, compared once the hashes agree.
    type Identity: Identity;
    /// `Self` and `O` are the same object. Always [`ObjectEq<Self, O>`].
    type SameAs<O: Object>: Bool;

    type Kind: Kind;
    /// Direct base classes.
    type Bases: ObjList;
    /// Objects this type implicitly converts to (conversion operators).
    type ConvertsTo: ObjList;
    /// Objects that implicitly convert to this type (converting constructors).
    type ConvertsFrom: ObjList;
    /// Objects `Self` can be compared with by `==` and `!=`, in either order.
    type Equality: ObjList;
    /// Objects `Self` can be compared with by `<`, `>`, `<=` and `>=`, in either order.
    type Ordering: ObjList;
    /// Call signatures of `operator()`.
    type Calls: SigList;
    /// `common_type<Self, Other>` entries.
    type CommonTypes: TypeSpecs;
    /// `basic_common_reference<Self, Other, ..>` entries.
    type CommonReferences: RefSpecs;
}

/// Identity comparison of two objects: hash streams first, then the exact
/// identity strings.
pub type ObjectEq<A, B> = <StreamEq<<A as Object>::Stream, <B as Object>::Stream> as Bool>::AndSame<
    <A as Object>::Identity,
    <B as Object>::Identity,
>;

// =============================================================================
// Kinds
// =============================================================================

/// Category of an object type.
pub trait Kind: 'static {
    type IsClass: Bool;
    type IsArithmetic: Bool;
    type IsIntegral: Bool;
    type IsSigned: Bool;
    type IsUnsigned: Bool;
    /// Rank after integral promotion (meaningless for non-arithmetic kinds).
    type Rank: Rank;
    /// Qualification a prvalue of this kind keeps. Non-class prvalues are never cv-qualified.
    type PrvalueCv<C: CvQual>: CvQual;
}

/// Class type.
#[derive(Debug)]
pub struct Class;

impl Kind for Class {
    type IsClass = Present;
    type IsArithmetic = Absent;
    type IsIntegral = Absent;
    type IsSigned = Absent;
    type IsUnsigned = Absent;
    type Rank = RankInt;
    type PrvalueCv<C: CvQual> = C;
}

/// Arithmetic type: integral or floating, signed or not, with a promotion rank.
pub struct Arithmetic<Integral, Signed, R>(PhantomData<(Integral, Signed, R)>);

impl<I: Bool, S: Bool, R: Rank> Kind for Arithmetic<I, S, R> {
    type IsClass = Absent;
    type IsArithmetic = Present;
    type IsIntegral = I;
    type IsSigned = S;
    type IsUnsigned = And<I, Not<S>>;
    type Rank = R;
    type PrvalueCv<C: CvQual> = NoCv;
}

pub type SignedInt<R> = Arithmetic<Present, Present, R>;
pub type UnsignedInt<R> = Arithmetic<Present, Absent, R>;
pub type Float<R> = Arithmetic<Absent, Present, R>;

/// Kind of the failure sentinel.
#[derive(Debug)]
pub struct Sentinel;

impl Kind for Sentinel {
    type IsClass = Absent;
    type IsArithmetic = Absent;
    type IsIntegral = Absent;
    type IsSigned = Absent;
    type IsUnsigned = Absent;
    type Rank = RankInt;
    type PrvalueCv<C: CvQual> = NoCv;
}

impl Object for Nonesuch {
    const NAME: &'static str = "nonesuch";
    type Stream = ConstStream<X0>;
    type Identity = IdEnd;
    type SameAs<O: Object> = ObjectEq<Self, O>;
    type Kind = Sentinel;
    type Bases = HNil;
    type ConvertsTo = HNil;
    type ConvertsFrom = HNil;
    type Equality = HNil;
    type Ordering = HNil;
    type Calls = HNil;
    type CommonTypes = HNil;
    type CommonReferences = HNil;
}

// =============================================================================
// Registration
// =============================================================================
//
// Three-layer macro architecture to get module_path!() into the identity:
// 1. #[derive(Object)] (proc-macro) generates an impl_object! call
// 2. impl_object! (this decl-macro) expands concat!(module_path!(), ...)
// 3. make_routing_stream! / make_identity! (proc-macros) spell it in const context
//
// The identity string ends with the line and column of the registering macro
// call, so same-named items in function-local modules stay distinct.

/// Register an object type.
///
/// The first six keys are required; `equality`, `ordering` and `invoke` may
/// be left out. `#[derive(Object)]` fills in the defaults.
///
/// # Usage
/// ```
/// use tola_concepts::{impl_object, Class, CommonType, is_same};
/// use tola_concepts::concepts::{equality_comparable, predicate};
///
/// pub struct Meters;
/// pub struct Feet;
///
/// impl_object!(Meters {
///     kind: Class,
///     bases: [],
///     converts_to: [],
///     converts_from: [],
///     common_type: [Feet => Meters],
///     common_reference: [],
///     equality: [Self],
///     invoke: [fn(f64) -> bool],
/// });
/// impl_object!(Feet {
///     kind: Class,
///     bases: [],
///     converts_to: [Meters],
///     converts_from: [],
///     common_type: [],
///     common_reference: [],
/// });
///
/// assert!(is_same::<CommonType<(Meters, Feet)>, Meters>());
/// assert!(equality_comparable::<Meters>());
/// assert!(!equality_comparable::<Feet>());
/// assert!(predicate::<Meters, (i32,)>());
/// ```
#[macro_export]
macro_rules! impl_object {
    ($ty:ident {
        kind: $kind:ty,
        bases: [$($base:ty),* $(,)?],
        converts_to: [$($conv:ty),* $(,)?],
        converts_from: [$($from:ty),* $(,)?],
        common_type: [$($ct_key:ty => $ct_val:ty),* $(,)?],
        common_reference: [$($cr_key:ty => $cr_val:ty),* $(,)?]
        $(, equality: [$($eq:ty),* $(,)?])?
        $(, ordering: [$($ord:ty),* $(,)?])?
        $(, invoke: [$(fn($($arg:ty),* $(,)?) -> $ret:ty),* $(,)?])?
        $(,)?
    }) => {
        impl $crate::Ty for $ty {
            type Valid = $crate::Present;
            type Obj = Self;
            type Cv = $crate::NoCv;
            type Ref = $crate::NoRef;
        }

        impl $crate::Object for $ty {
            const NAME: &'static str = stringify!($ty);
            type Stream = $crate::make_routing_stream!(concat!(
                module_path!(), "::", stringify!($ty), "@", line!(), ":", column!()
            ));
            type Identity = $crate::make_identity!(concat!(
                module_path!(), "::", stringify!($ty), "@", line!(), ":", column!()
            ));
            type SameAs<O: $crate::Object> = $crate::model::object::ObjectEq<Self, O>;
            type Kind = $kind;
            type Bases = $crate::hlist![$($base),*];
            type ConvertsTo = $crate::hlist![$($conv),*];
            type ConvertsFrom = $crate::hlist![$($from),*];
            type Equality = $crate::hlist![$($($eq),*)?];
            type Ordering = $crate::hlist![$($($ord),*)?];
            type Calls = $crate::hlist![$($($crate::Sig<($($arg,)*), $ret>),*)?];
            type CommonTypes = $crate::hlist![$($crate::Spec<$ct_key, $ct_val>),*];
            type CommonReferences = $crate::hlist![$($crate::Spec<$cr_key, $cr_val>),*];
        }

        impl $crate::RefRule for $ty {
            type Apply<TQ: $crate::QualFn, UQ: $crate::QualFn> = Self;
        }
    };
}

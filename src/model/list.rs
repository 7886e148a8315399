//! Type-level lists: bases, conversions, operators, call signatures, and the
//! two specialization tables.

use core::marker::PhantomData;

use crate::common::TyList;
use crate::model::{Canon, Kind, Nonesuch, Object, Ty};
use crate::primitives::{Absent, And, Bool, Not, Or, Peano, Select};
use crate::relation::{Convertible, SameObject, SameOrDerived, StandardConvertible};
use crate::transform::QualFn;

/// Empty list.
#[derive(Debug)]
pub struct HNil;

/// List cell.
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// Build an `HCons` list type.
///
/// # Usage
/// ```ignore
/// type Bases = hlist![Base, Mixin];   // HCons<Base, HCons<Mixin, HNil>>
/// ```
#[macro_export]
macro_rules! hlist {
    () => { $crate::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => { $crate::HCons<$head, $crate::hlist![$($tail),*]> };
}

// =============================================================================
// Object lists (bases, conversion targets)
// =============================================================================

/// A list of objects.
pub trait ObjList: 'static {
    /// Some element is `O`.
    type Contains<O: Object>: Bool;
    /// Some element is `O` or derives from `O`, walking base lists transitively.
    type Reaches<O: Object>: Bool;
    /// Some element is `O` or a base of `O`.
    type AnyBaseOf<O: Object>: Bool;
    /// A prvalue of some element standard-converts to `O`: same, derived, or
    /// both arithmetic.
    type AnyToward<O: Object>: Bool;
    /// An expression of type `F` standard-converts to some element.
    type AnyFrom<F: Ty>: Bool;
    /// Some element is arithmetic.
    type AnyArithmetic: Bool;
}

impl ObjList for HNil {
    type Contains<O: Object> = Absent;
    type Reaches<O: Object> = Absent;
    type AnyBaseOf<O: Object> = Absent;
    type AnyToward<O: Object> = Absent;
    type AnyFrom<F: Ty> = Absent;
    type AnyArithmetic = Absent;
}

type IsArithmetic<O> = <<O as Object>::Kind as Kind>::IsArithmetic;

impl<H: Object, T: ObjList> ObjList for HCons<H, T> {
    type Contains<O: Object> = Or<SameObject<H, O>, <T as ObjList>::Contains<O>>;
    type Reaches<O: Object> = Or<
        SameObject<H, O>,
        Or<<<H as Object>::Bases as ObjList>::Reaches<O>, <T as ObjList>::Reaches<O>>,
    >;
    type AnyBaseOf<O: Object> = Or<SameOrDerived<O, H>, <T as ObjList>::AnyBaseOf<O>>;
    type AnyToward<O: Object> = Or<
        Or<SameOrDerived<H, O>, And<IsArithmetic<H>, IsArithmetic<O>>>,
        <T as ObjList>::AnyToward<O>,
    >;
    type AnyFrom<F: Ty> = Or<StandardConvertible<F, H>, <T as ObjList>::AnyFrom<F>>;
    type AnyArithmetic = Or<IsArithmetic<H>, <T as ObjList>::AnyArithmetic>;
}

// =============================================================================
// Call signatures
// =============================================================================

/// A call signature: parameter tuple and return type.
pub struct Sig<Params, Ret>(PhantomData<(Params, Ret)>);

/// A parameter tuple, `()` up to four parameters.
pub trait Params: 'static {
    /// `Args` has the same length and each argument implicitly converts to
    /// its parameter.
    type Accepts<Args: TyList>: Bool;
}

impl Params for () {
    type Accepts<Args: TyList> = <<Args as TyList>::Len as Peano>::IsZero;
}

// (P0, Rest..) accepts (A0, ArgsRest..) when A0 -> P0 and Rest accepts ArgsRest.
macro_rules! impl_params {
    ($p0:ident $(, $rest:ident)*) => {
        impl<$p0: Ty $(, $rest: Ty)*> Params for ($p0, $($rest,)*) {
            type Accepts<Args: TyList> = And<
                Not<<<Args as TyList>::Len as Peano>::IsZero>,
                And<
                    Convertible<<Args as TyList>::First, $p0>,
                    <($($rest,)*) as Params>::Accepts<<Args as TyList>::Rest>,
                >,
            >;
        }
    };
}

impl_params!(P0);
impl_params!(P0, P1);
impl_params!(P0, P1, P2);
impl_params!(P0, P1, P2, P3);

/// Call signatures of an object.
pub trait SigList: 'static {
    /// Return type of the first signature accepting `Args`, or `Nonesuch`.
    type Match<Args: TyList>: Ty;
}

impl SigList for HNil {
    type Match<Args: TyList> = Nonesuch;
}

impl<P: Params, Ret: Ty, T: SigList> SigList for HCons<Sig<P, Ret>, T> {
    type Match<Args: TyList> = Select<<P as Params>::Accepts<Args>, Canon<Ret>, <T as SigList>::Match<Args>>;
}

// =============================================================================
// Specialization tables
// =============================================================================

/// One table entry: the other operand's object and the registered result.
pub struct Spec<Key, Value>(PhantomData<(Key, Value)>);

/// `common_type` entries of an object.
pub trait TypeSpecs: 'static {
    /// Registered result for `K`, or `Nonesuch`.
    type Lookup<K: Object>: Ty;
}

impl TypeSpecs for HNil {
    type Lookup<K: Object> = Nonesuch;
}

impl<Key: Object, Value: Ty, T: TypeSpecs> TypeSpecs for HCons<Spec<Key, Value>, T> {
    type Lookup<K: Object> = Select<SameObject<Key, K>, Canon<Value>, <T as TypeSpecs>::Lookup<K>>;
}

/// `basic_common_reference` entries of an object.
pub trait RefSpecs: 'static {
    /// Registered result for `K` given both operands' qualifier transforms, or `Nonesuch`.
    type Lookup<K: Object, TQ: QualFn, UQ: QualFn>: Ty;
}

impl RefSpecs for HNil {
    type Lookup<K: Object, TQ: QualFn, UQ: QualFn> = Nonesuch;
}

impl<Key: Object, Rule: RefRule, T: RefSpecs> RefSpecs for HCons<Spec<Key, Rule>, T> {
    type Lookup<K: Object, TQ: QualFn, UQ: QualFn> = Select<
        SameObject<Key, K>,
        Canon<<Rule as RefRule>::Apply<TQ, UQ>>,
        <T as RefSpecs>::Lookup<K, TQ, UQ>,
    >;
}

/// Result of a `basic_common_reference` entry.
///
/// `TQ` and `UQ` re-apply the first and second operand's qualifiers (see
/// [`XRef`](crate::XRef)). A plain modeled type (an object, a `Qual`, or
/// `Nonesuch`) is a constant rule.
pub trait RefRule: 'static {
    type Apply<TQ: QualFn, UQ: QualFn>: Ty;
}

impl<O: Object, C: crate::model::CvQual, R: crate::model::RefKind> RefRule for crate::model::Qual<O, C, R> {
    type Apply<TQ: QualFn, UQ: QualFn> = Self;
}

impl RefRule for Nonesuch {
    type Apply<TQ: QualFn, UQ: QualFn> = Nonesuch;
}

/// `T` decorated with the first operand's qualifiers.
pub struct WithTQual<T>(PhantomData<T>);

impl<T: Ty> RefRule for WithTQual<T> {
    type Apply<TQ: QualFn, UQ: QualFn> = <TQ as QualFn>::Apply<T>;
}

/// `T` decorated with the second operand's qualifiers.
pub struct WithUQual<T>(PhantomData<T>);

impl<T: Ty> RefRule for WithUQual<T> {
    type Apply<TQ: QualFn, UQ: QualFn> = <UQ as QualFn>::Apply<T>;
}

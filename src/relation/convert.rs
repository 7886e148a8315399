//! Implicit conversions and reference binding.

use crate::model::{CvOf, CvQual, KindOf, Kind, ObjList, ObjOf, Object, RefKind, RefOf, Ty, ValidOf};
use crate::primitives::{And, Bool, Elif, Not, Or};
use crate::relation::identity::SameOrDerived;

type IsLvalue<T> = <RefOf<T> as RefKind>::IsLvalue;
type IsClass<T> = <KindOf<T> as Kind>::IsClass;
type IsArithmetic<T> = <KindOf<T> as Kind>::IsArithmetic;

/// A reference to `To`'s object can bind to `From`'s object: same or derived.
pub type RefRelated<From, To> = SameOrDerived<ObjOf<From>, ObjOf<To>>;

/// Reference-related and `To` is at least as cv-qualified as `From`.
pub type RefCompatible<From, To> = And<RefRelated<From, To>, <CvOf<To> as CvQual>::Covers<CvOf<From>>>;

/// Standard conversion of an expression of type `From` to a prvalue of
/// object `O`: copy or slice from the same or a derived class (never from a
/// volatile class glvalue), or any arithmetic pair.
pub type StandardConvertible<From, O> = Or<
    And<
        SameOrDerived<ObjOf<From>, O>,
        Not<And<IsClass<From>, <CvOf<From> as CvQual>::IsVolatile>>,
    >,
    And<IsArithmetic<From>, <<O as Object>::Kind as Kind>::IsArithmetic>,
>;

/// An expression of type `From` converts to a prvalue of object `O`.
///
/// A standard conversion, or a registered user conversion with a standard
/// conversion on either side of it:
///
/// ```text
/// From ──conversion operator──► X ──standard──► O     (X in From::ConvertsTo)
/// From ──standard──► Y ──converting constructor──► O  (Y in O::ConvertsFrom)
/// ```
///
/// Two user conversions never chain. Ambiguity between several user
/// conversions is not diagnosed.
pub type ValueConvertible<From, O> = Or<
    StandardConvertible<From, O>,
    Or<
        <<ObjOf<From> as Object>::ConvertsTo as ObjList>::AnyToward<O>,
        <<O as Object>::ConvertsFrom as ObjList>::AnyFrom<From>,
    >,
>;

// `To` is a non-reference.
type ToValue<From, To> = And<<RefOf<To> as RefKind>::IsNone, ValueConvertible<From, ObjOf<To>>>;

// `To` is an lvalue reference. Only `const T&` may bind rvalues or temporaries.
type ToLvalueRef<From, To> = And<
    IsLvalue<To>,
    Elif<
        <CvOf<To> as CvQual>::IsConstOnly,
        Elif<RefRelated<From, To>, RefCompatible<From, To>, ValueConvertible<From, ObjOf<To>>>,
        And<IsLvalue<From>, RefCompatible<From, To>>,
    >,
>;

// `To` is an rvalue reference. Never binds an lvalue of a related type.
type ToRvalueRef<From, To> = And<
    <RefOf<To> as RefKind>::IsRvalue,
    Elif<
        RefRelated<From, To>,
        And<Not<IsLvalue<From>>, RefCompatible<From, To>>,
        ValueConvertible<From, ObjOf<To>>,
    >,
>;

/// `std::is_convertible<From, To>`.
pub type Convertible<From, To> = And<
    And<ValidOf<From>, ValidOf<To>>,
    Or<ToValue<From, To>, Or<ToLvalueRef<From, To>, ToRvalueRef<From, To>>>,
>;

/// Convertibility as a `const fn`.
pub const fn is_convertible<From: Ty, To: Ty>() -> bool {
    <Convertible<From, To> as Bool>::VALUE
}

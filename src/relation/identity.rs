//! Identity and derivation.
//!
//! Object identity is a projection on the first object, so it stays a single
//! opaque step inside generic code:
//!
//! ```text
//! SameObject<A, B> = A::SameAs<B> = hash(A) == hash(B) && identity(A) == identity(B)
//!                                                          (only compared on a hash match)
//! ```

use crate::model::{CvOf, CvQual, KindOf, Kind, ObjList, ObjOf, Object, RefKind, RefOf, Ty};
use crate::primitives::{And, Bool, Or};

/// Same object.
pub type SameObject<A, B> = <A as Object>::SameAs<B>;

/// Exact identity of modeled types: object, qualification and reference kind.
///
/// Non-canonical spellings compare equal to their canonical form, e.g.
/// `Qual<i32>` and `i32`.
pub type IsSame<A, B> = And<
    SameObject<ObjOf<A>, ObjOf<B>>,
    And<<CvOf<A> as CvQual>::Same<CvOf<B>>, <RefOf<A> as RefKind>::Same<RefOf<B>>>,
>;

/// Object `D` strictly derives from object `B`.
pub type IsDerived<D, B> = <<D as Object>::Bases as ObjList>::Reaches<B>;

/// Object `D` is `B` or derives from it.
pub type SameOrDerived<D, B> = Or<SameObject<D, B>, IsDerived<D, B>>;

/// `std::is_base_of<B, D>`: both non-reference class types and `D` is `B` or derived from it.
pub type IsBaseOf<B, D> = And<
    And<<KindOf<B> as Kind>::IsClass, <KindOf<D> as Kind>::IsClass>,
    And<
        And<<RefOf<B> as RefKind>::IsNone, <RefOf<D> as RefKind>::IsNone>,
        SameOrDerived<ObjOf<D>, ObjOf<B>>,
    >,
>;

/// Type identity as a `const fn`.
pub const fn is_same<A: Ty, B: Ty>() -> bool {
    <IsSame<A, B> as Bool>::VALUE
}

/// Base-of as a `const fn`.
pub const fn is_base_of<B: Ty, D: Ty>() -> bool {
    <IsBaseOf<B, D> as Bool>::VALUE
}

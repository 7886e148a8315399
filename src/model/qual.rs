//! cv-qualifier and reference-kind markers.
//!
//! Both are closed sets written as explicit case tables: each marker spells
//! out its own row of associated types rather than computing them.
//!
//! ```text
//!             IsConst IsVolatile  Union<O>            Covers<O> (self ⊇ O)
//! NoCv           0        0       O                   O == NoCv
//! Const          1        0       O + const           !O.volatile
//! Volatile       0        1       O + volatile        !O.const
//! ConstVolatile  1        1       ConstVolatile       always
//! ```

use crate::primitives::{Absent, Bool, Not, Present, Select};
use crate::model::{Nonesuch, Object, Qual, Ty};

// =============================================================================
// cv-qualification
// =============================================================================

/// Top-level const/volatile qualification of a modeled type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a cv-qualifier marker",
    note = "use one of `NoCv`, `Const`, `Volatile`, `ConstVolatile`"
)]
pub trait CvQual: 'static {
    /// Rendering prefix, e.g. `"const "`.
    const PREFIX: &'static str;

    type IsConst: Bool;
    type IsVolatile: Bool;
    type IsNone: Bool;
    type IsConstOnly: Bool;
    type IsVolatileOnly: Bool;
    type IsConstVolatile: Bool;

    type WithConst: CvQual;
    type WithVolatile: CvQual;

    /// Union of both qualifications.
    type Union<O: CvQual>: CvQual;

    /// `Self` is at least as qualified as `O`.
    type Covers<O: CvQual>: Bool;

    type Same<O: CvQual>: Bool;

    /// Canonical spelling of `O` with this qualification and reference kind `R`.
    type Build<O: Object, R: RefKind>: Ty;
}

/// Unqualified.
#[derive(Debug)]
pub struct NoCv;

/// `const`
#[derive(Debug)]
pub struct Const;

/// `volatile`
#[derive(Debug)]
pub struct Volatile;

/// `const volatile`
#[derive(Debug)]
pub struct ConstVolatile;

impl CvQual for NoCv {
    const PREFIX: &'static str = "";
    type IsConst = Absent;
    type IsVolatile = Absent;
    type IsNone = Present;
    type IsConstOnly = Absent;
    type IsVolatileOnly = Absent;
    type IsConstVolatile = Absent;
    type WithConst = Const;
    type WithVolatile = Volatile;
    type Union<O: CvQual> = O;
    type Covers<O: CvQual> = <O as CvQual>::IsNone;
    type Same<O: CvQual> = <O as CvQual>::IsNone;
    type Build<O: Object, R: RefKind> = <R as RefKind>::Plain<O>;
}

impl CvQual for Const {
    const PREFIX: &'static str = "const ";
    type IsConst = Present;
    type IsVolatile = Absent;
    type IsNone = Absent;
    type IsConstOnly = Present;
    type IsVolatileOnly = Absent;
    type IsConstVolatile = Absent;
    type WithConst = Const;
    type WithVolatile = ConstVolatile;
    type Union<O: CvQual> = <O as CvQual>::WithConst;
    type Covers<O: CvQual> = Not<<O as CvQual>::IsVolatile>;
    type Same<O: CvQual> = <O as CvQual>::IsConstOnly;
    type Build<O: Object, R: RefKind> = Select<<O as Ty>::Valid, Qual<O, Const, R>, Nonesuch>;
}

impl CvQual for Volatile {
    const PREFIX: &'static str = "volatile ";
    type IsConst = Absent;
    type IsVolatile = Present;
    type IsNone = Absent;
    type IsConstOnly = Absent;
    type IsVolatileOnly = Present;
    type IsConstVolatile = Absent;
    type WithConst = ConstVolatile;
    type WithVolatile = Volatile;
    type Union<O: CvQual> = <O as CvQual>::WithVolatile;
    type Covers<O: CvQual> = Not<<O as CvQual>::IsConst>;
    type Same<O: CvQual> = <O as CvQual>::IsVolatileOnly;
    type Build<O: Object, R: RefKind> = Select<<O as Ty>::Valid, Qual<O, Volatile, R>, Nonesuch>;
}

impl CvQual for ConstVolatile {
    const PREFIX: &'static str = "const volatile ";
    type IsConst = Present;
    type IsVolatile = Present;
    type IsNone = Absent;
    type IsConstOnly = Absent;
    type IsVolatileOnly = Absent;
    type IsConstVolatile = Present;
    type WithConst = ConstVolatile;
    type WithVolatile = ConstVolatile;
    type Union<O: CvQual> = ConstVolatile;
    type Covers<O: CvQual> = Present;
    type Same<O: CvQual> = <O as CvQual>::IsConstVolatile;
    type Build<O: Object, R: RefKind> = Select<<O as Ty>::Valid, Qual<O, ConstVolatile, R>, Nonesuch>;
}

// =============================================================================
// Reference kind (value category of an expression of that type)
// =============================================================================

/// Reference-ness of a modeled type.
///
/// As the type of an expression: `NoRef` is a prvalue, `LRef` an lvalue and
/// `RRef` an xvalue.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a reference-kind marker",
    note = "use one of `NoRef`, `LRef`, `RRef`"
)]
pub trait RefKind: 'static {
    /// Rendering suffix, e.g. `"&&"`.
    const SUFFIX: &'static str;

    type IsRef: Bool;
    type IsNone: Bool;
    type IsLvalue: Bool;
    type IsRvalue: Bool;

    /// `add_lvalue_reference` on a type with this kind.
    type AddLvalue: RefKind;
    /// `add_rvalue_reference` on a type with this kind (collapses `& &&` to `&`).
    type AddRvalue: RefKind;

    /// Apply this kind as the outer reference over a type of kind `Inner`.
    type Collapse<Inner: RefKind>: RefKind;

    /// Qualification after adding `Added` to a type with qualification
    /// `Inner` and this kind. A reference ignores top-level cv.
    type Decorate<Inner: CvQual, Added: CvQual>: CvQual;

    type Same<O: RefKind>: Bool;

    /// Canonical spelling of an unqualified `O` with this kind.
    type Plain<O: Object>: Ty;
}

/// Not a reference.
#[derive(Debug)]
pub struct NoRef;

/// `&`
#[derive(Debug)]
pub struct LRef;

/// `&&`
#[derive(Debug)]
pub struct RRef;

impl RefKind for NoRef {
    const SUFFIX: &'static str = "";
    type IsRef = Absent;
    type IsNone = Present;
    type IsLvalue = Absent;
    type IsRvalue = Absent;
    type AddLvalue = LRef;
    type AddRvalue = RRef;
    type Collapse<Inner: RefKind> = Inner;
    type Decorate<Inner: CvQual, Added: CvQual> = <Added as CvQual>::Union<Inner>;
    type Same<O: RefKind> = <O as RefKind>::IsNone;
    type Plain<O: Object> = O;
}

impl RefKind for LRef {
    const SUFFIX: &'static str = "&";
    type IsRef = Present;
    type IsNone = Absent;
    type IsLvalue = Present;
    type IsRvalue = Absent;
    type AddLvalue = LRef;
    type AddRvalue = LRef;
    type Collapse<Inner: RefKind> = LRef;
    type Decorate<Inner: CvQual, Added: CvQual> = Inner;
    type Same<O: RefKind> = <O as RefKind>::IsLvalue;
    type Plain<O: Object> = Select<<O as Ty>::Valid, Qual<O, NoCv, LRef>, Nonesuch>;
}

impl RefKind for RRef {
    const SUFFIX: &'static str = "&&";
    type IsRef = Present;
    type IsNone = Absent;
    type IsLvalue = Absent;
    type IsRvalue = Present;
    type AddLvalue = LRef;
    type AddRvalue = RRef;
    type Collapse<Inner: RefKind> = <Inner as RefKind>::AddRvalue;
    type Decorate<Inner: CvQual, Added: CvQual> = Inner;
    type Same<O: RefKind> = <O as RefKind>::IsRvalue;
    type Plain<O: Object> = Select<<O as Ty>::Valid, Qual<O, NoCv, RRef>, Nonesuch>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds<B: Bool>() -> bool {
        B::VALUE
    }

    #[test]
    fn test_cv_union_and_covers() {
        assert!(holds::<<<Const as CvQual>::Union<Volatile> as CvQual>::IsConstVolatile>());
        assert!(holds::<<<NoCv as CvQual>::Union<Const> as CvQual>::IsConstOnly>());
        assert!(holds::<<Const as CvQual>::Covers<NoCv>>());
        assert!(holds::<<ConstVolatile as CvQual>::Covers<Volatile>>());
        assert!(!holds::<<Const as CvQual>::Covers<Volatile>>());
        assert!(!holds::<<NoCv as CvQual>::Covers<Const>>());
    }

    #[test]
    fn test_reference_collapse() {
        assert!(holds::<<<RRef as RefKind>::Collapse<LRef> as RefKind>::IsLvalue>());
        assert!(holds::<<<RRef as RefKind>::Collapse<RRef> as RefKind>::IsRvalue>());
        assert!(holds::<<<LRef as RefKind>::Collapse<RRef> as RefKind>::IsLvalue>());
        assert!(holds::<<<NoRef as RefKind>::Collapse<NoRef> as RefKind>::IsNone>());
        assert!(holds::<<<LRef as RefKind>::AddRvalue as RefKind>::IsLvalue>());
    }
}

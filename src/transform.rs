//! Qualifier-transfer helpers.
//!
//! Every transform is total: `Nonesuch` maps to `Nonesuch`, and results are
//! always in canonical spelling.
//!
//! `xref` case table, as implemented by [`XRefFn`]:
//!
//! ```text
//! A's decoration      U non-ref        U lvalue-ref    U rvalue-ref
//! (none)              cv(A) U          U&              U&&
//! &                   cv(A) U &        U&              U&
//! &&                  cv(A) U &&       U&              U&&
//! ```
//!
//! cv of `A` is only added while `U` is not a reference.

use core::marker::PhantomData;

use crate::model::{
    Build, CvOf, CvQual, LRef, Nonesuch, NoRef, ObjOf, RRef, RefKind, RefOf, Ty, ValidOf,
    Const, Volatile,
};
use crate::primitives::Select;

/// `std::remove_cvref_t<T>`
pub type RemoveCvref<T> = ObjOf<T>;

/// `std::decay_t<T>`. The model has no arrays or functions, so this is `RemoveCvref`.
pub type Decay<T> = RemoveCvref<T>;

/// `std::remove_reference_t<T>`
pub type RemoveRef<T> = Build<ObjOf<T>, CvOf<T>, NoRef>;

/// Add qualification `C`. No effect on references.
pub type AddCv<T, C> = Build<ObjOf<T>, <RefOf<T> as RefKind>::Decorate<CvOf<T>, C>, RefOf<T>>;

/// `std::add_const_t<T>`
pub type AddConst<T> = AddCv<T, Const>;

/// `std::add_volatile_t<T>`
pub type AddVolatile<T> = AddCv<T, Volatile>;

/// `std::add_lvalue_reference_t<T>`
pub type AddLref<T> = Build<ObjOf<T>, CvOf<T>, <RefOf<T> as RefKind>::AddLvalue>;

/// `std::add_rvalue_reference_t<T>` (`T& &&` collapses to `T&`).
pub type AddRref<T> = Build<ObjOf<T>, CvOf<T>, <RefOf<T> as RefKind>::AddRvalue>;

/// `To` with `From`'s cv-qualifiers added.
pub type CopyCv<From, To> = Select<ValidOf<From>, AddCv<To, CvOf<From>>, Nonesuch>;

/// `const remove_reference_t<T>&`, keeping `T`'s own qualifiers on the referent.
pub type Clref<T> = Build<ObjOf<T>, <CvOf<T> as CvQual>::WithConst, LRef>;

/// `remove_reference_t<T>&&`. Always an rvalue reference, never collapsed.
pub type Rref<T> = Build<ObjOf<T>, CvOf<T>, RRef>;

// =============================================================================
// xref
// =============================================================================

/// A type-level function from modeled type to modeled type.
pub trait QualFn: 'static {
    type Apply<U: Ty>: Ty;
}

/// Decorates its argument with qualification `C` and reference kind `R`.
pub struct XRefFn<C, R>(PhantomData<(C, R)>);

impl<C: CvQual, R: RefKind> QualFn for XRefFn<C, R> {
    type Apply<U: Ty> = Build<
        ObjOf<U>,
        <RefOf<U> as RefKind>::Decorate<CvOf<U>, C>,
        <R as RefKind>::Collapse<RefOf<U>>,
    >;
}

/// `xref<A>`: the qualifier transform carrying `A`'s decoration.
pub type XRef<A> = XRefFn<CvOf<A>, RefOf<A>>;

/// `xref<A>::type<U>`
pub type XRefApply<A, U> = <XRef<A> as QualFn>::Apply<U>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_same, ty};

    #[test]
    fn test_remove_cvref() {
        assert!(is_same::<RemoveCvref<ty!(const i32 &)>, i32>());
        assert!(is_same::<RemoveCvref<ty!(const volatile i32)>, i32>());
        assert!(is_same::<RemoveRef<ty!(const i32 &&)>, ty!(const i32)>());
    }

    #[test]
    fn test_add_const_skips_references() {
        assert!(is_same::<AddConst<ty!(i32 &)>, ty!(i32 &)>());
        assert!(is_same::<AddConst<ty!(volatile i32)>, ty!(const volatile i32)>());
    }

    #[test]
    fn test_nonesuch_propagates() {
        assert!(is_same::<Clref<Nonesuch>, Nonesuch>());
        assert!(is_same::<Rref<Nonesuch>, Nonesuch>());
        assert!(is_same::<CopyCv<Nonesuch, i32>, Nonesuch>());
        assert!(is_same::<XRefApply<ty!(const i32 &), Nonesuch>, Nonesuch>());
    }
}

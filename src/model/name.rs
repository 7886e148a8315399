//! Human-readable rendering of modeled types.

use core::fmt;
use core::marker::PhantomData;

use crate::model::{CvOf, CvQual, ObjOf, Object, RefKind, RefOf, Ty};

/// Displays a modeled type in C++-like notation, e.g. `const Base&`.
pub struct TyName<T>(PhantomData<T>);

/// Renderer for `T`.
pub const fn type_name<T: Ty>() -> TyName<T> {
    TyName(PhantomData)
}

impl<T: Ty> fmt::Display for TyName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            <CvOf<T> as CvQual>::PREFIX,
            <ObjOf<T> as Object>::NAME,
            <RefOf<T> as RefKind>::SUFFIX,
        )
    }
}

impl<T: Ty> fmt::Debug for TyName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::ty;

    #[test]
    fn test_render() {
        assert_eq!(type_name::<i32>().to_string(), "i32");
        assert_eq!(type_name::<ty!(const i32 &)>().to_string(), "const i32&");
        assert_eq!(type_name::<ty!(const volatile u8 &&)>().to_string(), "const volatile u8&&");
        assert_eq!(type_name::<crate::Nonesuch>().to_string(), "nonesuch");
    }
}

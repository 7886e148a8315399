//! Detection on real Rust types.
//!
//! Both macros use the inherent-const check: an inherent associated const
//! guarded by the bounds under test shadows a trait const that is always
//! `false`. Unsatisfied bounds select the fallback instead of failing the
//! build. Only concrete types can be checked; inside a generic function the
//! bounds are checked against the parameter, not its eventual argument.

/// `T: Bounds` as a `bool`.
///
/// # Usage
/// ```
/// use tola_concepts::has_impl;
///
/// assert!(has_impl!(String: Clone + Default));
/// assert!(!has_impl!(String: Copy));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($ty:ty : $($bound:tt)+) => {{
        trait __Fallback {
            const VAL: bool = false;
        }
        struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
        impl<X: ?Sized> __Fallback for __Probe<X> {}
        impl<X: ?Sized + $($bound)+> __Probe<X> {
            const VAL: bool = true;
        }
        <__Probe<$ty>>::VAL
    }};
}

/// A requires-expression over real Rust types: every where-clause holds for the
/// given arguments.
///
/// # Usage
/// ```
/// use tola_concepts::requires;
///
/// assert!(requires!(for<T = u8, U = u32> where U: From<T>, T: Copy));
/// assert!(!requires!(for<T = u32, U = u8> where U: From<T>));
/// ```
#[macro_export]
macro_rules! requires {
    (for<$($p:ident = $arg:ty),+ $(,)?> where $($clause:tt)+) => {{
        trait __Fallback {
            const VAL: bool = false;
        }
        #[allow(non_camel_case_types)]
        struct __Probe<$($p),+>(::core::marker::PhantomData<($($p,)+)>);
        impl<$($p),+> __Fallback for __Probe<$($p),+> {}
        impl<$($p),+> __Probe<$($p),+>
        where
            $($clause)+
        {
            const VAL: bool = true;
        }
        <__Probe<$($arg),+>>::VAL
    }};
}

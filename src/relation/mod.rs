//! # Layer 2: Relations between modeled types
//!
//! - `identity.rs`: `IsSame`, derivation, `IsBaseOf`.
//! - `convert.rs`: implicit conversion and reference binding.
//! - `conditional.rs`: the type of `b ? e1 : e2`.

pub mod conditional;
pub mod convert;
pub mod identity;

pub use conditional::{Conditional, ConditionalOf, Prvalue};
pub use convert::{
    is_convertible, Convertible, RefCompatible, RefRelated, StandardConvertible,
    ValueConvertible,
};
pub use identity::{is_base_of, is_same, IsBaseOf, IsDerived, IsSame, SameObject, SameOrDerived};

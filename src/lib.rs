#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]
#![recursion_limit = "512"]

// Feature flags handled:
// - std: default, enables std library (only used by `TyName` tests)

//! # tola-concepts
//!
//! Compile-time type traits and concept emulation over a model of C++ types.
//!
//! **`common_type`, `common_reference`, the detection idiom and `requires_`,
//! evaluated entirely by the trait solver.**
//!
//! ## Architecture
//!
//! ### 1. The type model
//! A C++ type is an object, a cv-qualification and a reference kind:
//!
//! ```text
//! const Base&   ==  ty!(const Base &)  ==  Qual<Base, Const, LRef>
//! int           ==  i32
//! <no type>     ==  Nonesuch
//! ```
//!
//! ### 2. Identity
//! Objects are identified by their module path, name and definition site.
//! A **64-bit FNV-1a hash** of that string routes most comparisons; equal
//! hashes fall back to comparing the string itself, chunk by chunk.
//!
//! ```text
//! "my_crate::Base@4:10" -> FNV Hash (u64) -> Nibble Stream -> StreamEq
//!                       -> IdChunk x 8                      -> Identity::Eq
//! ```
//!
//! ### 3. Totality and laziness
//! Every operation is total. Where C++ would be ill-formed the result is
//! `Nonesuch` (types) or `Absent` (booleans), so failures compose.
//!
//! Multi-step computations are queries ([`Resolve`]): each step is solved
//! once per argument set, and fallbacks are only resolved when reached.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present/Absent, Nibble (X0-XF), HashStream, Peano              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Model + Transforms                                      |
//! |  - Ty, Object, Qual, Nonesuch; clref, rref, copy_cv, xref         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Relations                                               |
//! |  - IsSame, IsBaseOf, Convertible, Conditional (b ? x : y)         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: common_type / common_reference                          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4-5: Detection, requires_, Concepts                        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_concepts::prelude::*;
//!
//! #[derive(Object)]
//! pub struct Base;
//!
//! #[derive(Object)]
//! #[object(bases(Base))]
//! pub struct Derived;
//!
//! assert_ty!(common_reference!(ty!(Base &), ty!(Derived &)), ty!(Base &));
//! assert_ty!(common_reference!(ty!(Base &), ty!(Derived &&)), ty!(const Base &));
//! assert_ty!(common_type!(i32, ty!(i16 &)), i32);
//! ```

// Allow `::tola_concepts` to work inside the crate itself
extern crate self as tola_concepts;

// Re-export paste for the table macros
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Type model and qualifier transforms
// =============================================================================
pub mod model;
pub mod transform;

// =============================================================================
// Layer 2: Relations
// =============================================================================
pub mod relation;

// =============================================================================
// Layer 3: common_type / common_reference
// =============================================================================
pub mod common;

// =============================================================================
// Layer 4-5: Detection and concepts
// =============================================================================
pub mod concepts;
pub mod detect;

pub use primitives::{Absent, Bool, Branch, FirstValid, Present, Ready, Resolve, Select};

pub use model::{
    type_name, Arithmetic, Class, Const, ConstVolatile, CvQual, Float, HCons, HNil, Kind, LRef,
    NoCv, NoRef, Nonesuch, Object, Qual, RRef, RefKind, RefRule, Sig, SignedInt, Spec, Ty,
    TyName, UnsignedInt, Volatile, WithTQual, WithUQual,
};

pub use transform::{
    AddConst, AddCv, AddLref, AddRref, AddVolatile, Clref, CopyCv, Decay, QualFn, RemoveCvref,
    RemoveRef, Rref, XRef, XRefApply,
};

pub use relation::{
    is_base_of, is_convertible, is_same, Conditional, Convertible, IsBaseOf, IsSame,
};

pub use common::{CommonReference, CommonType, TyList};

pub use detect::{
    is_detected, is_detected_convertible, is_detected_exact, requires, ClrefOp, Clause,
    CommonReferenceOp, CommonTypeOp, ConditionalOp, DecayOp, DetectedOr, DetectedT,
    InvokeResult, InvokeResultOp, Is, IsDetected, IsDetectedConvertible, IsDetectedExact,
    Operation, RemoveCvrefOp, Requirement, Requires, RrefOp, Satisfies, Valid,
};

// Re-export proc-macros
pub use macros::{make_identity, make_routing_stream, Object};

/// Assert that two modeled types are identical, naming both on failure.
///
/// # Usage
/// ```
/// use tola_concepts::{assert_ty, ty, Clref};
///
/// assert_ty!(Clref<ty!(volatile i32 &&)>, ty!(const volatile i32 &));
/// ```
#[macro_export]
macro_rules! assert_ty {
    ($actual:ty, $expected:ty $(,)?) => {
        assert!(
            $crate::is_same::<$actual, $expected>(),
            "type mismatch: `{}` is not `{}`",
            $crate::type_name::<$actual>(),
            $crate::type_name::<$expected>(),
        )
    };
}

/// Common items for the type model.
pub mod prelude {
    pub use crate::{
        // Model
        Nonesuch, Object, Qual, Ty,
        // Resolution
        CommonReference, CommonType, Conditional, Convertible, IsSame,
        // Detection
        Clause, Operation, Requirement, Resolve, TyList,
        is_convertible, is_detected, is_same, requires,
    };
    pub use crate::{assert_ty, clauses, common_reference, common_type, has_impl, ty};
}

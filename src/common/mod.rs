//! # Layer 3: Common type resolution
//!
//! - `common_type.rs`: pairwise `common_type` with the user extension point.
//! - `common_reference.rs`: pairwise `common_reference`, four precedence tiers.
//! - `variadic.rs`: tuple packs and the left folds.

pub mod common_reference;
pub mod common_type;
pub mod variadic;

pub use common_reference::{
    BasicCommonReference, CommonReference2, CommonReferenceOf, LvalueScr, MixedScr, RvalueScr,
    SimpleCommonReference,
};
pub use common_type::{CommonType2, CommonTypeOf};
pub use variadic::{CommonReference, CommonType, FoldCommonReference, FoldCommonType, TyList};

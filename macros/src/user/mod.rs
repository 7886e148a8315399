//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Object)]` | on struct/enum | Register a class type |

pub mod object;

pub use object::expand_derive_object;

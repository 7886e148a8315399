//! # Layer 0: Primitives
//!
//! Basic building blocks for the type model:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Hash streams and Peano numbers.
//! - `identity.rs`: Exact identity strings, compared after the hash agrees.
//! - `lazy.rs`: Queries (`Resolve`) and lazy dispatch (`Branch`, `AndThen`).
//! - `const_utils.rs`: Const fn hashing and sampling used by both streams.

pub mod bool;
pub mod nibble;
pub mod stream;
pub mod identity;
pub mod lazy;
pub mod const_utils;

// Re-export key types at this level
pub use bool::{Bool, Present, Absent, And, Or, Not, Select, Elif};
pub use nibble::{Nibble, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use stream::{HashStream, HashStream16, ConstStream, Z, S, Peano, DefaultMaxDepth, StreamEq};
pub use identity::{Identity, IdChunk, IdEnd};
pub use lazy::{AndThen, Branch, FirstValid, Ready, Resolve};

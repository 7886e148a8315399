//! Procedural macros for the tola-concepts type model
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Object)]` | struct/enum | Register a class type with the model |
//! | `make_routing_stream!` | - | Identity hash stream from a path string |
//! | `make_identity!` | - | Exact identity string, compared after the hash |
//! | `peano!` | - | Peano aliases `D0..Dn` (internal) |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Object)]
//! #[object(bases(Base), common_type(Other => Base))]
//! pub struct Derived;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(16);  // Generates D0 = Z, D1 = S<D0>, ..., D16 = S<D15>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Compute the identity stream of a fully qualified type path.
///
/// Input is a string literal or a const `&str` expression such as
/// `concat!(module_path!(), "::", "Name")`.
#[proc_macro]
pub fn make_routing_stream(input: TokenStream) -> TokenStream {
    inner::routing::expand_make_routing_stream(input.into()).into()
}

/// Spell an identity string as chunks of nibbles.
///
/// Input is a string literal or a const `&str` expression, as for
/// `make_routing_stream!`.
#[proc_macro]
pub fn make_identity(input: TokenStream) -> TokenStream {
    inner::identity::expand_make_identity(input.into()).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Register a class type with the type model.
///
/// Keys of the optional `#[object(..)]` attribute (all repeatable):
///
/// | Key | Meaning |
/// |-----|---------|
/// | `bases(A, B)` | direct base classes |
/// | `converts_to(T)` | implicit conversion operators |
/// | `converts_from(T)` | implicit converting constructors |
/// | `common_type(Y => Z)` | `common_type<Self, Y> = Z` |
/// | `common_reference(Y => R)` | `basic_common_reference<Self, Y, ..> = R` |
/// | `eq(Y)` | `==`/`!=` with `Y` or anything derived from it |
/// | `ord(Y)` | `<`/`>`/`<=`/`>=` with `Y` or anything derived from it |
/// | `invoke(fn(A, B) -> R)` | call operator, at most four parameters |
///
/// # Usage
/// ```ignore
/// #[derive(Object)]
/// pub struct Base;
///
/// #[derive(Object)]
/// #[object(bases(Base))]
/// pub struct Derived;
/// ```
#[proc_macro_derive(Object, attributes(object))]
pub fn derive_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_object(input).into()
}

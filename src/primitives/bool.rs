//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Every selector is typed (`Select` yields a [`Ty`], `Elif` yields a
//! `Bool`), so generic code built from these projections stays provably
//! well-formed without extra where-clauses. Both arms are normalized, so
//! these are for cheap operands only; see [`lazy`](super::lazy) for choices
//! that must not evaluate the other arm.

use crate::model::Ty;
use super::identity::Identity;

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional over modeled types.
    type Select<Then: Ty, Else: Ty>: Ty;

    /// Type-level boolean conditional: Then<T, E> where T, E are Bool.
    /// Returns a type guaranteed to implement Bool.
    type Elif<Then: Bool, Else: Bool>: Bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;

    /// `Self && A == B`. The identities are only compared when `Self` holds.
    type AndSame<A: Identity, B: Identity>: Bool;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type Select<Then: Ty, Else: Ty> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;

    type AndSame<A: Identity, B: Identity> = <A as Identity>::Eq<B>;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type Select<Then: Ty, Else: Ty> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;

    type AndSame<A: Identity, B: Identity> = Absent;
}

// =============================================================================
// Aliases
// =============================================================================

/// `A && B`
pub type And<A, B> = <A as Bool>::And<B>;

/// `A || B`
pub type Or<A, B> = <A as Bool>::Or<B>;

/// `!A`
pub type Not<A> = <A as Bool>::Not;

/// `C ? T : E` over modeled types.
pub type Select<C, T, E> = <C as Bool>::Select<T, E>;

/// `C ? T : E` over booleans.
pub type Elif<C, T, E> = <C as Bool>::Elif<T, E>;

//! Hash stream types for object identity.
//!
//! Provides nibble streams and Peano numbers for depth tracking.
//!
//! ```text
//! "my_crate::shapes::Circle" -> FNV-1a (u64) -> HashStream16<n0, .., n15>
//!                                                    |
//!                 StreamEq<A, B> = A0 == B0 && (A1 == B1 && ... D16 deep)
//! ```

use core::marker::PhantomData;
use super::bool::{Absent, And, Bool, Not, Present};
use super::nibble::Nibble;

// =============================================================================
// Hash Stream trait
// =============================================================================

/// Infinite stream of nibbles via recursive type
pub trait HashStream: 'static {
    type Head: Nibble;
    type Tail: HashStream;
}

// =============================================================================
// Stream implementations
// =============================================================================

/// Constant stream: N, N, N, N, ...
pub struct ConstStream<N>(PhantomData<N>);

impl<N: Nibble> HashStream for ConstStream<N> {
    type Head = N;
    type Tail = ConstStream<N>;
}

// =============================================================================
// Peano Numbers
// =============================================================================

/// Peano number trait
pub trait Peano: 'static {
    type IsZero: Bool;
    /// Predecessor, saturating at zero.
    type Pred: Peano;
    type Eq<Other: Peano>: Bool;

    /// Compare the first `Self` nibbles of two streams.
    type StreamEq<A: HashStream, B: HashStream>: Bool;
}

/// Zero (base case)
pub struct Z;

impl Peano for Z {
    type IsZero = Present;
    type Pred = Z;
    type Eq<Other: Peano> = <Other as Peano>::IsZero;
    type StreamEq<A: HashStream, B: HashStream> = Present;
}

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);

impl<N: Peano> Peano for S<N> {
    type IsZero = Absent;
    type Pred = N;
    type Eq<Other: Peano> = And<Not<<Other as Peano>::IsZero>, <N as Peano>::Eq<<Other as Peano>::Pred>>;
    type StreamEq<A: HashStream, B: HashStream> = And<
        <<A as HashStream>::Head as Nibble>::Eq<<B as HashStream>::Head>,
        <N as Peano>::StreamEq<<A as HashStream>::Tail, <B as HashStream>::Tail>,
    >;
}

// Generate D0..D16 using proc-macro
macros::peano!(16);

/// Default max depth for identity comparison (16 nibbles = 64 bits)
pub type DefaultMaxDepth = D16;

/// Do two streams agree on their first 64 bits?
pub type StreamEq<A, B> = <DefaultMaxDepth as Peano>::StreamEq<A, B>;

// =============================================================================
// Const-to-Stream conversion (Stable Rust approach)
// =============================================================================

use super::nibble::{X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};

/// Trait to select nibble type from const value
pub trait SelectNibble<const N: u8> {
    type Out: Nibble;
}

macro_rules! impl_select_nibble {
    ($($val:literal => $nib:ident),* $(,)?) => {
        $(
            impl SelectNibble<$val> for () {
                type Out = $nib;
            }
        )*
    };
}

impl_select_nibble!(
    0 => X0, 1 => X1, 2 => X2, 3 => X3,
    4 => X4, 5 => X5, 6 => X6, 7 => X7,
    8 => X8, 9 => X9, 10 => XA, 11 => XB,
    12 => XC, 13 => XD, 14 => XE, 15 => XF,
);

/// Build a hash stream from 16 const nibble values (for 64-bit hash)
/// Usage: HashStream16<{n0}, {n1}, ..., {n15}>
pub struct HashStream16<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
>(PhantomData<()>);

impl<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
> HashStream for HashStream16<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15>
where
    (): SelectNibble<N0> + SelectNibble<N1> + SelectNibble<N2> + SelectNibble<N3>
      + SelectNibble<N4> + SelectNibble<N5> + SelectNibble<N6> + SelectNibble<N7>
      + SelectNibble<N8> + SelectNibble<N9> + SelectNibble<N10> + SelectNibble<N11>
      + SelectNibble<N12> + SelectNibble<N13> + SelectNibble<N14> + SelectNibble<N15>,
{
    type Head = <() as SelectNibble<N0>>::Out;
    type Tail = HashStream16<N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15, N0>;
}

//! Exact object identity.
//!
//! The routing hash decides almost every comparison on its own. When two
//! hashes agree, the identity strings are compared as well, 64 bytes as
//! eight chunks of sixteen nibbles:
//!
//! ```text
//! "my_crate::Base@4:10"
//!     -> IdChunk<HashStream16<n0..n15>, IdChunk<.., .. IdEnd>>   (8 chunks)
//! ```
//!
//! Strings longer than 64 bytes are sampled (head, middle and tail, see
//! [`identity_nibble`](super::const_utils::identity_nibble)); the hash still
//! covers the whole string.

use core::marker::PhantomData;

use super::bool::{Absent, And, Bool, Not, Present};
use super::nibble::X0;
use super::stream::{ConstStream, HashStream, StreamEq};

/// A type-level identity string.
pub trait Identity: 'static {
    type IsEnd: Bool;
    type Head: HashStream;
    type Tail: Identity;

    /// Chunk-wise equality.
    type Eq<Other: Identity>: Bool;
}

/// One sixteen-nibble chunk followed by the rest.
pub struct IdChunk<C, Rest>(PhantomData<(C, Rest)>);

/// End of an identity string.
#[derive(Debug)]
pub struct IdEnd;

impl Identity for IdEnd {
    type IsEnd = Present;
    type Head = ConstStream<X0>;
    type Tail = IdEnd;
    type Eq<Other: Identity> = <Other as Identity>::IsEnd;
}

impl<C: HashStream, Rest: Identity> Identity for IdChunk<C, Rest> {
    type IsEnd = Absent;
    type Head = C;
    type Tail = Rest;
    type Eq<Other: Identity> = And<
        Not<<Other as Identity>::IsEnd>,
        And<StreamEq<C, <Other as Identity>::Head>, <Rest as Identity>::Eq<<Other as Identity>::Tail>>,
    >;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::stream::HashStream16;

    type Left = HashStream16<1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0>;
    type Right = HashStream16<1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 1>;

    fn eq<A: Identity, B: Identity>() -> bool {
        <<A as Identity>::Eq<B> as Bool>::VALUE
    }

    #[test]
    fn test_every_chunk_is_compared() {
        assert!(eq::<IdChunk<Left, IdChunk<Right, IdEnd>>, IdChunk<Left, IdChunk<Right, IdEnd>>>());
        assert!(!eq::<IdChunk<Left, IdChunk<Left, IdEnd>>, IdChunk<Left, IdChunk<Right, IdEnd>>>());
    }

    #[test]
    fn test_length_matters() {
        assert!(eq::<IdEnd, IdEnd>());
        assert!(!eq::<IdEnd, IdChunk<Left, IdEnd>>());
        assert!(!eq::<IdChunk<Left, IdEnd>, IdEnd>());
    }
}

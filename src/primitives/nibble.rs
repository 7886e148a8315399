//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles are the digits of an object's identity hash. Equality is a
//! one-hot lookup: each nibble knows which of sixteen slots it occupies,
//! and `A::Eq<B>` asks `B` to pick the slot belonging to `A`.

use super::bool::{Absent, Bool, Present};

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {
    const VALUE: u8;

    /// Select the argument in this nibble's slot.
    type Pick<
        P0: Bool, P1: Bool, P2: Bool, P3: Bool,
        P4: Bool, P5: Bool, P6: Bool, P7: Bool,
        P8: Bool, P9: Bool, PA: Bool, PB: Bool,
        PC: Bool, PD: Bool, PE: Bool, PF: Bool,
    >: Bool;

    /// Type-level nibble equality
    type Eq<Other: Nibble>: Bool;
}

// Each row: nibble, value, its own slot, then the one-hot row handed to the other side.
macro_rules! nibble_table {
    ($($n:ident = $val:literal, $slot:ident => [$($flag:ident),*]),* $(,)?) => {
        $(
            pub struct $n;

            impl Nibble for $n {
                const VALUE: u8 = $val;
                type Pick<
                    P0: Bool, P1: Bool, P2: Bool, P3: Bool,
                    P4: Bool, P5: Bool, P6: Bool, P7: Bool,
                    P8: Bool, P9: Bool, PA: Bool, PB: Bool,
                    PC: Bool, PD: Bool, PE: Bool, PF: Bool,
                > = $slot;
                type Eq<Other: Nibble> = <Other as Nibble>::Pick<$($flag),*>;
            }
        )*
    };
}

nibble_table! {
    //                 0        1        2        3        4        5        6        7        8        9        A        B        C        D        E        F
    X0 = 0,  P0 => [Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    X1 = 1,  P1 => [Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    X2 = 2,  P2 => [Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    X3 = 3,  P3 => [Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    X4 = 4,  P4 => [Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    X5 = 5,  P5 => [Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    X6 = 6,  P6 => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    X7 = 7,  P7 => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    X8 = 8,  P8 => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    X9 = 9,  P9 => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent,  Absent ],
    XA = 10, PA => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent,  Absent ],
    XB = 11, PB => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent,  Absent ],
    XC = 12, PC => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent,  Absent ],
    XD = 13, PD => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent,  Absent ],
    XE = 14, PE => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present, Absent ],
    XF = 15, PF => [Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Absent,  Present],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq<A: Nibble, B: Nibble>() -> bool {
        <<A as Nibble>::Eq<B> as Bool>::VALUE
    }

    #[test]
    fn test_nibble_eq_is_identity() {
        assert!(eq::<X0, X0>());
        assert!(eq::<XA, XA>());
        assert!(eq::<XF, XF>());
        assert!(!eq::<X0, XF>());
        assert!(!eq::<X7, X8>());
        assert!(!eq::<XB, XA>());
    }
}

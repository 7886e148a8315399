//! Arithmetic objects and the usual arithmetic conversions.
//!
//! After integral promotion the six remaining ranks are totally ordered by
//! "which one wins":
//!
//! ```text
//! i32 < u32 < i64 < u64 < f32 < f64
//! ```
//!
//! so the common type of two arithmetic operands is the maximum of their
//! promoted ranks. `bool`, `i8`, `u8`, `i16` and `u16` promote to `i32`.

use crate::model::object::{Float, Object, SignedInt, UnsignedInt};
use crate::model::KindOf;
use crate::model::object::Kind;
use crate::impl_object;

/// Promoted conversion rank.
pub trait Rank: 'static {
    /// The object a value of this rank has after promotion.
    type Object: Object;
    /// `max(Self, O)`
    type Max<O: Rank>: Rank;

    // max(Self, row) for every row; `Max` dispatches through these.
    type MaxInt: Rank;
    type MaxUInt: Rank;
    type MaxLong: Rank;
    type MaxULong: Rank;
    type MaxFloat: Rank;
    type MaxDouble: Rank;
}

// Each row: rank, the slot other ranks read for it, promoted object, then max(row, column).
macro_rules! rank_table {
    ($($rank:ident ($slot:ident) => $obj:ty [$int:ident, $uint:ident, $long:ident, $ulong:ident, $float:ident, $double:ident]),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $rank;

            impl Rank for $rank {
                type Object = $obj;
                type Max<O: Rank> = <O as Rank>::$slot;
                type MaxInt = $int;
                type MaxUInt = $uint;
                type MaxLong = $long;
                type MaxULong = $ulong;
                type MaxFloat = $float;
                type MaxDouble = $double;
            }
        )*
    };
}

rank_table! {
    //                                   Int         UInt        Long        ULong       Float       Double
    RankInt    (MaxInt)    => i32 [RankInt,    RankUInt,   RankLong,   RankULong,  RankFloat,  RankDouble],
    RankUInt   (MaxUInt)   => u32 [RankUInt,   RankUInt,   RankLong,   RankULong,  RankFloat,  RankDouble],
    RankLong   (MaxLong)   => i64 [RankLong,   RankLong,   RankLong,   RankULong,  RankFloat,  RankDouble],
    RankULong  (MaxULong)  => u64 [RankULong,  RankULong,  RankULong,  RankULong,  RankFloat,  RankDouble],
    RankFloat  (MaxFloat)  => f32 [RankFloat,  RankFloat,  RankFloat,  RankFloat,  RankFloat,  RankDouble],
    RankDouble (MaxDouble) => f64 [RankDouble, RankDouble, RankDouble, RankDouble, RankDouble, RankDouble],
}

/// Result object of the usual arithmetic conversions between `A` and `B`.
pub type UsualArithmetic<A, B> = <<<KindOf<A> as Kind>::Rank as Rank>::Max<<KindOf<B> as Kind>::Rank> as Rank>::Object;

/// Promoted object of `A`.
pub type Promoted<A> = <<KindOf<A> as Kind>::Rank as Rank>::Object;

// =============================================================================
// Built-in arithmetic objects
// =============================================================================

macro_rules! arithmetic_objects {
    ($($ty:ident: $kind:ty),* $(,)?) => {
        $(
            impl_object!($ty {
                kind: $kind,
                bases: [],
                converts_to: [],
                converts_from: [],
                common_type: [],
                common_reference: [],
            });
        )*
    };
}

arithmetic_objects! {
    bool: UnsignedInt<RankInt>,
    i8: SignedInt<RankInt>,
    u8: UnsignedInt<RankInt>,
    i16: SignedInt<RankInt>,
    u16: UnsignedInt<RankInt>,
    i32: SignedInt<RankInt>,
    u32: UnsignedInt<RankUInt>,
    i64: SignedInt<RankLong>,
    u64: UnsignedInt<RankULong>,
    f32: Float<RankFloat>,
    f64: Float<RankDouble>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_usual_arithmetic_conversions() {
        assert!(same::<UsualArithmetic<i32, i16>, i32>());
        assert!(same::<UsualArithmetic<u8, i8>, i32>());
        assert!(same::<UsualArithmetic<i32, u32>, u32>());
        assert!(same::<UsualArithmetic<u32, i64>, i64>());
        assert!(same::<UsualArithmetic<i64, u64>, u64>());
        assert!(same::<UsualArithmetic<u64, f32>, f32>());
        assert!(same::<UsualArithmetic<f64, bool>, f64>());
    }

    #[test]
    fn test_promotion() {
        assert!(same::<Promoted<bool>, i32>());
        assert!(same::<Promoted<u16>, i32>());
        assert!(same::<Promoted<u32>, u32>());
    }
}

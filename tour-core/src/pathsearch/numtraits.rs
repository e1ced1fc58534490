//! Dijkstra algorithm helper traits.

use std::fmt;

/// Helper trait providing zero value for numeric types.
pub trait Zero {
    const ZERO: Self;
}

/// Helper trait providing the "not reached yet" cost sentinel.
pub trait Infinity {
    const INFINITY: Self;
}

/// Link weight usable by the path search.
pub trait Weight: Copy + Ord + Zero + Infinity + fmt::Debug {
    /// Sum of two weights, `None` on overflow.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! int_weight {
    ($($t:ty),*) => {$(
        impl Zero for $t {
            const ZERO: $t = 0;
        }

        impl Infinity for $t {
            const INFINITY: $t = <$t>::MAX;
        }

        impl Weight for $t {
            fn checked_sum(self, other: Self) -> Option<Self> {
                self.checked_add(other)
            }
        }
    )*};
}

int_weight!(i32, i64, u32, u64, usize);

#[test]
fn test_checked_sum() {
    assert_eq!(2_i64.checked_sum(3), Some(5));
    assert_eq!(2_i64.checked_sum(-3), Some(-1));
    assert_eq!(i64::INFINITY.checked_sum(1), None);
    assert_eq!(u32::INFINITY.checked_sum(0), Some(u32::MAX));
    assert!(i64::ZERO < i64::INFINITY);
}

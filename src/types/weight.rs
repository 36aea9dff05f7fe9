//! Numeric edge-weight capability and finite/infinite cost arithmetic.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

use serde::Serialize;

/// Capability required of edge labels by the weighted algorithms.
///
/// Implemented for the standard integer and float types. NaN weights are
/// unsupported: comparisons involving NaN fall back to "equal" and give
/// meaningless orderings.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// The additive identity (cost of the empty path).
    fn zero() -> Self;

    /// Half of this weight, used by the heuristic term in priority search.
    fn halve(self) -> Self;
}

macro_rules! impl_weight_int {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn zero() -> Self {
                0
            }
            fn halve(self) -> Self {
                self / 2
            }
        }
    )*};
}

macro_rules! impl_weight_float {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn zero() -> Self {
                0.0
            }
            fn halve(self) -> Self {
                self / 2.0
            }
        }
    )*};
}

impl_weight_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_weight_float!(f32, f64);

/// A path cost: either a finite weight or "no path known".
///
/// `Infinite` is absorbing under addition and compares greater than every
/// finite cost, so relaxation can never route through a non-existent
/// partial path.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Cost<W> {
    /// A reachable cost.
    Finite(W),
    /// No path known.
    Infinite,
}

impl<W: Weight> Cost<W> {
    /// The zero cost (start vertex to itself).
    pub fn zero() -> Self {
        Cost::Finite(W::zero())
    }

    /// Whether this cost is finite.
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// The finite weight, or `None` for `Infinite`.
    pub fn finite(self) -> Option<W> {
        match self {
            Cost::Finite(w) => Some(w),
            Cost::Infinite => None,
        }
    }

    /// Add an edge weight to this cost. `Infinite` absorbs.
    pub fn plus(self, w: W) -> Self {
        match self {
            Cost::Finite(c) => Cost::Finite(c + w),
            Cost::Infinite => Cost::Infinite,
        }
    }
}

impl<W: Weight> Add for Cost<W> {
    type Output = Self;

    /// Concatenate two path costs. `Infinite` absorbs: a route through a
    /// non-existent partial path does not exist.
    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a + b),
            _ => Cost::Infinite,
        }
    }
}

impl<W: Weight> PartialEq for Cost<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Cost<W> {}

impl<W: Weight> PartialOrd for Cost<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Cost<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cost::Infinite, Cost::Infinite) => Ordering::Equal,
            (Cost::Infinite, Cost::Finite(_)) => Ordering::Greater,
            (Cost::Finite(_), Cost::Infinite) => Ordering::Less,
            // NaN weights are unsupported; incomparable treated as equal.
            (Cost::Finite(a), Cost::Finite(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        }
    }
}

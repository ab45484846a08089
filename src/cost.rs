/// Numeric cost shared by edge lengths, path costs and heuristic estimates.
///
/// The upper bound is reserved to mean "unreachable" and is never a valid
/// length.
pub trait Cost:
    Copy
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + core::cmp::Eq
    + PartialOrd
    + Ord
    + num_traits::SaturatingAdd
    + num_traits::bounds::UpperBounded
    + num_traits::Zero
    + std::ops::Add<Self, Output = Self>
    + std::ops::Sub<Self, Output = Self>
    + std::ops::AddAssign
{
    /// Whether this is a usable length, i.e. within `[0, max)`.
    #[inline(always)]
    fn valid(&self) -> bool {
        Self::zero() <= *self && *self < num_traits::bounds::UpperBounded::max_value()
    }

    /// `|self - other|` without underflowing unsigned costs.
    #[inline(always)]
    #[must_use]
    fn abs_diff(self, other: Self) -> Self {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }
}

impl Cost for u8 {}
impl Cost for u16 {}
impl Cost for u32 {}
impl Cost for u64 {}
impl Cost for usize {}

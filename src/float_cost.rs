use std::fmt::Debug;

use derive_more::Display;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use num_traits::bounds::UpperBounded;
use ordered_float::FloatCore;
use ordered_float::OrderedFloat;

use crate::cost::Cost;

/// Floating point edge lengths and estimates.
///
/// NaN sorts above infinity, so it never passes [`Cost::valid`].
#[derive(Copy, Clone, Default, Debug, Display)]
#[repr(transparent)]
#[display("{_0}")]
pub struct FloatCost<F: FloatCore>(pub OrderedFloat<F>);

impl<F> Cost for FloatCost<F>
where
    FloatCost<F>: Debug + std::ops::AddAssign + Ord + Eq + UpperBounded,
    F: FloatCore + std::fmt::Display,
{
}

impl<F> FloatCost<F>
where
    F: FloatCore,
{
    pub fn new(f: F) -> Self {
        Self(OrderedFloat(f))
    }
    pub fn from_ordered_float(f: OrderedFloat<F>) -> Self {
        Self(f)
    }

    #[inline(always)]
    pub fn infinity() -> Self {
        Self(OrderedFloat::infinity())
    }

    #[inline(always)]
    pub fn get(&self) -> F {
        self.0.0
    }
}

impl<F> From<F> for FloatCost<F>
where
    F: FloatCore,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// Forwards a binary operator to the wrapped `OrderedFloat`.
macro_rules! forward_op {
    ($op:ident, $method:ident) => {
        impl<F> std::ops::$op for FloatCost<F>
        where
            F: FloatCore,
        {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self(std::ops::$op::$method(self.0, rhs.0))
            }
        }
    };
}
forward_op!(Add, add);
forward_op!(Sub, sub);

impl<F> std::ops::AddAssign for FloatCost<F>
where
    F: FloatCore,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Float sums already saturate at infinity.
impl<F> SaturatingAdd for FloatCost<F>
where
    F: FloatCore,
{
    fn saturating_add(&self, rhs: &Self) -> Self {
        *self + *rhs
    }
}

impl<F> Zero for FloatCost<F>
where
    F: FloatCore,
{
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.get().is_zero()
    }
    #[inline(always)]
    fn zero() -> Self {
        Self::new(F::zero())
    }
}

/// Reserved for unreachable, never a valid length.
impl<F> UpperBounded for FloatCost<F>
where
    F: FloatCore,
{
    fn max_value() -> Self {
        Self::infinity()
    }
}

// Comparisons go through `OrderedFloat`, a plain derive would need `F: Eq`.
impl<F> Ord for FloatCost<F>
where
    F: FloatCore,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}
impl<F> PartialOrd for FloatCost<F>
where
    F: FloatCore,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<F> PartialEq for FloatCost<F>
where
    F: FloatCore,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}
impl<F> Eq for FloatCost<F> where F: FloatCore {}

//! The exclusive upper bound on generated overload arity.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::BoxBuilderError;

/// Exclusive upper bound on the arities that receive an overload.
///
/// A bound of `N` yields overloads for `1..=N - 1`. Bounds below
/// [`ArityBound::MIN`] leave nothing to emit and are rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArityBound(u32);

impl ArityBound {
    /// Smallest bound that produces at least one overload.
    pub const MIN: u32 = 2;

    /// Bound used by Loftwing: overloads for one to nineteen children.
    pub const DEFAULT: Self = Self(20);

    /// Validates `bound`.
    ///
    /// # Errors
    ///
    /// Returns [`BoxBuilderError::InvalidArityBound`] when `bound` is below
    /// [`ArityBound::MIN`].
    pub fn new(bound: u32) -> Result<Self, BoxBuilderError> {
        if bound < Self::MIN {
            return Err(BoxBuilderError::InvalidArityBound {
                bound,
                min: Self::MIN,
            });
        }
        Ok(Self(bound))
    }

    /// Returns the raw bound.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of overloads the bound produces.
    #[must_use]
    pub const fn overload_count(self) -> u32 {
        self.0 - 1
    }

    /// Arities that receive an overload, in emission order.
    #[must_use]
    pub const fn arities(self) -> RangeInclusive<u32> {
        1..=self.overload_count()
    }
}

impl Default for ArityBound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for ArityBound {
    type Error = BoxBuilderError;

    fn try_from(bound: u32) -> Result<Self, Self::Error> {
        Self::new(bound)
    }
}

impl fmt::Display for ArityBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ArityBound;
    use crate::error::BoxBuilderError;

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn bounds_without_overloads_are_rejected(#[case] bound: u32) {
        let err = ArityBound::new(bound).err();
        assert!(
            matches!(
                err,
                Some(BoxBuilderError::InvalidArityBound { bound: got, min: 2 }) if got == bound
            ),
            "unexpected result: {err:?}"
        );
    }

    #[rstest]
    #[case(2, 1..=1)]
    #[case(3, 1..=2)]
    #[case(20, 1..=19)]
    fn arities_exclude_the_bound(
        #[case] bound: u32,
        #[case] expected: std::ops::RangeInclusive<u32>,
    ) -> Result<(), BoxBuilderError> {
        let arity_bound = ArityBound::new(bound)?;
        assert_eq!(arity_bound.arities(), expected);
        assert_eq!(arity_bound.overload_count(), bound - 1);
        Ok(())
    }

    #[test]
    fn default_matches_loftwing_bound() {
        assert_eq!(ArityBound::default().get(), 20);
    }
}

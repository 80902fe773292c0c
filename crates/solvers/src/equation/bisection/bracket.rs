use thiserror::Error;

/// Why a pair of endpoints cannot be bisected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,

    #[error("bracket endpoints coincide")]
    ZeroWidth,

    /// Both endpoint residuals have the same sign.
    #[error("residual does not change sign across the bracket")]
    NoSignChange,
}

/// The interval still known to contain a root.
///
/// Endpoints are kept in ascending order together with the residual sign
/// observed at each, so a probe always replaces the endpoint it agrees with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    ends: [f64; 2],
    signs: [Sign; 2],
}

impl Bracket {
    /// Pairs validated bounds with their endpoint residual signs.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NoSignChange`] if both signs agree.
    pub(super) fn new(bounds: Bounds, left: Sign, right: Sign) -> Result<Self, BracketError> {
        if left == right {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self {
            ends: bounds.0,
            signs: [left, right],
        })
    }

    /// Lower and upper endpoint.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        self.ends
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        let [lo, hi] = self.ends;
        0.5 * (lo + hi)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        let [lo, hi] = self.ends;
        hi - lo
    }

    /// Moves the endpoint whose residual sign matches the probe at `x`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        let side = usize::from(self.signs[1] == sign);
        self.ends[side] = x;
    }
}

/// Residual sign as seen by the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Zero or above.
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub fn of(residual: f64) -> Self {
        if residual < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// Finite, distinct endpoints in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds([f64; 2]);

impl Bounds {
    /// Sorts the endpoints, rejecting infinities, NaN, and empty intervals.
    pub(super) fn new([a, b]: [f64; 2]) -> Result<Self, BracketError> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(BracketError::NonFinite);
        }
        match a.partial_cmp(&b) {
            Some(std::cmp::Ordering::Less) => Ok(Self([a, b])),
            Some(std::cmp::Ordering::Greater) => Ok(Self([b, a])),
            _ => Err(BracketError::ZeroWidth),
        }
    }

    pub(super) fn left(&self) -> f64 {
        self.0[0]
    }

    pub(super) fn right(&self) -> f64 {
        self.0[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket(ends: [f64; 2], left: Sign, right: Sign) -> Result<Bracket, BracketError> {
        Bracket::new(Bounds::new(ends)?, left, right)
    }

    #[test]
    fn age_window_given_backwards_is_sorted() {
        let bounds = Bounds::new([5e9, 0.0]).expect("distinct finite ends");
        assert_eq!((bounds.left(), bounds.right()), (0.0, 5e9));
    }

    #[test]
    fn degenerate_windows_are_rejected() {
        assert_eq!(Bounds::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bounds::new([-f64::INFINITY, 0.0]),
            Err(BracketError::NonFinite)
        );
        assert_eq!(Bounds::new([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn matching_signs_do_not_bracket() {
        assert_eq!(
            bracket([0.0, 1.0], Sign::Positive, Sign::Positive),
            Err(BracketError::NoSignChange)
        );
    }

    #[test]
    fn probes_replace_the_agreeing_endpoint() {
        let mut b = bracket([0.0, 8.0], Sign::Negative, Sign::Positive).expect("sign change");

        b.shrink(b.midpoint(), Sign::Negative);
        assert_eq!(b.as_array(), [4.0, 8.0]);

        b.shrink(b.midpoint(), Sign::Positive);
        assert_eq!(b.as_array(), [4.0, 6.0]);
        assert_eq!(b.width(), 2.0);
    }

    #[test]
    fn decreasing_residuals_shrink_from_the_other_side() {
        let mut b = bracket([0.0, 8.0], Sign::Positive, Sign::Negative).expect("sign change");

        b.shrink(4.0, Sign::Positive);
        assert_eq!(b.as_array(), [4.0, 8.0]);
    }

    #[test]
    fn zero_residual_counts_as_positive() {
        assert_eq!(Sign::of(0.0), Sign::Positive);
        assert_eq!(Sign::of(-0.0), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
    }
}

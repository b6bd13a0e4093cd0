use crate::stencil::WindowReducer;
use crate::util::*;

/// Fixed-coefficient weighted sum over a window.
///
/// The pairing is the convolution convention: coefficient `n - 1 - i`
/// weights window element `i`, so the first coefficient lands on the last
/// window element. A filter built from coefficients `[a, b, c]` reduces a
/// window `[x, y, z]` to `c*x + b*y + a*z`.
pub struct BoxFilter<NumType> {
    coefficients: Vec<NumType>,
}

impl<NumType: NumTrait> BoxFilter<NumType> {
    pub fn new(coefficients: Vec<NumType>) -> Self {
        BoxFilter { coefficients }
    }

    /// The window width this filter expects, the coefficient count.
    /// Pass this as the width argument to `stencil::apply`.
    pub fn width(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[NumType] {
        &self.coefficients
    }
}

impl<NumType: Float> BoxFilter<NumType> {
    /// `width` equal coefficients summing to one. Stenciled over a
    /// sequence this computes a moving average.
    pub fn uniform(width: usize) -> Self {
        let c = NumType::one() / NumType::from(width).unwrap();
        BoxFilter {
            coefficients: vec![c; width],
        }
    }

    /// Coefficients `[-0.5, 0, .., 0, 0.5]`, which reduce a window to
    /// half the difference between its first and last elements.
    pub fn centered_difference(width: usize) -> Self {
        debug_assert!(width >= 2);
        let half = NumType::from(0.5).unwrap();
        let mut coefficients = vec![NumType::zero(); width];
        coefficients[0] = -half;
        coefficients[width - 1] = half;
        BoxFilter { coefficients }
    }
}

impl<NumType: NumTrait> WindowReducer<NumType> for BoxFilter<NumType> {
    /// Reversed-index weighted sum of the window.
    ///
    /// A window whose length differs from the coefficient count is a
    /// soft failure: a warning is logged naming the expected width and
    /// the reduction yields zero, so one malformed call degrades a
    /// single output element instead of aborting the whole scan.
    fn reduce(&self, window: &[NumType]) -> NumType {
        let n = self.coefficients.len();
        if window.len() != n {
            log::warn!(
                "box filter called with a wrong-length window, expected length {}",
                n
            );
            return NumType::zero();
        }
        let mut total = NumType::zero();
        for i in 0..n {
            total = total + self.coefficients[n - 1 - i] * window[i];
        }
        total
    }
}

use crate::util::*;

/// Arithmetic mean of a `width`-element window, i.e. the moving-average
/// reducer.
pub fn mean<NumType: Float>(width: usize) -> impl Fn(&[NumType]) -> NumType {
    let denominator = NumType::from(width).unwrap();
    move |window: &[NumType]| {
        let mut total = NumType::zero();
        for x in window {
            total = total + *x;
        }
        total / denominator
    }
}

/// Sum of the squares of the window elements.
pub fn sum_of_squares<NumType: NumTrait>() -> impl Fn(&[NumType]) -> NumType {
    |window: &[NumType]| {
        let mut total = NumType::zero();
        for x in window {
            total = total + *x * *x;
        }
        total
    }
}

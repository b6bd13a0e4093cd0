use crate::util::*;

/// All window reducers must provide an operation that adheres to this shape:
/// one window of values in, one scalar out.
pub trait WindowReducer<NumType: NumTrait> {
    fn reduce(&self, window: &[NumType]) -> NumType;
}

/// Plain closures are reducers, so ad-hoc operations like a mean or a
/// sum of squares can be passed straight to `apply`.
impl<NumType: NumTrait, Operation> WindowReducer<NumType> for Operation
where
    Operation: Fn(&[NumType]) -> NumType,
{
    fn reduce(&self, window: &[NumType]) -> NumType {
        self(window)
    }
}

/// Apply `reducer` to every contiguous `width`-element window of `data`,
/// left to right, collecting one output value per window position.
///
/// For input length k the output has length k - width + 1. A width of zero
/// or a width larger than the input clamps to an empty output instead of
/// panicking, so the scan is total over its domain.
///
/// Windows are borrowed subslices of `data`; the reducer sees each window
/// exactly once and cannot retain or mutate it.
pub fn apply<NumType, Reducer>(
    data: &[NumType],
    reducer: &Reducer,
    width: usize,
) -> Vec<NumType>
where
    NumType: NumTrait,
    Reducer: WindowReducer<NumType>,
{
    if width == 0 || width > data.len() {
        return Vec::new();
    }
    let out_length = data.len() - width + 1;
    let mut output = Vec::with_capacity(out_length);
    for i in 0..out_length {
        output.push(reducer.reduce(&data[i..i + width]));
    }
    output
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use std::cell::RefCell;

    #[test]
    fn output_length() {
        let first = |window: &[i32]| window[0];
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        for width in 1..=data.len() {
            let output = apply(&data, &first, width);
            assert_eq!(output.len(), data.len() - width + 1);
        }
    }

    #[test]
    fn oversized_width_is_empty() {
        let first = |window: &[i32]| window[0];
        let data = [1, 2, 3];
        assert!(apply(&data, &first, 4).is_empty());
        assert!(apply(&data, &first, 100).is_empty());
        assert!(apply::<i32, _>(&[], &first, 1).is_empty());
    }

    #[test]
    fn zero_width_is_empty() {
        let first = |window: &[i32]| window[0];
        let data = [1, 2, 3];
        assert!(apply(&data, &first, 0).is_empty());
    }

    #[test]
    fn full_width_single_window() {
        let sum = |window: &[i32]| window.iter().sum::<i32>();
        let data = [1, 2, 3, 4];
        assert_eq!(apply(&data, &sum, 4), vec![10]);
    }

    #[test]
    fn window_contents_match_subslices() {
        let data = [2.0f64, 5.0, -10.0, -7.0, -7.0];
        let sum = |window: &[f64]| window.iter().fold(0.0, |a, x| a + x);
        let output = apply(&data, &sum, 2);
        for (i, v) in output.iter().enumerate() {
            assert_approx_eq!(f64, *v, data[i] + data[i + 1]);
        }
    }

    #[test]
    fn windows_visited_left_to_right() {
        let seen: RefCell<Vec<Vec<i32>>> = RefCell::new(Vec::new());
        let recorder = |window: &[i32]| {
            seen.borrow_mut().push(window.to_vec());
            window[0]
        };
        let data = [1, 2, 3, 4];
        let output = apply(&data, &recorder, 2);
        assert_eq!(output, vec![1, 2, 3]);
        assert_eq!(
            *seen.borrow(),
            vec![vec![1, 2], vec![2, 3], vec![3, 4]]
        );
    }
}

//! Property-based tests for the multiplication kernels.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::block::{combine, split};
    use crate::conventional;
    use crate::shape::{crop, next_power_of_two, pad};
    use crate::strassen::{strassen_multiply, strassen_multiply_with};
    use crate::{Matrix, StrassenConfig};

    // Integer-valued entries keep every product exact in f64
    fn entry() -> impl Strategy<Value = f64> {
        (-20i32..=20).prop_map(f64::from)
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f64>> {
        prop::collection::vec(entry(), rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
    }

    fn any_matrix() -> impl Strategy<Value = Matrix<f64>> {
        (1usize..=9, 1usize..=9).prop_flat_map(|(r, c)| matrix(r, c))
    }

    fn square_pair() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
        (1usize..=12).prop_flat_map(|n| (matrix(n, n), matrix(n, n)))
    }

    fn compatible_pair() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
        (1usize..=7, 1usize..=7, 1usize..=7)
            .prop_flat_map(|(r, k, c)| (matrix(r, k), matrix(k, c)))
    }

    fn even_square() -> impl Strategy<Value = Matrix<f64>> {
        (1usize..=6).prop_flat_map(|half| matrix(2 * half, 2 * half))
    }

    fn max_abs_diff(a: &Matrix<f64>, b: &Matrix<f64>) -> f64 {
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    proptest! {
        #[test]
        fn strassen_matches_conventional_square((a, b) in square_pair()) {
            let expected = conventional::multiply(&a, &b).unwrap();
            let actual = strassen_multiply(&a, &b).unwrap();
            prop_assert_eq!(actual.shape(), expected.shape());
            prop_assert!(max_abs_diff(&actual, &expected) <= 1e-6);
        }

        #[test]
        fn strassen_matches_conventional_rectangular((a, b) in compatible_pair()) {
            let expected = conventional::multiply(&a, &b).unwrap();
            let actual = strassen_multiply(&a, &b).unwrap();
            prop_assert_eq!(actual.shape(), (a.num_rows(), b.num_cols()));
            prop_assert!(max_abs_diff(&actual, &expected) <= 1e-6);
        }

        #[test]
        fn leaf_size_is_transparent((a, b) in square_pair(), leaf_size in 1usize..=8) {
            let expected = conventional::multiply(&a, &b).unwrap();
            let config = StrassenConfig::with_leaf_size(leaf_size);
            let actual = strassen_multiply_with(&a, &b, &config).unwrap();
            prop_assert!(max_abs_diff(&actual, &expected) <= 1e-6);
        }

        #[test]
        fn pad_then_crop_is_exact(m in any_matrix(), extra in 0usize..5) {
            let target = m.num_rows().max(m.num_cols()) + extra;
            let padded = pad(&m, target).unwrap();
            prop_assert_eq!(padded.shape(), (target, target));
            prop_assert_eq!(crop(&padded, m.num_rows(), m.num_cols()).unwrap(), m);
        }

        #[test]
        fn split_then_combine_is_exact(m in even_square()) {
            let q = split(&m).unwrap();
            prop_assert_eq!(q.side() * 2, m.num_rows());
            prop_assert_eq!(combine(&q.a11, &q.a12, &q.a21, &q.a22).unwrap(), m);
        }

        #[test]
        fn next_power_of_two_is_minimal(n in 0usize..1_000_000) {
            let p = next_power_of_two(n).unwrap();
            prop_assert!(p.is_power_of_two());
            prop_assert!(p >= n);
            prop_assert!(p == 1 || p / 2 < n);
        }

        #[test]
        fn next_power_of_two_is_monotonic(a in 0usize..100_000, b in 0usize..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(next_power_of_two(lo).unwrap() <= next_power_of_two(hi).unwrap());
        }
    }
}

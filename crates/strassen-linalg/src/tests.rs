//! Integration tests for strassen-linalg.

#[cfg(test)]
mod integration_tests {
    use crate::block::{combine, split};
    use crate::conventional;
    use crate::lu::{inverse, LuDecomposition};
    use crate::shape::{crop, pad};
    use crate::strassen::{multiply_recursive, strassen_multiply, strassen_multiply_with};
    use crate::validate::{is_approx_identity, max_identity_deviation, DEFAULT_TOLERANCE};
    use crate::{Matrix, StrassenConfig};

    fn sample() -> Matrix<f64> {
        Matrix::from_rows(vec![
            vec![1.0, 3.0, 3.0, 6.0],
            vec![4.0, 2.0, 8.0, 2.0],
            vec![3.0, 3.0, 4.0, 5.0],
            vec![2.0, 6.0, 3.0, 1.0],
        ])
        .unwrap()
    }

    /// Deterministic, well-spread entries without an RNG.
    fn filled(rows: usize, cols: usize, seed: u32) -> Matrix<f64> {
        let data = (0..rows * cols)
            .map(|i| {
                let v = (i as u32).wrapping_mul(2_654_435_761).wrapping_add(seed) % 1000;
                f64::from(v) / 100.0 - 5.0
            })
            .collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, eps: f64) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert!((x - y).abs() < eps, "{x} vs {y}");
        }
    }

    #[test]
    fn test_sample_times_inverse_both_engines() {
        let m = sample();
        let n = inverse(&m).unwrap();

        for product in [
            conventional::multiply(&m, &n).unwrap(),
            conventional::multiply(&n, &m).unwrap(),
            strassen_multiply(&m, &n).unwrap(),
            strassen_multiply(&n, &m).unwrap(),
        ] {
            assert_eq!(product.shape(), (4, 4));
            assert!(is_approx_identity(&product, DEFAULT_TOLERANCE));
            for i in 0..4 {
                for j in 0..4 {
                    if i == j {
                        assert!((product[(i, j)] - 1.0).abs() < 1e-6);
                    } else {
                        assert!(product[(i, j)].abs() < 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn test_three_by_three_squared_matches_conventional() {
        let a = Matrix::from_rows(vec![
            vec![2.0, -1.0, 0.5],
            vec![0.0, 3.0, 1.0],
            vec![4.0, 1.5, -2.0],
        ])
        .unwrap();
        let expected = conventional::multiply(&a, &a).unwrap();
        let actual = strassen_multiply(&a, &a).unwrap();
        assert_close(&actual, &expected, 1e-6);
    }

    #[test]
    fn test_strassen_matches_conventional_across_sizes() {
        for n in 1..=17 {
            let a = filled(n, n, 7);
            let b = filled(n, n, 11);
            let expected = conventional::multiply(&a, &b).unwrap();
            let actual = strassen_multiply(&a, &b).unwrap();
            assert_close(&actual, &expected, 1e-6);
        }
    }

    #[test]
    fn test_strassen_matches_conventional_rectangular() {
        for (r, k, c) in [(1, 5, 3), (6, 2, 7), (3, 9, 1), (8, 8, 5)] {
            let a = filled(r, k, 3);
            let b = filled(k, c, 5);
            let expected = conventional::multiply(&a, &b).unwrap();
            let actual = strassen_multiply(&a, &b).unwrap();
            assert_close(&actual, &expected, 1e-6);
        }
    }

    #[test]
    fn test_leaf_size_does_not_change_result() {
        let a = filled(20, 20, 1);
        let b = filled(20, 20, 2);
        let reference = strassen_multiply(&a, &b).unwrap();
        for leaf_size in [2, 4, 8, 32] {
            let config = StrassenConfig::with_leaf_size(leaf_size);
            let actual = strassen_multiply_with(&a, &b, &config).unwrap();
            assert_close(&actual, &reference, 1e-6);
        }
    }

    #[test]
    fn test_strassen_is_bit_identical_across_runs() {
        let m = sample();
        let n = inverse(&m).unwrap();
        let first = strassen_multiply(&m, &n).unwrap();
        for _ in 0..5 {
            let again = strassen_multiply(&m, &n).unwrap();
            let same_bits = first
                .as_slice()
                .iter()
                .zip(again.as_slice())
                .all(|(x, y)| x.to_bits() == y.to_bits());
            assert!(same_bits);
        }
    }

    #[test]
    fn test_recursive_equals_padded_driver_on_power_of_two() {
        let a = filled(8, 8, 4);
        let b = filled(8, 8, 9);
        let config = StrassenConfig::default();
        assert_eq!(
            multiply_recursive(&a, &b, &config).unwrap(),
            strassen_multiply_with(&a, &b, &config).unwrap()
        );
    }

    #[test]
    fn test_pad_split_combine_crop_pipeline() {
        let a = filled(5, 3, 13);
        let padded = pad(&a, 8).unwrap();
        let rebuilt = split(&padded).unwrap().combine().unwrap();
        assert_eq!(rebuilt, padded);
        let q = split(&padded).unwrap();
        let again = combine(&q.a11, &q.a12, &q.a21, &q.a22).unwrap();
        assert_eq!(crop(&again, 5, 3).unwrap(), a);
    }

    #[test]
    fn test_larger_inverse_round_trip() {
        // Diagonally dominant, hence invertible
        let mut a = filled(12, 12, 21);
        for i in 0..12 {
            a[(i, i)] += 100.0;
        }
        let lu = LuDecomposition::decompose(&a).unwrap();
        assert!(!lu.is_singular());
        let inv = lu.inverse().unwrap();
        let product = strassen_multiply(&a, &inv).unwrap();
        let deviation = max_identity_deviation(&product).unwrap();
        assert!(deviation < DEFAULT_TOLERANCE, "deviation {deviation}");
    }

    #[test]
    fn test_f32_kernels() {
        let a: Matrix<f32> = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let c = strassen_multiply(&a, &a).unwrap();
        assert_eq!(c, conventional::multiply(&a, &a).unwrap());
    }
}

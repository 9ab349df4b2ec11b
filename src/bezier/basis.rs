pub fn binomial(n: usize, mut k: usize) -> u64 {
    if k > n {
        return 0;
    }
    k = k.min(n - k);
    let mut res = 1u64;
    for i in 0..k as u64 {
        res = res * (n as u64 - i) / (i + 1);
    }
    res
}

/// Bernstein basis value `C(n,i) * t^i * (1-t)^(n-i)`.
///
/// `powi` returns 1 for a zero exponent, so t = 0 and t = 1 need no
/// special-casing at the patch corners.
pub fn bernstein(i: usize, n: usize, t: f64) -> f64 {
    binomial(n, i) as f64 * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// One row of basis values for every index of a degree-`n` axis.
pub fn bernstein_row(n: usize, t: f64) -> Vec<f64> {
    (0..=n).map(|i| bernstein(i, n, t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_degree_three_weights() {
        assert_eq!(binomial(3, 0), 1);
        assert_eq!(binomial(3, 1), 3);
        assert_eq!(binomial(3, 2), 3);
        assert_eq!(binomial(3, 3), 1);
    }

    #[test]
    fn binomial_edges() {
        for n in 0..12 {
            assert_eq!(binomial(n, 0), 1);
            assert_eq!(binomial(n, n), 1);
        }
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(10, 3), 120);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn bernstein_partition_of_unity() {
        for n in 1..=5 {
            for step in 0..=20 {
                let t = step as f64 / 20.0;
                let sum: f64 = bernstein_row(n, t).iter().sum();
                assert!((sum - 1.0).abs() < 1e-12, "n={n} t={t} sum={sum}");
            }
        }
    }

    #[test]
    fn bernstein_endpoints_select_corners() {
        for n in 1..=4 {
            assert_eq!(bernstein(0, n, 0.0), 1.0);
            assert_eq!(bernstein(n, n, 0.0), 0.0);
            assert_eq!(bernstein(0, n, 1.0), 0.0);
            assert_eq!(bernstein(n, n, 1.0), 1.0);
        }
    }
}

//! Float comparison helpers shared by the workspace's tests.

use crate::matrix::Vector3;

/// Component-wise absolute comparison of two vectors.
#[track_caller]
pub fn assert_vec_close(a: &Vector3, b: &Vector3, tolerance: f64, ctx: &str) {
    let worst = (a.x - b.x)
        .abs()
        .max((a.y - b.y).abs())
        .max((a.z - b.z).abs());
    assert!(
        worst <= tolerance,
        "{}: |Δ|max={:.3e} exceeds {:.1e}\n  a={}\n  b={}",
        ctx,
        worst,
        tolerance,
        a,
        b
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_vec_close_reports() {
        assert_vec_close(&Vector3::zeros(), &Vector3::new(0.0, 1e-9, 0.0), 1e-12, "offset vector");
    }
}

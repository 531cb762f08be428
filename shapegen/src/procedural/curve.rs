//! Bezier curve evaluation
//!
//! Bernstein-form evaluation of an arbitrary-degree Bezier curve and uniform
//! parameter sampling into a polyline.

use glam::Vec3;

use crate::error::GeometryError;

/// Binomial coefficient C(n, k) via the multiplicative recurrence
///
/// Computed in f64 so moderately high curve degrees stay exact enough for
/// Bernstein weights. Returns 0.0 when `k > n`.
pub fn binomial(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0f64;
    for i in 1..=k {
        result = result * f64::from(n - k + i) / f64::from(i);
    }
    result
}

/// Highest curve degree accepted by [`sample_bezier`]
///
/// C(n, n/2) still fits an f64 well below this bound.
pub const MAX_CURVE_DEGREE: usize = 1000;

/// Evaluate a Bezier curve at parameter `t`
///
/// `Σ C(n,i) · t^i · (1-t)^(n-i) · P_i` with `n = control_points.len() - 1`.
/// Weights are computed in f64 and narrowed once. Values of `t` outside
/// [0, 1] extrapolate. An empty slice yields the origin.
///
/// `t = 0.0` and `t = 1.0` return the first and last control point exactly.
/// Degrees above [`MAX_CURVE_DEGREE`] overflow the binomial and give
/// non-finite interior points.
pub fn bezier_point(control_points: &[Vec3], t: f32) -> Vec3 {
    let (Some(&first), Some(&last)) = (control_points.first(), control_points.last()) else {
        return Vec3::ZERO;
    };
    if t == 0.0 {
        return first;
    }
    if t == 1.0 {
        return last;
    }

    let n = (control_points.len() - 1) as u32;
    let t = f64::from(t);
    let s = 1.0 - t;

    control_points
        .iter()
        .enumerate()
        .fold(Vec3::ZERO, |acc, (i, &point)| {
            let i = i as u32;
            let weight = binomial(n, i) * t.powi(i as i32) * s.powi((n - i) as i32);
            acc + point * weight as f32
        })
}

/// Sample a Bezier curve at `segments + 1` evenly spaced parameters
///
/// Sample `k` is taken at `t = k / segments`, so the first and last samples
/// equal the first and last control points exactly.
///
/// # Errors
/// - [`GeometryError::TooFewControlPoints`] for fewer than 2 control points
/// - [`GeometryError::CurveDegreeTooHigh`] past [`MAX_CURVE_DEGREE`]
/// - [`GeometryError::NonFiniteControlPoint`] if any coordinate is NaN or infinite
/// - [`GeometryError::TooFewSegments`] if `segments` is 0
pub fn sample_bezier(control_points: &[Vec3], segments: u32) -> Result<Vec<Vec3>, GeometryError> {
    validate_control_points(control_points)?;
    crate::error::require_segments("bezier", "segments", segments, 1)?;

    Ok((0..=segments)
        .map(|k| bezier_point(control_points, k as f32 / segments as f32))
        .collect())
}

/// Check that a control polygon can define a curve
pub(crate) fn validate_control_points(control_points: &[Vec3]) -> Result<(), GeometryError> {
    if control_points.len() < 2 {
        return Err(GeometryError::TooFewControlPoints(control_points.len()));
    }
    let degree = control_points.len() - 1;
    if degree > MAX_CURVE_DEGREE {
        return Err(GeometryError::CurveDegreeTooHigh {
            degree,
            max: MAX_CURVE_DEGREE,
        });
    }
    if let Some(index) = control_points.iter().position(|p| !p.is_finite()) {
        return Err(GeometryError::NonFiniteControlPoint(index));
    }
    Ok(())
}

use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{CurveDomain, PlanarCurve};

/// Horizontal amplitude of the raw heart curve: `x(t) = 16 sin³ t`.
pub const HEART_HALF_WIDTH: f64 = 16.0;

const Y_COS_1: f64 = 13.0;
const Y_COS_2: f64 = 5.0;
const Y_COS_3: f64 = 2.0;
const Y_COS_4: f64 = 1.0;

/// The classic quartic-trigonometric heart curve.
///
/// ```text
/// x(t) = 16 sin³ t
/// y(t) = s · (13 cos t − 5 cos 2t − 2 cos 3t − cos 4t),   t ∈ [0, 2π]
/// ```
///
/// `s` is a vertical squash applied to `y` only. At `t = 0` the curve sits in
/// the notch between the two lobes; at `t = π` it reaches the tip.
#[derive(Debug, Clone, Copy)]
pub struct HeartCurve {
    height_scale: f64,
}

impl HeartCurve {
    /// Creates a heart curve with the given vertical squash.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] unless
    /// `height_scale` is finite and positive.
    pub fn new(height_scale: f64) -> Result<Self> {
        if !(height_scale.is_finite() && height_scale > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "height_scale",
                value: height_scale,
                min: f64::MIN_POSITIVE,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self { height_scale })
    }

    /// Returns the vertical squash factor.
    #[must_use]
    pub fn height_scale(&self) -> f64 {
        self.height_scale
    }

    /// Evaluates the curve without a range check.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let x = HEART_HALF_WIDTH * t.sin().powi(3);
        let y = Y_COS_1 * t.cos()
            - Y_COS_2 * (2.0 * t).cos()
            - Y_COS_3 * (3.0 * t).cos()
            - Y_COS_4 * (4.0 * t).cos();
        Point2::new(x, y * self.height_scale)
    }
}

impl PlanarCurve for HeartCurve {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        if !(-TOLERANCE..=TAU + TOLERANCE).contains(&t) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: TAU,
            }
            .into());
        }
        Ok(self.point_at(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        self.evaluate(t)?;
        let dx = 3.0 * HEART_HALF_WIDTH * t.sin().powi(2) * t.cos();
        let dy = -Y_COS_1 * t.sin()
            + 2.0 * Y_COS_2 * (2.0 * t).sin()
            + 3.0 * Y_COS_3 * (3.0 * t).sin()
            + 4.0 * Y_COS_4 * (4.0 * t).sin();
        Ok(Vector2::new(dx, dy * self.height_scale))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn notch_and_tip_lie_on_axis() {
        let heart = HeartCurve::new(1.0).unwrap();
        let notch = heart.evaluate(0.0).unwrap();
        let tip = heart.evaluate(PI).unwrap();
        assert!(notch.x.abs() < 1e-12);
        assert!((notch.y - 5.0).abs() < 1e-12);
        assert!(tip.x.abs() < 1e-12);
        assert!((tip.y + 17.0).abs() < 1e-12);
    }

    #[test]
    fn widest_point_reaches_half_width() {
        let heart = HeartCurve::new(1.0).unwrap();
        let side = heart.evaluate(FRAC_PI_2).unwrap();
        assert!((side.x - HEART_HALF_WIDTH).abs() < 1e-12);
    }

    #[test]
    fn height_scale_squashes_y_only() {
        let full = HeartCurve::new(1.0).unwrap();
        let squashed = HeartCurve::new(0.45).unwrap();
        for i in 0..16 {
            let t = f64::from(i) * TAU / 16.0;
            let a = full.evaluate(t).unwrap();
            let b = squashed.evaluate(t).unwrap();
            assert!((a.x - b.x).abs() < 1e-12);
            assert!((a.y * 0.45 - b.y).abs() < 1e-12);
        }
    }

    #[test]
    fn curve_is_mirror_symmetric() {
        let heart = HeartCurve::new(0.7).unwrap();
        for i in 1..32 {
            let t = f64::from(i) * PI / 32.0;
            let a = heart.evaluate(t).unwrap();
            let b = heart.evaluate(TAU - t).unwrap();
            assert!((a.x + b.x).abs() < 1e-9);
            assert!((a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn tangent_matches_finite_difference() {
        let heart = HeartCurve::new(0.45).unwrap();
        let h = 1e-6;
        for t in [0.3, 1.2, 2.5, 4.0, 5.9] {
            let fd = (heart.evaluate(t + h).unwrap() - heart.evaluate(t - h).unwrap()) / (2.0 * h);
            let tan = heart.tangent(t).unwrap();
            assert!((fd - tan).norm() < 1e-4, "t={t}: {fd:?} vs {tan:?}");
        }
    }

    #[test]
    fn invalid_height_scale_is_rejected() {
        assert!(HeartCurve::new(0.0).is_err());
        assert!(HeartCurve::new(-1.0).is_err());
        assert!(HeartCurve::new(f64::NAN).is_err());
    }

    #[test]
    fn out_of_domain_parameter_is_rejected() {
        let heart = HeartCurve::new(1.0).unwrap();
        assert!(heart.evaluate(-0.1).is_err());
        assert!(heart.evaluate(7.0).is_err());
    }
}

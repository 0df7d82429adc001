use std::f64::consts::TAU;

use crate::geometry::HeartCurve;
use crate::math::polygon_2d::y_range;
use crate::math::{Point2, RANGE_EPSILON};

/// How finely the heart is sampled, as a function of radius.
///
/// Larger hearts get more samples so the silhouette stays smooth on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartResolution {
    /// Floor on the number of curve samples.
    pub min_samples: usize,
    /// Curve samples added per unit of radius.
    pub samples_per_unit: f64,
    /// Floor on spline divisions per span.
    pub min_curve_segments: usize,
    /// Spline divisions added per unit of radius.
    pub curve_segments_per_unit: f64,
    /// Ceiling on spline divisions per span.
    pub max_curve_segments: usize,
}

impl Default for HeartResolution {
    fn default() -> Self {
        Self {
            min_samples: 64,
            samples_per_unit: 24.0,
            min_curve_segments: 2,
            curve_segments_per_unit: 2.0,
            max_curve_segments: 12,
        }
    }
}

impl HeartResolution {
    /// Number of points sampled on the heart curve for `radius`.
    ///
    /// Always even, so both the notch (`t = 0`) and the tip (`t = π`) are
    /// samples and the outline is mirror-symmetric sample for sample.
    #[must_use]
    pub fn sample_count(&self, radius: f64) -> usize {
        let count = self.min_samples.max(ceil_count(radius * self.samples_per_unit));
        count.saturating_add(count % 2)
    }

    /// Spline divisions per span used when flattening the contour.
    #[must_use]
    pub fn curve_segments(&self, radius: f64) -> usize {
        let max = self.max_curve_segments.max(self.min_curve_segments);
        ceil_count(radius * self.curve_segments_per_unit).clamp(self.min_curve_segments, max)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_count(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        value.ceil() as usize
    } else {
        0
    }
}

/// Ordered samples of the heart curve, implicitly closed.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartOutline {
    points: Vec<Point2>,
}

impl HeartOutline {
    /// Samples `count` points at `t = 2πi / count`, starting at the notch
    /// and running clockwise.
    #[must_use]
    pub fn sample(curve: &HeartCurve, count: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let step = TAU / count.max(1) as f64;
        #[allow(clippy::cast_precision_loss)]
        let points = (0..count).map(|i| curve.point_at(step * i as f64)).collect();
        Self { points }
    }

    /// Narrows the outline toward its lowest point.
    ///
    /// Each x is multiplied by `bottom_taper + (1 - bottom_taper) * ease(n)`
    /// where `n` is the normalized height (0 at the tip, 1 at the top) and
    /// `ease` is smoothstep.
    #[must_use]
    pub fn tapered(&self, bottom_taper: f64) -> Self {
        let Some((min_y, max_y)) = y_range(&self.points) else {
            return self.clone();
        };
        let span = (max_y - min_y).max(RANGE_EPSILON);
        let points = self
            .points
            .iter()
            .map(|p| {
                let n = ((p.y - min_y) / span).clamp(0.0, 1.0);
                let ease = n * n * (3.0 - 2.0 * n);
                Point2::new(p.x * (bottom_taper + (1.0 - bottom_taper) * ease), p.y)
            })
            .collect();
        Self { points }
    }

    /// The samples in curve order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Lowest and highest y, or `None` for an empty outline.
    #[must_use]
    pub fn y_range(&self) -> Option<(f64, f64)> {
        y_range(&self.points)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

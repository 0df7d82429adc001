use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{CurveDomain, PlanarCurve};

/// Uniform Catmull-Rom spline interpolating an ordered list of points.
///
/// The curve passes through every control point. Span `i` runs from
/// `points[i]` to `points[i + 1]` over the parameter range `[i, i + 1]`.
/// Open splines repeat their end points as outer neighbours; closed splines
/// wrap indices around and add a final span back to the first point.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: Vec<Point2>,
    closed: bool,
}

impl CatmullRom {
    /// Creates an open spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than 2 points are given.
    pub fn open(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(format!(
                "open spline needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }
        Ok(Self {
            points,
            closed: false,
        })
    }

    /// Creates a closed (periodic) spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if fewer than 3 points are given.
    pub fn closed(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "closed spline needs at least 3 points, got {}",
                points.len()
            ))
            .into());
        }
        Ok(Self {
            points,
            closed: true,
        })
    }

    /// Returns the interpolated control points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of spans between consecutive control points.
    #[must_use]
    pub fn span_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Samples the spline with `divisions` uniform steps per span.
    ///
    /// Open splines include both end points. Closed splines stop one step
    /// short of the start so the first point is not repeated.
    #[must_use]
    pub fn sample(&self, divisions: usize) -> Vec<Point2> {
        let divisions = divisions.max(1);
        let spans = self.span_count();
        let mut out = Vec::with_capacity(spans * divisions + 1);
        for span in 0..spans {
            for step in 0..divisions {
                #[allow(clippy::cast_precision_loss)]
                let s = step as f64 / divisions as f64;
                out.push(self.eval_span(span, s));
            }
        }
        if !self.closed {
            out.push(self.points[self.points.len() - 1]);
        }
        out
    }

    /// The four control points that shape span `span`.
    fn span_controls(&self, span: usize) -> [Point2; 4] {
        let n = self.points.len();
        if self.closed {
            [
                self.points[(span + n - 1) % n],
                self.points[span % n],
                self.points[(span + 1) % n],
                self.points[(span + 2) % n],
            ]
        } else {
            let last = n - 1;
            [
                self.points[span.saturating_sub(1)],
                self.points[span.min(last)],
                self.points[(span + 1).min(last)],
                self.points[(span + 2).min(last)],
            ]
        }
    }

    fn eval_span(&self, span: usize, s: f64) -> Point2 {
        let [p0, p1, p2, p3] = self.span_controls(span);
        let (p0, p1, p2, p3) = (p0.coords, p1.coords, p2.coords, p3.coords);
        let s2 = s * s;
        let s3 = s2 * s;
        let v = (p1 * 2.0
            + (p2 - p0) * s
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * s2
            + (-p0 + p1 * 3.0 - p2 * 3.0 + p3) * s3)
            * 0.5;
        Point2::from(v)
    }

    fn derivative_span(&self, span: usize, s: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.span_controls(span);
        let (p0, p1, p2, p3) = (p0.coords, p1.coords, p2.coords, p3.coords);
        ((p2 - p0)
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * (2.0 * s)
            + (-p0 + p1 * 3.0 - p2 * 3.0 + p3) * (3.0 * s * s))
            * 0.5
    }

    /// Splits a global parameter into `(span, local)` after range checking.
    fn locate(&self, t: f64) -> Result<(usize, f64)> {
        let domain = self.domain();
        if !(t >= domain.t_min - TOLERANCE && t <= domain.t_max + TOLERANCE) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into());
        }
        let t = t.clamp(domain.t_min, domain.t_max);
        let last = self.span_count() - 1;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let span = (t.floor() as usize).min(last);
        #[allow(clippy::cast_precision_loss)]
        let local = t - span as f64;
        Ok((span, local))
    }
}

impl PlanarCurve for CatmullRom {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        let (span, s) = self.locate(t)?;
        Ok(self.eval_span(span, s))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        let (span, s) = self.locate(t)?;
        Ok(self.derivative_span(span, s))
    }

    fn domain(&self) -> CurveDomain {
        #[allow(clippy::cast_precision_loss)]
        CurveDomain::new(0.0, self.span_count() as f64)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

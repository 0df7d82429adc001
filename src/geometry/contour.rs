use crate::error::Result;
use crate::math::Point2;

use super::curve::{CatmullRom, PlanarCurve};

/// Consecutive discretized points closer than this are merged.
const MERGE_DISTANCE: f64 = 1e-9;

/// One piece of a [`Contour`], starting where the previous piece ended.
#[derive(Debug, Clone)]
pub enum ContourSegment {
    /// Straight line to the given point.
    Line(Point2),
    /// Spline whose first control point is the previous end point.
    Spline(CatmullRom),
}

/// A closed 2D path built from straight and spline segments.
///
/// The path is implicitly closed: the last segment's end connects back to
/// `start`.
#[derive(Debug, Clone)]
pub struct Contour {
    start: Point2,
    segments: Vec<ContourSegment>,
}

impl Contour {
    /// Starts a new contour at `start`.
    #[must_use]
    pub fn new(start: Point2) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// A contour consisting of one periodic spline through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 points are given.
    pub fn closed_spline(points: Vec<Point2>) -> Result<Self> {
        let spline = CatmullRom::closed(points)?;
        let start = spline.points()[0];
        Ok(Self {
            start,
            segments: vec![ContourSegment::Spline(spline)],
        })
    }

    /// Appends a straight line from the current end point to `to`.
    pub fn line_to(&mut self, to: Point2) -> &mut Self {
        self.segments.push(ContourSegment::Line(to));
        self
    }

    /// Appends a spline from the current end point through `points` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty.
    pub fn spline_through(&mut self, points: &[Point2]) -> Result<&mut Self> {
        let mut controls = Vec::with_capacity(points.len() + 1);
        controls.push(self.end_point());
        controls.extend_from_slice(points);
        self.segments
            .push(ContourSegment::Spline(CatmullRom::open(controls)?));
        Ok(self)
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the segments in path order.
    #[must_use]
    pub fn segments(&self) -> &[ContourSegment] {
        &self.segments
    }

    /// Returns the point where the last segment ends.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        match self.segments.last() {
            None => self.start,
            Some(ContourSegment::Line(to)) => *to,
            Some(ContourSegment::Spline(spline)) => {
                if spline.is_closed() {
                    self.start
                } else {
                    spline.points()[spline.points().len() - 1]
                }
            }
        }
    }

    /// Flattens the contour into a closed polygon.
    ///
    /// Lines contribute their end point; each spline span contributes
    /// `curve_segments` points. Coincident neighbours and the closing
    /// duplicate of the start point are dropped.
    #[must_use]
    pub fn discretize(&self, curve_segments: usize) -> Vec<Point2> {
        let mut out: Vec<Point2> = vec![self.start];
        for segment in &self.segments {
            match segment {
                ContourSegment::Line(to) => push_distinct(&mut out, *to),
                ContourSegment::Spline(spline) => {
                    for p in spline.sample(curve_segments).into_iter().skip(1) {
                        push_distinct(&mut out, p);
                    }
                }
            }
        }
        while out.len() > 1 && (out[out.len() - 1] - out[0]).norm() < MERGE_DISTANCE {
            out.pop();
        }
        out
    }
}

fn push_distinct(out: &mut Vec<Point2>, p: Point2) {
    if out.last().is_none_or(|last| (p - last).norm() >= MERGE_DISTANCE) {
        out.push(p);
    }
}

use tracing::debug;

use crate::error::Result;
use crate::geometry::Contour;
use crate::math::{Point2, TOLERANCE};

use super::HeartOutline;

/// Which path [`assemble_contour`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourKind {
    /// Spline across the top, straight edges into the tip.
    Stitched,
    /// One closed spline through every sample.
    FullSpline,
}

/// A closed heart profile ready for extrusion.
#[derive(Debug, Clone)]
pub struct HeartContour {
    pub contour: Contour,
    pub kind: ContourKind,
}

/// Builds the heart profile from a tapered outline.
///
/// Samples above `y_min + span * straight_frac` form the top arc, which is
/// followed by a spline. The rest of the outline is replaced by straight
/// edges from the arc ends through the lowest sample on each side to the
/// tip. When fewer than two samples clear the threshold the whole outline
/// becomes a closed spline instead.
///
/// # Errors
///
/// Returns an error only when the outline has fewer than 3 points.
pub fn assemble_contour(outline: &HeartOutline, straight_frac: f64) -> Result<HeartContour> {
    let points = outline.points();
    let stitched = outline.y_range().and_then(|(min_y, max_y)| {
        let threshold = min_y + (max_y - min_y) * straight_frac;
        let arc = top_arc(points, threshold);
        if arc.len() < 2 {
            return None;
        }
        let (left, right) = bottom_anchors(points);
        Some((arc, left?, right?, min_y))
    });

    let Some((arc, left, right, min_y)) = stitched else {
        debug!(samples = points.len(), straight_frac, "top arc degenerate, using full spline");
        return Ok(HeartContour {
            contour: Contour::closed_spline(points.to_vec())?,
            kind: ContourKind::FullSpline,
        });
    };

    debug!(arc = arc.len(), samples = points.len(), "stitching heart contour");
    let mut contour = Contour::new(arc[0]);
    contour
        .spline_through(&arc[1..])?
        .line_to(right)
        .line_to(Point2::new(0.0, min_y))
        .line_to(left);
    Ok(HeartContour {
        contour,
        kind: ContourKind::Stitched,
    })
}

/// Samples above `threshold` connected to the highest sample, left to right.
///
/// Starts at the first highest sample and walks the circular buffer in both
/// directions while samples stay above the threshold, visiting each index at
/// most once. Empty when even the highest sample is not above it.
fn top_arc(points: &[Point2], threshold: f64) -> Vec<Point2> {
    let n = points.len();
    let Some(anchor) = highest_index(points) else {
        return Vec::new();
    };
    if points[anchor].y <= threshold {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    visited[anchor] = true;
    let mut walk = |step: usize| {
        let mut taken = Vec::new();
        let mut i = anchor;
        loop {
            i = (i + step) % n;
            if visited[i] || points[i].y <= threshold {
                break;
            }
            visited[i] = true;
            taken.push(i);
        }
        taken
    };
    let forward = walk(1);
    let backward = walk(n - 1);

    // Samples run clockwise, so increasing index is left to right over the top.
    backward
        .into_iter()
        .rev()
        .chain(std::iter::once(anchor))
        .chain(forward)
        .map(|i| points[i])
        .collect()
}

fn highest_index(points: &[Point2]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        if best.is_none_or(|b| p.y > points[b].y) {
            best = Some(i);
        }
    }
    best
}

/// Lowest samples strictly left and strictly right of the axis.
fn bottom_anchors(points: &[Point2]) -> (Option<Point2>, Option<Point2>) {
    let lowest = |side: fn(f64) -> bool| {
        points
            .iter()
            .filter(|p| side(p.x))
            .fold(None, |best: Option<Point2>, p| match best {
                Some(b) if b.y <= p.y => Some(b),
                _ => Some(*p),
            })
    };
    (lowest(|x| x < -TOLERANCE), lowest(|x| x > TOLERANCE))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{ContourSegment, HeartCurve};
    use crate::math::polygon_2d::is_simple;

    fn heart(count: usize) -> HeartOutline {
        HeartOutline::sample(&HeartCurve::new(0.45).unwrap(), count).tapered(0.7)
    }

    #[test]
    fn arc_stays_above_threshold_and_runs_left_to_right() {
        let outline = heart(72);
        let (min_y, max_y) = outline.y_range().unwrap();
        let threshold = min_y + (max_y - min_y) * 0.12;
        let arc = top_arc(outline.points(), threshold);

        assert!(arc.len() > 2 && arc.len() < 72);
        assert!(arc.iter().all(|p| p.y > threshold));
        assert!(arc[0].x < 0.0);
        assert!(arc[arc.len() - 1].x > 0.0);
        assert!(arc.iter().any(|p| (p.y - max_y).abs() < 1e-12));
    }

    #[test]
    fn arc_never_revisits_samples() {
        // a threshold below every sample must not wrap around twice
        let outline = heart(64);
        let arc = top_arc(outline.points(), f64::NEG_INFINITY);
        assert_eq!(arc.len(), 64);
    }

    #[test]
    fn anchor_below_threshold_gives_empty_arc() {
        let outline = heart(64);
        let (_, max_y) = outline.y_range().unwrap();
        assert!(top_arc(outline.points(), max_y).is_empty());
    }

    #[test]
    fn anchors_are_lowest_off_axis_samples() {
        let outline = heart(64);
        let (left, right) = bottom_anchors(outline.points());
        let (left, right) = (left.unwrap(), right.unwrap());
        assert!(left.x < 0.0 && right.x > 0.0);
        assert!((left.y - right.y).abs() < 1e-9);
        assert!(outline
            .points()
            .iter()
            .filter(|p| p.x.abs() > TOLERANCE)
            .all(|p| p.y >= left.y - 1e-12));
    }

    #[test]
    fn stitched_contour_is_simple() {
        for count in [64, 72, 240] {
            let heart = assemble_contour(&heart(count), 0.12).unwrap();
            assert_eq!(heart.kind, ContourKind::Stitched);
            let segments = heart.contour.segments();
            assert!(matches!(segments[0], ContourSegment::Spline(_)));
            assert_eq!(segments.len(), 4);
            for divisions in [2, 6, 12] {
                let pts = heart.contour.discretize(divisions);
                assert!(is_simple(&pts), "count={count} divisions={divisions}");
            }
        }
    }

    #[test]
    fn tip_is_on_axis_at_lowest_y() {
        let outline = heart(64);
        let (min_y, _) = outline.y_range().unwrap();
        let heart = assemble_contour(&outline, 0.12).unwrap();
        let ContourSegment::Line(tip) = heart.contour.segments()[2] else {
            panic!("expected a line into the tip");
        };
        assert!(tip.x.abs() < 1e-12);
        assert!((tip.y - min_y).abs() < 1e-12);
    }

    #[test]
    fn full_straight_fraction_falls_back_to_spline() {
        let heart = assemble_contour(&heart(64), 1.0).unwrap();
        assert_eq!(heart.kind, ContourKind::FullSpline);
        assert_eq!(heart.contour.segments().len(), 1);
        let pts = heart.contour.discretize(4);
        assert_eq!(pts.len(), 64 * 4);
        assert!(is_simple(&pts));
    }

    #[test]
    fn tiny_outline_is_an_error_not_a_panic() {
        let outline = HeartOutline::sample(&HeartCurve::new(1.0).unwrap(), 2);
        assert!(assemble_contour(&outline, 1.0).is_err());
    }
}

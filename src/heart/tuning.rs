use crate::error::{GeometryError, Result};

/// Proportion controls for the heart silhouette.
///
/// Constructed through [`HeartTuning::new`], which checks every field, or
/// [`HeartTuning::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartTuning {
    height_scale: f64,
    bottom_taper: f64,
    straight_frac: f64,
    length_scale: f64,
}

impl HeartTuning {
    /// Creates a validated tuning.
    ///
    /// * `height_scale` in `(0, 1]`: vertical squash of the raw curve.
    /// * `bottom_taper` in `[0.6, 1]`: width kept at the tip, `1` disables tapering.
    /// * `straight_frac` in `[0, 1]`: share of the height, from the tip up,
    ///   drawn with straight edges.
    /// * `length_scale` in `(0, 1]`: front-to-back scale after extrusion.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] for the first value
    /// outside its range. NaN is always out of range.
    pub fn new(
        height_scale: f64,
        bottom_taper: f64,
        straight_frac: f64,
        length_scale: f64,
    ) -> Result<Self> {
        check("height_scale", height_scale, 0.0, 1.0, false)?;
        check("bottom_taper", bottom_taper, 0.6, 1.0, true)?;
        check("straight_frac", straight_frac, 0.0, 1.0, true)?;
        check("length_scale", length_scale, 0.0, 1.0, false)?;
        Ok(Self {
            height_scale,
            bottom_taper,
            straight_frac,
            length_scale,
        })
    }

    #[must_use]
    pub fn height_scale(&self) -> f64 {
        self.height_scale
    }

    #[must_use]
    pub fn bottom_taper(&self) -> f64 {
        self.bottom_taper
    }

    #[must_use]
    pub fn straight_frac(&self) -> f64 {
        self.straight_frac
    }

    #[must_use]
    pub fn length_scale(&self) -> f64 {
        self.length_scale
    }
}

impl Default for HeartTuning {
    fn default() -> Self {
        Self {
            height_scale: 0.45,
            bottom_taper: 0.7,
            straight_frac: 0.12,
            length_scale: 0.45,
        }
    }
}

/// Range check with an inclusive upper bound and optionally inclusive lower bound.
fn check(parameter: &'static str, value: f64, min: f64, max: f64, min_inclusive: bool) -> Result<()> {
    let above_min = if min_inclusive { value >= min } else { value > min };
    if above_min && value <= max {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        }
        .into())
    }
}

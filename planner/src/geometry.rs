//! Canvas percentage space and its mapping onto physical feet.
//!
//! Every position and room size in a [`crate::doc::Document`] is stored as a
//! percentage of the canvas (0–100 on both axes). `CanvasExtent` fixes how
//! many feet that canvas spans, which is what turns a room's `w`/`h` into a
//! label like `12.5' x 10'`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT_FT, CANVAS_WIDTH_FT};

/// Physical size of the full canvas in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasExtent {
    /// Feet spanned by the horizontal 0–100 percent axis.
    pub width_ft: f64,
    /// Feet spanned by the vertical 0–100 percent axis.
    pub height_ft: f64,
}

impl Default for CanvasExtent {
    fn default() -> Self {
        Self { width_ft: CANVAS_WIDTH_FT, height_ft: CANVAS_HEIGHT_FT }
    }
}

impl CanvasExtent {
    #[must_use]
    pub fn new(width_ft: f64, height_ft: f64) -> Self {
        Self { width_ft, height_ft }
    }

    /// Horizontal percent to feet.
    #[must_use]
    pub fn percent_to_feet_x(&self, percent: f64) -> f64 {
        percent / 100.0 * self.width_ft
    }

    /// Vertical percent to feet.
    #[must_use]
    pub fn percent_to_feet_y(&self, percent: f64) -> f64 {
        percent / 100.0 * self.height_ft
    }

    /// Horizontal feet to percent.
    #[must_use]
    pub fn feet_to_percent_x(&self, feet: f64) -> f64 {
        feet / self.width_ft * 100.0
    }

    /// Vertical feet to percent.
    #[must_use]
    pub fn feet_to_percent_y(&self, feet: f64) -> f64 {
        feet / self.height_ft * 100.0
    }

    /// Display string for a room of `w` × `h` percent, e.g. `12.5' x 10'`.
    ///
    /// Both sides are rounded to one decimal with trailing zeros dropped.
    #[must_use]
    pub fn dimension_string(&self, w: f64, h: f64) -> String {
        let w_ft = round_tenth(self.percent_to_feet_x(w));
        let h_ft = round_tenth(self.percent_to_feet_y(h));
        format!("{w_ft}' x {h_ft}'")
    }

    /// Floor area in square feet of a `w` × `h` percent room, rounded to one decimal.
    #[must_use]
    pub fn area(&self, w: f64, h: f64) -> f64 {
        round_tenth(self.percent_to_feet_x(w) * self.percent_to_feet_y(h))
    }
}

/// Round to one decimal place. Negative zero is folded into zero so it
/// formats as `0`.
#[must_use]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

/// Parse a `W' x H'` dimension string back into feet.
///
/// Returns `None` for anything that does not follow the format produced by
/// [`CanvasExtent::dimension_string`].
#[must_use]
pub fn parse_dimension_string(s: &str) -> Option<(f64, f64)> {
    let (w, h) = s.split_once(" x ")?;
    let w = w.strip_suffix('\'')?.parse::<f64>();
    let h = h.strip_suffix('\'')?.parse::<f64>();
    match (w, h) {
        (Ok(w), Ok(h)) => Some((w, h)),
        _ => None,
    }
}

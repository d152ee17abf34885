//! Physical lengths used by the document model.
//!
//! WordprocessingML measures drawing extents in EMU (English Metric Units).
//! Everything is stored as an integer EMU count so that conversions never
//! accumulate rounding error.

use serde::{Deserialize, Serialize};

/// EMU per inch
pub const EMU_PER_INCH: i64 = 914_400;
/// EMU per typographic point (1/72 inch)
pub const EMU_PER_PT: i64 = 12_700;
/// EMU per centimetre
pub const EMU_PER_CM: i64 = 360_000;

/// Resolution assumed for images that carry no dpi information
pub const DEFAULT_DPI: u32 = 72;

/// A length expressed in EMU
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Length(i64);

impl Length {
    pub const fn emu(emu: i64) -> Self {
        Length(emu)
    }

    pub fn inches(inches: f64) -> Self {
        Length((inches * EMU_PER_INCH as f64).round() as i64)
    }

    pub fn pt(points: f64) -> Self {
        Length((points * EMU_PER_PT as f64).round() as i64)
    }

    pub fn cm(cm: f64) -> Self {
        Length((cm * EMU_PER_CM as f64).round() as i64)
    }

    /// Length of `px` pixels rendered at `dpi`
    pub fn from_pixels(px: u32, dpi: u32) -> Self {
        let dpi = if dpi == 0 { DEFAULT_DPI } else { dpi };
        Length(px as i64 * EMU_PER_INCH / dpi as i64)
    }

    pub fn as_emu(self) -> i64 {
        self.0
    }

    pub fn as_inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }

    pub fn as_pt(self) -> f64 {
        self.0 as f64 / EMU_PER_PT as f64
    }

    /// Scale by the ratio `num / den`, rounding to the nearest EMU
    pub fn scaled(self, num: u32, den: u32) -> Self {
        if den == 0 {
            return self;
        }
        let scaled = (self.0 as i128 * num as i128 + den as i128 / 2) / den as i128;
        Length(scaled as i64)
    }
}

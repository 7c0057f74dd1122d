//! Length units and precision
//!
//! Metric (mm) and Imperial (inch) unit systems, and the smallest
//! representable length increment used when numeric results must be nudged
//! off a boundary.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Machine coordinate units (millimeters or inches)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Units {
    /// Millimeters (metric)
    #[default]
    MM,
    /// Inches (imperial)
    INCH,
}

impl Units {
    /// Number of decimals a length in this unit is resolved to.
    pub fn default_decimals(&self) -> u32 {
        match self {
            Units::MM => 5,
            Units::INCH => 6,
        }
    }
}

/// Resolution of a length value, expressed in decimal places.
///
/// `epsilon()` is the smallest positive increment a length can take at this
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthPrecision {
    decimals: u32,
}

impl LengthPrecision {
    /// Largest supported number of decimals; beyond this the increment
    /// drowns in f64 rounding for typical machine coordinates.
    pub const MAX_DECIMALS: u32 = 12;

    /// Creates a precision of `decimals` decimal places.
    pub fn new(decimals: u32) -> Result<Self> {
        if decimals > Self::MAX_DECIMALS {
            return Err(Error::PrecisionOutOfRange {
                decimals,
                max: Self::MAX_DECIMALS,
            });
        }
        Ok(Self { decimals })
    }

    /// The default precision for a unit system.
    pub fn for_units(units: Units) -> Self {
        Self {
            decimals: units.default_decimals(),
        }
    }

    /// Number of decimal places.
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Smallest positive length increment, `10^-decimals`.
    pub fn epsilon(&self) -> f64 {
        10f64.powi(-(self.decimals as i32))
    }
}

impl Default for LengthPrecision {
    fn default() -> Self {
        Self::for_units(Units::default())
    }
}

//! Responsive size buckets for event cells.
//!
//! A cell's pixel height puts it on a discrete size ladder used for style
//! and label decisions. The ladder is monotonic: a cell small enough for
//! "2xs" also satisfies every larger rung, so responsive checks can test a
//! single predicate.

use serde::{Deserialize, Serialize};

/// Tallest height (in pixels) still classified as `2xs`.
pub const TWO_XS_MAX_PX: f32 = 16.0;
/// Tallest height (in pixels) still classified as `xs`.
pub const XS_MAX_PX: f32 = 30.0;
/// Tallest height (in pixels) still classified as `sm`.
pub const SM_MAX_PX: f32 = 48.0;

/// Discrete responsive-size classification of a cell.
///
/// Ordered smallest to largest, so `TwoXs < Xs < Sm < Md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBucket {
    /// At most [`TWO_XS_MAX_PX`] tall.
    #[serde(rename = "2xs")]
    TwoXs,
    /// At most [`XS_MAX_PX`] tall.
    Xs,
    /// At most [`SM_MAX_PX`] tall.
    Sm,
    /// Anything taller.
    Md,
}

impl SizeBucket {
    /// Classifies a pixel height.
    pub fn from_height(px: f32) -> Self {
        if px <= TWO_XS_MAX_PX {
            Self::TwoXs
        } else if px <= XS_MAX_PX {
            Self::Xs
        } else if px <= SM_MAX_PX {
            Self::Sm
        } else {
            Self::Md
        }
    }

    /// Returns true if this bucket is at most as large as `other`.
    pub fn fits(self, other: SizeBucket) -> bool {
        self <= other
    }

    /// The CSS class name for this bucket.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoXs => "2xs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }

    /// True when the cell is at most `2xs`.
    pub fn is_2xs(self) -> bool {
        self.fits(Self::TwoXs)
    }

    /// True when the cell is at most `xs`.
    pub fn is_xs(self) -> bool {
        self.fits(Self::Xs)
    }

    /// True when the cell is at most `sm`.
    pub fn is_sm(self) -> bool {
        self.fits(Self::Sm)
    }

    /// True when the cell is at most `md`. Every cell is.
    pub fn is_md(self) -> bool {
        self.fits(Self::Md)
    }
}

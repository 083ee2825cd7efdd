//! Per-pixel differencing of two normalized images.
//!
//! Both inputs must already share dimensions (see
//! [`preprocess::match_dimensions`](crate::preprocess::match_dimensions)).
//! The absolute difference of two binary images is itself binary, so
//! [`threshold_mask`] is a clamp that only matters if the upstream stages
//! ever produce intermediate magnitudes.

use image::GrayImage;

/// Absolute per-pixel difference `|a - b|` in 8-bit sample space.
///
/// # Panics
///
/// Panics if the two images differ in dimensions.
#[must_use = "returns the difference image"]
pub fn abs_difference(a: &GrayImage, b: &GrayImage) -> GrayImage {
    assert_eq!(
        a.dimensions(),
        b.dimensions(),
        "difference requires equally sized images"
    );

    let mut out = a.clone();
    for (px, other) in out.pixels_mut().zip(b.pixels()) {
        px[0] = px[0].abs_diff(other[0]);
    }
    out
}

/// Map every sample strictly above `cutoff` to 255 and every other sample to 0.
#[must_use = "returns the mask"]
pub fn threshold_mask(diff: &GrayImage, cutoff: u8) -> GrayImage {
    let mut out = diff.clone();
    for px in out.pixels_mut() {
        px[0] = if px[0] > cutoff { 255 } else { 0 };
    }
    out
}

/// Summary of how much of a mask is flagged as different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaskStats {
    /// Number of samples flagged as different (non-zero).
    pub differing: u64,
    /// Total number of samples in the mask.
    pub total: u64,
}

impl MaskStats {
    /// Count the flagged samples in `mask`.
    #[must_use]
    pub fn of(mask: &GrayImage) -> Self {
        let differing = mask.pixels().filter(|p| p[0] != 0).count() as u64;
        Self {
            differing,
            total: u64::from(mask.width()) * u64::from(mask.height()),
        }
    }

    /// Fraction of samples flagged, in `[0, 1]`. Zero for an empty mask.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.differing as f64 / self.total as f64
        }
    }

    /// Whether no sample differs.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.differing == 0
    }
}

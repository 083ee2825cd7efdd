//! Normalization stages applied to each input before differencing.
//!
//! Both images go through the same fixed sequence:
//! 1. **Grayscale**: BT.601 luma, single-channel input passes through
//! 2. **Dimension matching**: the reference is resampled to the subject's size
//! 3. **Blur**: separable Gaussian to suppress sensor noise and JPEG artifacts
//! 4. **Binarize**: fixed luminance cutoff, producing a {0, 255} image

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, RgbImage};

use crate::error::{Error, Result};

/// Fixed-point BT.601 weights (`0.299`, `0.587`, `0.114`) scaled by `2^14`.
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

/// Full-precision working buffer for the blur passes.
type FloatImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Binomial taps used when sigma is derived from a small kernel size.
const TAPS_1: [f32; 1] = [1.0];
const TAPS_3: [f32; 3] = [0.25, 0.5, 0.25];
const TAPS_5: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];
const TAPS_7: [f32; 7] = [
    0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25,
];

/// Convert a decoded image to single-channel luminance.
///
/// 8-bit grayscale input is returned unchanged. Everything else is reduced
/// to 8-bit RGB (alpha dropped) and weighted with
/// `0.299*R + 0.587*G + 0.114*B`, rounded to nearest.
#[must_use = "returns the grayscale image"]
pub fn to_luma(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => rgb_to_luma(&other.to_rgb8()),
    }
}

fn rgb_to_luma(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let px = rgb.get_pixel(x, y);
        let weighted = LUMA_R * u32::from(px[0])
            + LUMA_G * u32::from(px[1])
            + LUMA_B * u32::from(px[2])
            + LUMA_ROUND;
        Luma([u8::try_from(weighted >> LUMA_SHIFT).unwrap_or(u8::MAX)])
    })
}

/// Resample `reference` to exactly `width` x `height` with bilinear filtering.
///
/// No registration is attempted: aspect ratio is not preserved, so a
/// reference captured at a different angle or framing will itself show up
/// as a difference. An image that already has the target size is copied
/// as-is.
#[must_use = "returns the resized image"]
pub fn match_dimensions(reference: &GrayImage, width: u32, height: u32) -> GrayImage {
    if reference.dimensions() == (width, height) {
        return reference.clone();
    }
    image::imageops::resize(reference, width, height, FilterType::Triangle)
}

/// Build a normalized 1D Gaussian kernel of `size` taps.
///
/// Sigma follows the usual kernel-size convention
/// `0.3 * ((size - 1) * 0.5 - 1) + 0.8`; for sizes 1, 3, 5 and 7 the
/// equivalent binomial taps are used directly.
///
/// # Errors
///
/// Returns [`Error::InvalidOptions`] if `size` is zero or even.
pub fn gaussian_kernel(size: u32) -> Result<Vec<f32>> {
    if size == 0 || size % 2 == 0 {
        return Err(Error::InvalidOptions(format!(
            "blur kernel size must be odd and at least 1, got {size}"
        )));
    }

    let taps = match size {
        1 => TAPS_1.to_vec(),
        3 => TAPS_3.to_vec(),
        5 => TAPS_5.to_vec(),
        7 => TAPS_7.to_vec(),
        _ => sampled_gaussian(size),
    };
    Ok(taps)
}

#[allow(clippy::cast_precision_loss)]
fn sampled_gaussian(size: u32) -> Vec<f32> {
    let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (size / 2) as f32;
    let scale = -0.5 / (sigma * sigma);

    let mut taps: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (scale * d * d).exp()
        })
        .collect();

    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Smooth a grayscale image with a separable kernel applied along both axes.
///
/// Borders are mirrored without repeating the edge sample
/// (`gfedcb|abcdefgh|gfedcba`). Both passes run in `f32` and the result is
/// rounded to nearest once at the end, so the binomial kernels give exact
/// 8-bit results. A single-tap kernel returns a copy of the input.
#[must_use = "returns the blurred image"]
pub fn blur(image: &GrayImage, kernel: &[f32]) -> GrayImage {
    let (width, height) = image.dimensions();
    if kernel.len() <= 1 || width == 0 || height == 0 {
        return image.clone();
    }

    let pad = u32::try_from(kernel.len() / 2).unwrap_or(u32::MAX);
    let padded = FloatImage::from_fn(width + 2 * pad, height + 2 * pad, |x, y| {
        let sx = reflect_101(i64::from(x) - i64::from(pad), width);
        let sy = reflect_101(i64::from(y) - i64::from(pad), height);
        Luma([f32::from(image.get_pixel(sx, sy)[0])])
    });

    // Out-of-range taps only touch the padding, which is cropped away.
    let filtered = imageproc::filter::separable_filter_equal(&padded, kernel);

    GrayImage::from_fn(width, height, |x, y| {
        Luma([round_to_u8(filtered.get_pixel(x + pad, y + pad)[0])])
    })
}

/// Map a possibly out-of-range index into `0..len` by reflection about the
/// edge samples.
fn reflect_101(index: i64, len: u32) -> u32 {
    let len = i64::from(len);
    if len <= 1 {
        return 0;
    }
    let mut p = index;
    while p < 0 || p >= len {
        p = if p < 0 { -p } else { 2 * (len - 1) - p };
    }
    u32::try_from(p).unwrap_or(0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Map every sample `>= cutoff` to 255 and every other sample to 0.
#[must_use = "returns the binary image"]
pub fn binarize(image: &GrayImage, cutoff: u8) -> GrayImage {
    let mut out = image.clone();
    for px in out.pixels_mut() {
        px[0] = if px[0] >= cutoff { 255 } else { 0 };
    }
    out
}

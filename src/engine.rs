//! Core comparison engine.

use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageDecoder, ImageError, ImageFormat, ImageReader};
use tracing::{debug, info, warn};

use crate::difference::{self, MaskStats};
use crate::error::{Error, ImageRole, Result};
use crate::preprocess;

/// Luminance cutoff used to binarize each blurred input.
pub const DEFAULT_BINARY_THRESHOLD: u8 = 128;
/// Cutoff applied to the absolute difference of the two binary images.
pub const DEFAULT_DIFF_THRESHOLD: u8 = 50;
/// Side length of the Gaussian blur kernel.
pub const DEFAULT_BLUR_KERNEL: u32 = 5;

/// Options controlling the comparison pipeline.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Blurred samples at or above this value become white.
    pub binary_threshold: u8,
    /// Difference samples above this value are flagged in the mask.
    pub diff_threshold: u8,
    /// Gaussian kernel size (odd, at least 1).
    pub blur_kernel: u32,
    /// Enable verbose logging.
    pub verbose: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            binary_threshold: DEFAULT_BINARY_THRESHOLD,
            diff_threshold: DEFAULT_DIFF_THRESHOLD,
            blur_kernel: DEFAULT_BLUR_KERNEL,
            verbose: false,
            quiet: false,
        }
    }
}

/// Result of comparing one subject file against a reference.
#[derive(Debug)]
pub struct ProcessResult {
    /// Path of the subject file.
    pub path: PathBuf,
    /// Where the mask was (or would have been) written.
    pub output: PathBuf,
    /// Whether the comparison and save succeeded.
    pub success: bool,
    /// How much of the mask is flagged; zero on failure.
    pub stats: MaskStats,
    /// Human-readable status message.
    pub message: String,
}

impl ProcessResult {
    fn failed(path: &Path, output: &Path, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            output: output.to_path_buf(),
            success: false,
            stats: MaskStats::default(),
            message,
        }
    }
}

/// The comparison engine holding validated options and the blur kernel.
///
/// Create once with [`DiffEngine::new()`] and reuse for multiple comparisons.
/// Every comparison is independent; the engine holds no per-request state.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    opts: ProcessOptions,
    kernel: Vec<f32>,
}

impl DiffEngine {
    /// Create a new engine, validating `opts` and precomputing the blur kernel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if the blur kernel size is zero or even.
    pub fn new(opts: ProcessOptions) -> Result<Self> {
        let kernel = preprocess::gaussian_kernel(opts.blur_kernel)?;
        Ok(Self { opts, kernel })
    }

    /// The options this engine was built with.
    #[must_use]
    pub fn options(&self) -> &ProcessOptions {
        &self.opts
    }

    /// Compare two encoded images and return the PNG-encoded difference mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if either buffer is not a decodable image,
    /// [`Error::EmptyImage`] if one has a zero dimension, and
    /// [`Error::Encode`] if the mask cannot be encoded.
    pub fn compare(&self, subject: &[u8], reference: &[u8]) -> Result<Vec<u8>> {
        let subject = decode(subject, ImageRole::Subject)?;
        let reference = decode(reference, ImageRole::Reference)?;
        let mask = self.compare_images(&subject, &reference)?;
        encode_mask(&mask)
    }

    /// Compare two decoded images and return the difference mask.
    ///
    /// The mask has the subject's dimensions; the reference is resampled to
    /// match. Every sample of the mask is either 0 (same) or 255 (differs).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyImage`] if either image has a zero dimension.
    pub fn compare_images(
        &self,
        subject: &DynamicImage,
        reference: &DynamicImage,
    ) -> Result<GrayImage> {
        ensure_not_empty(subject, ImageRole::Subject)?;
        ensure_not_empty(reference, ImageRole::Reference)?;

        let (width, height) = (subject.width(), subject.height());
        let subject_gray = preprocess::to_luma(subject);
        let reference_gray =
            preprocess::match_dimensions(&preprocess::to_luma(reference), width, height);
        debug!(
            width,
            height,
            reference_width = reference.width(),
            reference_height = reference.height(),
            "aligned reference to subject"
        );

        let subject_bin = self.normalize(&subject_gray);
        let reference_bin = self.normalize(&reference_gray);

        let diff = difference::abs_difference(&subject_bin, &reference_bin);
        let mask = difference::threshold_mask(&diff, self.opts.diff_threshold);
        debug!(differing = MaskStats::of(&mask).differing, "mask computed");

        Ok(mask)
    }

    /// Blur then binarize one grayscale image.
    fn normalize(&self, gray: &GrayImage) -> GrayImage {
        let blurred = preprocess::blur(gray, &self.kernel);
        preprocess::binarize(&blurred, self.opts.binary_threshold)
    }

    /// Compare a subject file against a reference file and save the mask.
    ///
    /// Returns a [`ProcessResult`] describing success or failure; errors are
    /// captured in the result rather than returned.
    #[must_use]
    pub fn process_file(&self, subject: &Path, reference: &Path, output: &Path) -> ProcessResult {
        match load(reference, ImageRole::Reference) {
            Ok(reference_img) => self.process_loaded(subject, &reference_img, output),
            Err(e) => {
                warn!(reference = %reference.display(), error = %e, "reference unusable");
                ProcessResult::failed(subject, output, e.to_string())
            }
        }
    }

    /// Compare every supported image in `subject_dir` against one reference.
    ///
    /// Each subject gets its own mask in `output_dir`, named by
    /// [`mask_file_name`]; subjects whose names sanitize to the same mask
    /// name get a numeric suffix so no two share an output. The reference
    /// itself is skipped, and so are earlier `*_diff.png` masks when
    /// `output_dir` is `subject_dir`. Uses parallel iteration when the `cli`
    /// feature is enabled (via rayon). Results are ordered by subject path.
    #[must_use]
    pub fn process_directory(
        &self,
        subject_dir: &Path,
        reference: &Path,
        output_dir: &Path,
    ) -> Vec<ProcessResult> {
        if !output_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(output_dir) {
                return vec![ProcessResult::failed(
                    subject_dir,
                    output_dir,
                    format!("Failed to create output directory: {e}"),
                )];
            }
        }

        let writes_into_input = same_file(subject_dir, output_dir);
        let mut subjects: Vec<PathBuf> = match std::fs::read_dir(subject_dir) {
            Ok(rd) => rd
                .filter_map(std::result::Result::ok)
                .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
                .map(|e| e.path())
                .filter(|p| is_supported_image(p))
                .filter(|p| !(writes_into_input && is_mask_file(p)))
                .filter(|p| !same_file(p, reference))
                .collect(),
            Err(e) => {
                return vec![ProcessResult::failed(
                    subject_dir,
                    output_dir,
                    format!("Failed to read directory: {e}"),
                )];
            }
        };
        subjects.sort();
        let outputs: Vec<PathBuf> = unique_mask_names(&subjects)
            .into_iter()
            .map(|name| output_dir.join(name))
            .collect();

        let reference_img = match load(reference, ImageRole::Reference) {
            Ok(img) => img,
            Err(e) => return vec![ProcessResult::failed(reference, output_dir, e.to_string())],
        };

        let run = |(subject, output): (&PathBuf, &PathBuf)| {
            self.process_loaded(subject, &reference_img, output)
        };

        #[cfg(feature = "cli")]
        {
            use rayon::prelude::*;
            subjects.par_iter().zip(outputs.par_iter()).map(run).collect()
        }

        #[cfg(not(feature = "cli"))]
        {
            subjects.iter().zip(outputs.iter()).map(run).collect()
        }
    }

    fn process_loaded(
        &self,
        subject: &Path,
        reference: &DynamicImage,
        output: &Path,
    ) -> ProcessResult {
        match self.run_file(subject, reference, output) {
            Ok(stats) => {
                info!(
                    subject = %subject.display(),
                    output = %output.display(),
                    differing = stats.differing,
                    total = stats.total,
                    "mask written"
                );
                ProcessResult {
                    path: subject.to_path_buf(),
                    output: output.to_path_buf(),
                    success: true,
                    stats,
                    message: format!("Mask written to {}", output.display()),
                }
            }
            Err(e) => {
                warn!(subject = %subject.display(), error = %e, "comparison failed");
                ProcessResult::failed(subject, output, e.to_string())
            }
        }
    }

    fn run_file(
        &self,
        subject: &Path,
        reference: &DynamicImage,
        output: &Path,
    ) -> Result<MaskStats> {
        let subject_img = load(subject, ImageRole::Subject)?;
        let mask = self.compare_images(&subject_img, reference)?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        save_mask(&mask, output)?;

        Ok(MaskStats::of(&mask))
    }
}

/// Compare two encoded images with default options.
///
/// This is the crate's single core operation: two image buffers in, one
/// PNG-encoded mask out.
///
/// # Errors
///
/// See [`DiffEngine::compare`].
pub fn compare(subject: &[u8], reference: &[u8]) -> Result<Vec<u8>> {
    DiffEngine::new(ProcessOptions::default())?.compare(subject, reference)
}

/// Decode an image and turn it upright according to its EXIF orientation.
fn decode(bytes: &[u8], role: ImageRole) -> Result<DynamicImage> {
    let to_err = |source: ImageError| Error::Decode { role, source };

    let mut decoder = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| to_err(ImageError::IoError(e)))?
        .into_decoder()
        .map_err(to_err)?;
    let orientation = decoder.orientation().map_err(to_err)?;

    let mut image = DynamicImage::from_decoder(decoder).map_err(to_err)?;
    image.apply_orientation(orientation);
    Ok(image)
}

fn load(path: &Path, role: ImageRole) -> Result<DynamicImage> {
    let bytes = std::fs::read(path)?;
    decode(&bytes, role)
}

fn ensure_not_empty(image: &DynamicImage, role: ImageRole) -> Result<()> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage {
            role,
            width,
            height,
        });
    }
    Ok(())
}

fn encode_as(mask: &GrayImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    mask.write_to(&mut Cursor::new(&mut buf), format)
        .map_err(Error::Encode)?;
    Ok(buf)
}

/// Encode a mask as PNG bytes.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the encoder fails.
pub fn encode_mask(mask: &GrayImage) -> Result<Vec<u8>> {
    encode_as(mask, ImageFormat::Png)
}

/// Save a mask, replacing any existing file at `path`.
///
/// Only lossless formats (PNG, BMP) are accepted so the saved mask keeps
/// exactly two sample values.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown or lossy extensions and
/// [`Error::Io`] if writing fails.
pub fn save_mask(mask: &GrayImage, path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    let bytes = match format {
        ImageFormat::Png | ImageFormat::Bmp => encode_as(mask, format)?,
        _ => return Err(Error::UnsupportedFormat(format!("{format:?}"))),
    };
    std::fs::write(path, bytes)?;

    Ok(())
}

/// Check if a file has an accepted upload extension (png, jpg, jpeg).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg"),
        None => false,
    }
}

/// Reduce an untrusted file name to a safe, portable one.
///
/// Drops any directory components, keeps ASCII alphanumerics plus `.`,
/// `_` and `-`, turns whitespace runs into a single `_`, and trims leading
/// and trailing dots and underscores. Returns `None` if nothing remains.
#[must_use]
pub fn secure_filename(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let mut out = String::with_capacity(base.len());
    let mut pending_sep = false;
    for ch in base.chars() {
        if ch.is_whitespace() {
            pending_sep = !out.is_empty();
        } else if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
            if pending_sep {
                out.push('_');
                pending_sep = false;
            }
            out.push(ch);
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

const MASK_SUFFIX: &str = "_diff.png";

/// Sanitized subject name with dots flattened, e.g. `scan_01_jpg`.
fn mask_stem(subject: &Path) -> String {
    let name = subject
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .and_then(|f| secure_filename(&f))
        .unwrap_or_else(|| "mask".to_string());
    name.replace('.', "_")
}

/// Name of the mask file produced for `subject`.
///
/// Example: `"scan 01.jpg"` becomes `"scan_01_jpg_diff.png"`. The source
/// extension is kept in the name so `a.png` and `a.jpg` do not collide.
#[must_use]
pub fn mask_file_name(subject: &Path) -> String {
    format!("{}{MASK_SUFFIX}", mask_stem(subject))
}

/// One mask name per subject, in order. Names that would repeat (compared
/// case-insensitively) get `_2`, `_3`, ... before the suffix.
fn unique_mask_names(subjects: &[PathBuf]) -> Vec<String> {
    let mut taken = HashSet::new();
    subjects
        .iter()
        .map(|subject| {
            let stem = mask_stem(subject);
            let mut name = format!("{stem}{MASK_SUFFIX}");
            let mut n = 2u32;
            while !taken.insert(name.to_lowercase()) {
                name = format!("{stem}_{n}{MASK_SUFFIX}");
                n += 1;
            }
            name
        })
        .collect()
}

fn is_mask_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|f| f.ends_with(MASK_SUFFIX))
}

/// Whether two paths name the same existing file or directory.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Generate a default mask path next to the subject.
///
/// Example: `"/tmp/scan.jpg"` becomes `"/tmp/scan_jpg_diff.png"`.
#[must_use]
pub fn default_output_path(subject: &Path) -> PathBuf {
    let parent = subject.parent().unwrap_or(Path::new("."));
    parent.join(mask_file_name(subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    fn engine() -> DiffEngine {
        DiffEngine::new(ProcessOptions::default()).unwrap()
    }

    fn solid(width: u32, height: u32, v: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([v, v, v])))
    }

    #[test]
    fn new_rejects_even_kernel() {
        let opts = ProcessOptions {
            blur_kernel: 4,
            ..ProcessOptions::default()
        };
        assert!(matches!(DiffEngine::new(opts), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn white_versus_black_flags_everything() {
        let mask = engine()
            .compare_images(&solid(10, 10, 255), &solid(10, 10, 0))
            .unwrap();
        assert_eq!(mask.dimensions(), (10, 10));
        assert!(mask.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn identical_images_produce_clean_mask() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(40, 30, |x, y| {
            Rgb([(x * 6) as u8, (y * 8) as u8, ((x + y) * 3) as u8])
        }));
        let mask = engine().compare_images(&img, &img).unwrap();
        assert!(MaskStats::of(&mask).is_clean());
    }

    #[test]
    fn mask_takes_subject_dimensions() {
        let mask = engine()
            .compare_images(&solid(64, 48, 200), &solid(13, 97, 200))
            .unwrap();
        assert_eq!(mask.dimensions(), (64, 48));
        assert!(MaskStats::of(&mask).is_clean());
    }

    #[test]
    fn empty_subject_is_rejected() {
        let err = engine()
            .compare_images(&DynamicImage::new_luma8(0, 5), &solid(5, 5, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyImage {
                role: ImageRole::Subject,
                width: 0,
                height: 5
            }
        ));
    }

    #[test]
    fn empty_reference_is_rejected() {
        let err = engine()
            .compare_images(&solid(5, 5, 0), &DynamicImage::new_luma8(5, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyImage {
                role: ImageRole::Reference,
                ..
            }
        ));
    }

    #[test]
    fn zero_byte_input_is_a_decode_error() {
        let png = encode_mask(&GrayImage::new(4, 4)).unwrap();
        assert!(matches!(
            engine().compare(&[], &png),
            Err(Error::Decode {
                role: ImageRole::Subject,
                ..
            })
        ));
        assert!(matches!(
            engine().compare(&png, &[]),
            Err(Error::Decode {
                role: ImageRole::Reference,
                ..
            })
        ));
    }

    #[test]
    fn raised_diff_threshold_still_yields_binary_mask() {
        let opts = ProcessOptions {
            diff_threshold: 254,
            ..ProcessOptions::default()
        };
        let engine = DiffEngine::new(opts).unwrap();
        let mask = engine
            .compare_images(&solid(6, 6, 255), &solid(6, 6, 0))
            .unwrap();
        assert!(mask.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn single_tap_kernel_disables_blur() {
        let opts = ProcessOptions {
            blur_kernel: 1,
            ..ProcessOptions::default()
        };
        let engine = DiffEngine::new(opts).unwrap();
        let subject = DynamicImage::ImageLuma8(GrayImage::from_fn(9, 9, |x, y| {
            Luma([if x == 4 && y == 4 { 255 } else { 0 }])
        }));
        let mask = engine.compare_images(&subject, &solid(9, 9, 0)).unwrap();
        assert_eq!(MaskStats::of(&mask).differing, 1);
        assert_eq!(mask.get_pixel(4, 4)[0], 255);
    }

    #[test]
    fn blur_suppresses_isolated_speck() {
        let subject = DynamicImage::ImageLuma8(GrayImage::from_fn(9, 9, |x, y| {
            Luma([if x == 4 && y == 4 { 255 } else { 0 }])
        }));
        let mask = engine().compare_images(&subject, &solid(9, 9, 0)).unwrap();
        assert!(MaskStats::of(&mask).is_clean());
    }

    #[test]
    fn near_threshold_field_does_not_flag_tampering() {
        let mut subject = GrayImage::from_pixel(9, 9, Luma([128]));
        subject.put_pixel(4, 4, Luma([127]));
        let reference = GrayImage::from_pixel(9, 9, Luma([128]));

        let mask = engine()
            .compare_images(
                &DynamicImage::ImageLuma8(subject),
                &DynamicImage::ImageLuma8(reference),
            )
            .unwrap();
        assert!(MaskStats::of(&mask).is_clean());
    }

    /// JPEG bytes carrying an EXIF APP1 segment with the given orientation tag.
    fn jpeg_with_orientation(image: &DynamicImage, orientation: u8) -> Vec<u8> {
        let jpeg = encode_as(&image.to_luma8(), ImageFormat::Jpeg).unwrap();
        let mut app1 = vec![0xFF, 0xE1, 0x00, 0x22];
        app1.extend_from_slice(b"Exif\0\0");
        app1.extend_from_slice(&[0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]);
        app1.extend_from_slice(&[0x00, 0x01]);
        app1.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        app1.extend_from_slice(&[0x00, orientation, 0x00, 0x00]);
        app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&app1);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn decode_applies_exif_orientation() {
        let bytes = jpeg_with_orientation(&solid(40, 20, 200), 6);
        let image = decode(&bytes, ImageRole::Subject).unwrap();
        assert_eq!((image.width(), image.height()), (20, 40));

        let upright = jpeg_with_orientation(&solid(40, 20, 200), 1);
        let image = decode(&upright, ImageRole::Subject).unwrap();
        assert_eq!((image.width(), image.height()), (40, 20));
    }

    #[test]
    fn unique_mask_names_disambiguate_collisions() {
        let subjects: Vec<PathBuf> = [
            "a b.png",
            "a.b.png",
            "a_b.png",
            "\u{fc}.png",
            "\u{e9}.png",
            "A_b.png",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        let names = unique_mask_names(&subjects);
        assert_eq!(
            names,
            vec![
                "a_b_png_diff.png",
                "a_b_png_2_diff.png",
                "a_b_png_3_diff.png",
                "png_diff.png",
                "png_2_diff.png",
                "A_b_png_4_diff.png",
            ]
        );
    }

    #[test]
    fn mask_files_are_recognized_by_suffix() {
        assert!(is_mask_file(Path::new("out/scan_png_diff.png")));
        assert!(!is_mask_file(Path::new("out/scan.png")));
    }

    #[test]
    fn save_mask_rejects_lossy_format() {
        let path = std::env::temp_dir().join("tamper_diff_engine_reject.jpg");
        let err = save_mask(&GrayImage::new(2, 2), &path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn is_supported_image_accepts_allow_list() {
        assert!(is_supported_image(Path::new("scan.png")));
        assert!(is_supported_image(Path::new("scan.JPG")));
        assert!(is_supported_image(Path::new("scan.jpeg")));
    }

    #[test]
    fn is_supported_image_rejects_everything_else() {
        assert!(!is_supported_image(Path::new("scan.webp")));
        assert!(!is_supported_image(Path::new("scan.bmp")));
        assert!(!is_supported_image(Path::new("scan.png.exe")));
        assert!(!is_supported_image(Path::new("scan")));
    }

    #[test]
    fn secure_filename_strips_paths_and_unsafe_chars() {
        assert_eq!(
            secure_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            secure_filename(r"C:\uploads\my scan  v2.png").as_deref(),
            Some("my_scan_v2.png")
        );
        assert_eq!(
            secure_filename(" .hidden$file.jpg").as_deref(),
            Some("hiddenfile.jpg")
        );
    }

    #[test]
    fn secure_filename_rejects_names_with_nothing_left() {
        assert_eq!(secure_filename(""), None);
        assert_eq!(secure_filename("..."), None);
        assert_eq!(secure_filename("dir/"), None);
        assert_eq!(secure_filename("ü€"), None);
    }

    #[test]
    fn default_output_path_appends_diff_suffix() {
        let p = default_output_path(Path::new("/tmp/scan.jpg"));
        assert_eq!(p, PathBuf::from("/tmp/scan_jpg_diff.png"));

        let p = default_output_path(Path::new("template one.png"));
        assert_eq!(
            p.file_name().unwrap().to_str().unwrap(),
            "template_one_png_diff.png"
        );
    }
}

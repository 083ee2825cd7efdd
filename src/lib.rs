//! Compare a document scan against a reference template and emit a binary
//! difference mask.
//!
//! Both images are converted to grayscale, the reference is resized to the
//! subject's dimensions, each is smoothed with a 5x5 Gaussian and binarized
//! at a fixed cutoff, and the two binary images are differenced. The mask is
//! white (255) wherever the two disagree and black (0) elsewhere.
//!
//! This is a crude aid for spotting tampering, not a forensic tool: there is
//! no geometric registration beyond resizing, so any difference in framing
//! or capture angle shows up in the mask too.
//!
//! # Quick Start
//!
//! ```no_run
//! let subject = std::fs::read("scan.jpg").unwrap();
//! let reference = std::fs::read("template.png").unwrap();
//!
//! let mask_png = tamper_diff::compare(&subject, &reference).expect("comparison failed");
//! std::fs::write("scan_diff.png", mask_png).unwrap();
//! ```
//!
//! # Reusing an engine
//!
//! ```no_run
//! use std::path::Path;
//! use tamper_diff::{DiffEngine, ProcessOptions};
//!
//! let engine = DiffEngine::new(ProcessOptions::default()).expect("invalid options");
//! let result = engine.process_file(
//!     Path::new("scan.jpg"),
//!     Path::new("template.png"),
//!     Path::new("out/scan_diff.png"),
//! );
//! println!("{:.1}% differs", result.stats.fraction() * 100.0);
//! ```

#![deny(missing_docs)]

pub mod difference;
mod engine;
pub mod error;
pub mod preprocess;

pub use difference::MaskStats;
pub use engine::{
    compare, default_output_path, encode_mask, is_supported_image, mask_file_name, save_mask,
    secure_filename, DiffEngine, ProcessOptions, ProcessResult, DEFAULT_BINARY_THRESHOLD,
    DEFAULT_BLUR_KERNEL, DEFAULT_DIFF_THRESHOLD,
};
pub use error::{Error, ImageRole, Result};

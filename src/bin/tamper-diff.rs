use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tamper_diff::{
    default_output_path, is_supported_image, DiffEngine, ProcessOptions, ProcessResult,
    DEFAULT_BINARY_THRESHOLD, DEFAULT_BLUR_KERNEL, DEFAULT_DIFF_THRESHOLD,
};

#[derive(Parser)]
#[command(
    name = "tamper-diff",
    about = "Compare a document scan against a reference template and write a binary difference mask",
    version,
    after_help = "Simple usage: tamper-diff <scan> <template>  (writes <scan>_<ext>_diff.png next to the scan)\n\n\
                  NOTE: The template is only resized to the scan's dimensions; no rotation or\n\
                  perspective correction is done, so framing differences show up in the mask."
)]
struct Cli {
    /// Subject image (png, jpg, jpeg) or a directory of subject images
    subject: String,

    /// Reference template image (png, jpg, jpeg)
    reference: String,

    /// Output mask file or directory (default: {name}_{ext}_diff.png)
    #[arg(short, long)]
    output: Option<String>,

    /// Luminance cutoff for binarizing each blurred image (0-255)
    #[arg(long, default_value_t = DEFAULT_BINARY_THRESHOLD)]
    binary_threshold: u8,

    /// Cutoff applied to the absolute difference (0-255)
    #[arg(long, default_value_t = DEFAULT_DIFF_THRESHOLD)]
    diff_threshold: u8,

    /// Gaussian blur kernel size (odd, 1 disables blurring)
    #[arg(long, default_value_t = DEFAULT_BLUR_KERNEL)]
    blur_kernel: u32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose && cli.quiet {
        eprintln!("Error: Cannot specify both --verbose and --quiet");
        process::exit(1);
    }

    init_tracing(cli.verbose, cli.quiet);

    let opts = ProcessOptions {
        binary_threshold: cli.binary_threshold,
        diff_threshold: cli.diff_threshold,
        blur_kernel: cli.blur_kernel,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let engine = match DiffEngine::new(opts) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let opts = engine.options();

    let subject_path = Path::new(&cli.subject);
    let reference_path = Path::new(&cli.reference);
    for path in [subject_path, reference_path] {
        if !path.exists() {
            eprintln!("Error: Input path does not exist: {}", path.display());
            process::exit(1);
        }
    }
    if !is_supported_image(reference_path) {
        eprintln!(
            "Error: Unsupported reference type (expected png, jpg or jpeg): {}",
            reference_path.display()
        );
        process::exit(1);
    }

    let results = if subject_path.is_dir() {
        let output_dir = if let Some(o) = &cli.output {
            PathBuf::from(o)
        } else {
            eprintln!("Error: Output directory is required for batch processing");
            eprintln!("Usage: tamper-diff <subject_dir> <reference> -o <output_dir>");
            process::exit(1);
        };
        engine.process_directory(subject_path, reference_path, &output_dir)
    } else {
        if !is_supported_image(subject_path) {
            eprintln!(
                "Error: Unsupported subject type (expected png, jpg or jpeg): {}",
                subject_path.display()
            );
            process::exit(1);
        }
        let output_path = match &cli.output {
            Some(o) => PathBuf::from(o),
            None => default_output_path(subject_path),
        };
        vec![engine.process_file(subject_path, reference_path, &output_path)]
    };

    let mut success_count = 0u32;
    let mut fail_count = 0u32;

    for r in &results {
        print_result(r, opts);
        if r.success {
            success_count += 1;
        } else {
            fail_count += 1;
        }
    }

    if results.is_empty() && !opts.quiet {
        eprintln!("No png, jpg or jpeg files found in {}", subject_path.display());
    }

    if results.len() > 1 && !opts.quiet {
        eprintln!();
        eprint!("[Summary] Compared: {success_count}");
        if fail_count > 0 {
            eprint!(", Failed: {fail_count}");
        }
        eprintln!(" (Total: {})", results.len());
    }

    if fail_count > 0 {
        process::exit(1);
    }
}

/// `RUST_LOG` takes precedence; otherwise the level follows the CLI flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn print_result(result: &ProcessResult, opts: &ProcessOptions) {
    if opts.quiet && result.success {
        return;
    }

    let filename = result.path.file_name().map_or_else(
        || result.path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    );

    if result.success {
        eprintln!(
            "[OK] {filename} ({:.1}% differs) -> {}",
            result.stats.fraction() * 100.0,
            result.output.display()
        );
    } else {
        eprintln!("[FAIL] {filename}: {}", result.message);
    }

    if opts.verbose && result.success {
        eprintln!(
            "  -> {} of {} pixels differ",
            result.stats.differing, result.stats.total
        );
    }
}

//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxipack_archive::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");

    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb
}

/// Run `job` on every file, ticking `pb` as each one finishes.
///
/// Results come back in input order. With the `parallel` feature the files
/// are spread over the rayon pool; each job still runs single-threaded.
pub fn for_each_file<T, F>(files: &[PathBuf], pb: &ProgressBar, job: F) -> Vec<Result<T>>
where
    T: Send,
    F: Fn(&Path) -> Result<T> + Sync + Send,
{
    let run = |path: &PathBuf| {
        pb.set_message(display_name(path));
        let result = job(path);
        pb.inc(1);
        result
    };

    #[cfg(feature = "parallel")]
    let results = files.par_iter().map(run).collect();

    #[cfg(not(feature = "parallel"))]
    let results = files.iter().map(run).collect();

    pb.finish_and_clear();
    results
}

/// File name for messages, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `original / compressed` rounded to two decimals; `None` (infinite) when
/// the compressed size is zero.
pub fn compression_ratio(original: u64, compressed: u64) -> Option<f64> {
    if compressed == 0 {
        return None;
    }
    let ratio = original as f64 / compressed as f64;
    Some((ratio * 100.0).round() / 100.0)
}

/// Render a ratio from [`compression_ratio`].
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}", r),
        None => "inf".to_string(),
    }
}

/// Milliseconds with microsecond resolution.
pub fn millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1_000_000.0).round() / 1000.0
}

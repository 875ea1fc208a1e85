//! Decompress command implementation.

use crate::utils::{create_progress_bar, display_name, for_each_file, millis};
use oxipack_archive::{Algorithm, decompress_file, original_candidate};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::warn;

struct Restored {
    output: PathBuf,
    size: u64,
    elapsed_ms: f64,
    /// Whether the output equals the original guessed next to the artifact.
    lossless: Option<bool>,
}

pub fn cmd_decompress(
    files: &[PathBuf],
    algorithm: Algorithm,
    output: Option<&Path>,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Decompressing {} file(s) with {}", files.len(), algorithm);

    let pb = create_progress_bar(files.len() as u64, progress && files.len() > 1);
    let results = for_each_file(files, &pb, |path| {
        let start = Instant::now();
        let written = decompress_file(path, algorithm, output)?;
        let elapsed_ms = millis(start.elapsed());
        let restored = fs::read(&written)?;

        let lossless = match original_candidate(path, algorithm) {
            Ok(Some(original)) if original != written => Some(fs::read(&original)? == restored),
            Ok(_) => None,
            Err(e) => {
                warn!(artifact = %path.display(), error = %e, "could not look for the original");
                None
            }
        };

        Ok(Restored {
            output: written,
            size: restored.len() as u64,
            elapsed_ms,
            lossless,
        })
    });

    let mut failed = 0usize;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(r) => {
                let check = match r.lossless {
                    Some(true) => ", lossless: yes",
                    Some(false) => ", lossless: NO",
                    None => "",
                };
                // The original is only guessed, so a mismatch is reported
                // but does not fail the run
                if r.lossless == Some(false) {
                    warn!(
                        artifact = %path.display(),
                        output = %r.output.display(),
                        "output differs from the guessed original"
                    );
                }
                println!(
                    "  {} -> {} ({} bytes, {:.3} ms{})",
                    display_name(path),
                    r.output.display(),
                    r.size,
                    r.elapsed_ms,
                    check
                );
            }
            Err(e) => {
                failed += 1;
                println!("  FAILED: {} - {}", path.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} file(s) failed", failed, files.len()).into());
    }
    Ok(())
}

//! Info command implementation.

use oxipack_archive::{Algorithm, describe};
use std::fs;
use std::path::Path;

pub fn cmd_info(artifact: &Path, algorithm: Algorithm) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(artifact)?;
    let info = describe(&bytes, algorithm)?;

    println!("Artifact Information");
    println!("====================");
    println!("File:         {}", artifact.display());
    println!("Size:         {} bytes", bytes.len());
    println!("{}", info);

    Ok(())
}

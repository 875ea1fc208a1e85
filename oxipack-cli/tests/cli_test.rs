use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn oxipack() -> Command {
    Command::new(env!("CARGO_BIN_EXE_oxipack"))
}

#[test]
fn test_compress_then_decompress() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("song.txt");
    fs::write(&input, "la la la, la la la, la la la la\n".repeat(30)).unwrap();

    let status = oxipack()
        .args(["compress", "-a", "lzw", "--no-progress"])
        .arg(&input)
        .status()
        .unwrap();
    assert!(status.success());

    let artifact = dir.path().join("song_lzw_compressed.bin");
    assert!(artifact.exists());

    let output = oxipack()
        .args(["decompress", "-a", "lzw"])
        .arg(&artifact)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("lossless: yes"));

    let restored = fs::read(dir.path().join("song_lzw_decompressed")).unwrap();
    assert_eq!(restored, fs::read(&input).unwrap());
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.bin");
    fs::write(&input, [7u8; 500]).unwrap();

    let output = oxipack()
        .args(["test", "-a", "deflate", "--json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["original_size"], 500);
    assert_eq!(reports[0]["lossless"], true);
    assert!(reports[0]["ratio"].as_f64().unwrap() > 1.0);
}

#[test]
fn test_corrupt_artifact_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("bad.huff");
    fs::write(&artifact, b"not an artifact").unwrap();

    let output = oxipack()
        .args(["decompress", "-a", "huffman"])
        .arg(&artifact)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_info() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.html");
    fs::write(&input, "<p>hello</p><p>hello</p><p>hello</p>").unwrap();

    assert!(
        oxipack()
            .args(["compress", "-a", "huffman"])
            .arg(&input)
            .status()
            .unwrap()
            .success()
    );

    let output = oxipack()
        .args(["info", "-a", "huffman"])
        .arg(dir.path().join("page.huff"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File name:    page.html"));
}

#[test]
fn test_sibling_with_same_stem_does_not_fail_decompress() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "meeting notes, meeting notes, more notes\n".repeat(20)).unwrap();
    fs::write(dir.path().join("notes.md"), "# something else entirely\n").unwrap();

    assert!(
        oxipack()
            .args(["compress", "-a", "lzw", "--no-progress"])
            .arg(&input)
            .status()
            .unwrap()
            .success()
    );

    let artifact = dir.path().join("notes_lzw_compressed.bin");
    let output = oxipack()
        .args(["decompress", "-a", "lzw"])
        .arg(&artifact)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("lossless: NO"));

    let restored = fs::read(dir.path().join("notes_lzw_decompressed")).unwrap();
    assert_eq!(restored, fs::read(&input).unwrap());
}

#[test]
fn test_mismatched_guess_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("draft.txt");
    fs::write(&input, "first draft, first draft, first draft\n".repeat(10)).unwrap();

    assert!(
        oxipack()
            .args(["compress", "-a", "deflate", "--no-progress"])
            .arg(&input)
            .status()
            .unwrap()
            .success()
    );

    // The only file left with the stem is not the input
    fs::remove_file(&input).unwrap();
    fs::write(dir.path().join("draft.md"), "rewritten").unwrap();

    let output = oxipack()
        .args(["decompress", "-a", "deflate"])
        .arg(dir.path().join("draft_deflate_compressed.bin"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("lossless: NO"));
}

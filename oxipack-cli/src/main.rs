//! OxiPack CLI - lossless codec workbench
//!
//! Compress, decompress, round-trip and inspect files with Huffman, LZ77,
//! LZW or the deflate-style composite.

mod commands;
mod utils;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use commands::{cmd_completions, cmd_compress, cmd_decompress, cmd_info, cmd_test};
use oxipack_archive::{Algorithm, Lz77Config, Lz77Matcher, Options};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxipack")]
#[command(author, version, about = "Lossless compression workbench - Huffman, LZ77, LZW, Deflate")]
#[command(long_about = "
OxiPack compresses files with one of four lossless algorithms and restores
them from the resulting artifacts. LZ77, LZW and Deflate artifacts do not
record the algorithm that produced them, so pass the same -a on both sides.

Examples:
  oxipack compress notes.txt -a huffman
  oxipack compress *.log -a deflate --window 65535 --lookahead 255 -o out/
  oxipack decompress notes.huff -a huffman
  oxipack decompress notes_lzw_compressed.bin -a lzw
  oxipack test notes.txt -a lz77 --matcher triple --json
  oxipack info notes_deflate_compressed.bin -a deflate
  oxipack completions bash
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress files into artifacts
    #[command(alias = "c")]
    Compress {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Algorithm (huffman, lz77, lzw, deflate)
        #[arg(short, long)]
        algorithm: Algorithm,

        #[command(flatten)]
        lz77: Lz77Args,

        /// Output directory (defaults to each input's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Restore files from artifacts
    #[command(alias = "d")]
    Decompress {
        /// Artifacts to decompress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Algorithm the artifacts were produced with
        #[arg(short, long)]
        algorithm: Algorithm,

        /// Output directory (defaults to each artifact's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Round-trip files in memory and report ratio, timings and losslessness
    #[command(alias = "t")]
    Test {
        /// Files to test
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Algorithm (huffman, lz77, lzw, deflate)
        #[arg(short, long)]
        algorithm: Algorithm,

        #[command(flatten)]
        lz77: Lz77Args,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Describe the framing of an artifact
    #[command(alias = "i")]
    Info {
        /// Artifact to inspect
        artifact: PathBuf,

        /// Algorithm the artifact was produced with
        #[arg(short, long)]
        algorithm: Algorithm,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// LZ77 parameters, used by `lz77` and `deflate`.
#[derive(Args, Debug, Clone)]
struct Lz77Args {
    /// Match window in bytes
    #[arg(long, default_value_t = Lz77Config::DEFAULT.window_size)]
    window: u32,

    /// Longest match in bytes
    #[arg(long, default_value_t = Lz77Config::DEFAULT.lookahead)]
    lookahead: u32,

    /// Candidates examined per position
    #[arg(long, default_value_t = Lz77Config::DEFAULT.max_chain)]
    max_chain: usize,

    /// Matching strategy (hashed, triple)
    #[arg(long, default_value_t = Lz77Matcher::Hashed)]
    matcher: Lz77Matcher,
}

impl Lz77Args {
    fn options(&self) -> Options {
        Options::new()
            .with_lz77(Lz77Config::new(self.window, self.lookahead).with_max_chain(self.max_chain))
            .with_matcher(self.matcher)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            files,
            algorithm,
            lz77,
            output,
            no_progress,
        } => cmd_compress(
            &files,
            algorithm,
            &lz77.options(),
            output.as_deref(),
            !no_progress,
        ),
        Commands::Decompress {
            files,
            algorithm,
            output,
            no_progress,
        } => cmd_decompress(&files, algorithm, output.as_deref(), !no_progress),
        Commands::Test {
            files,
            algorithm,
            lz77,
            json,
        } => cmd_test(&files, algorithm, &lz77.options(), json),
        Commands::Info {
            artifact,
            algorithm,
        } => cmd_info(&artifact, algorithm),
        Commands::Completions { shell } => cmd_completions(shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compress() {
        let cli = Cli::try_parse_from([
            "oxipack",
            "-vv",
            "compress",
            "a.txt",
            "b.txt",
            "-a",
            "deflate",
            "--window",
            "65535",
            "--matcher",
            "triple",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        match cli.command {
            Commands::Compress {
                files,
                algorithm,
                lz77,
                output,
                ..
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(algorithm, Algorithm::Deflate);
                assert_eq!(output, None);

                let options = lz77.options();
                assert_eq!(options.lz77.window_size, 65535);
                assert_eq!(options.lz77.lookahead, 15);
                assert_eq!(options.matcher, Lz77Matcher::Triple);
            }
            _ => panic!("expected compress"),
        }
    }

    #[test]
    fn test_algorithm_is_required() {
        assert!(Cli::try_parse_from(["oxipack", "compress", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(["oxipack", "compress", "a.txt", "-a", "zstd"]).is_err());
    }

    #[test]
    fn test_parse_info_alias() {
        let cli = Cli::try_parse_from(["oxipack", "i", "x.huff", "-a", "huffman"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Info {
                algorithm: Algorithm::Huffman,
                ..
            }
        ));
    }
}

//! Command-line interface for `hill-engine`.

#![forbid(unsafe_code)]

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hill_engine::{
    clean, example_rows, pad, parse_rows, render_trace, validate_matrix, CipherEngine, Direction,
    EngineConfig, KeyGenerator, Outcome,
};
use log::LevelFilter;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Hill cipher CLI.
#[derive(Parser)]
#[command(
    name = "hill",
    version,
    author,
    about = "Hill cipher over A-Z with a step-by-step arithmetic trace"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CipherArgs {
    /// Key matrix, rows separated by ';' and entries by spaces or commas (e.g. "3 2; 5 7").
    #[arg(long, value_name = "MATRIX")]
    key: String,
    /// Input text; read from stdin when omitted.
    #[arg(long)]
    text: Option<String>,
    /// Print the numbered step trace before the result.
    #[arg(long, default_value_t = false)]
    steps: bool,
    /// Print the full outcome as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a key matrix.
    Encrypt {
        #[command(flatten)]
        args: CipherArgs,
        /// Letter used to complete the last block.
        #[arg(long, default_value_t = 'X')]
        pad: char,
    },
    /// Decrypt text with the inverse of a key matrix.
    Decrypt {
        #[command(flatten)]
        args: CipherArgs,
    },
    /// Check whether a key matrix is usable.
    Validate {
        /// Key matrix, e.g. "3 2; 5 7".
        #[arg(long, value_name = "MATRIX")]
        key: String,
        /// Print the validation result as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the sample key of the given size.
    Example {
        /// Key size (2 or 3).
        #[arg(long, default_value_t = 2)]
        size: usize,
    },
    /// Generate a random invertible key.
    Keygen {
        /// Key size (2 or 3).
        #[arg(long, default_value_t = 2)]
        size: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt text, decrypt the ciphertext, and compare.
    Roundtrip {
        /// Key matrix, e.g. "3 2; 5 7".
        #[arg(long, value_name = "MATRIX")]
        key: String,
        /// Input text; read from stdin when omitted.
        #[arg(long)]
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Encrypt { args, pad } => {
            let engine = CipherEngine::with_config(EngineConfig { pad_letter: pad })
                .context("invalid --pad")?;
            cmd_cipher(&engine, Direction::Encrypt, &args)
        }
        Commands::Decrypt { args } => cmd_cipher(&CipherEngine::new(), Direction::Decrypt, &args),
        Commands::Validate { key, json } => cmd_validate(&key, json),
        Commands::Example { size } => cmd_example(size),
        Commands::Keygen { size, seed } => cmd_keygen(size, seed),
        Commands::Roundtrip { key, text } => cmd_roundtrip(&key, text),
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .init();
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn cmd_cipher(engine: &CipherEngine, direction: Direction, args: &CipherArgs) -> Result<()> {
    let rows = parse_rows(&args.key).context("parse --key")?;
    let text = read_text(args.text.clone())?;
    let outcome = engine.process(direction, &text, &rows);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if args.steps {
        println!("{}\n", render_trace(&outcome.steps));
    }
    ensure_success(&outcome)?;
    if !args.json {
        println!("{}", outcome.result);
    }
    Ok(())
}

fn cmd_validate(key: &str, json: bool) -> Result<()> {
    let rows = parse_rows(key).context("parse --key")?;
    let result = validate_matrix(&rows);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.valid {
        println!("valid: {}", result.message);
    }
    if !result.valid {
        bail!("invalid: {}", result.message);
    }
    Ok(())
}

fn cmd_example(size: usize) -> Result<()> {
    let Some(rows) = example_rows(size) else {
        bail!("no example key of size {size}; choose 2 or 3");
    };
    println!("{}", format_rows(&rows));
    Ok(())
}

fn cmd_keygen(size: usize, seed: Option<u64>) -> Result<()> {
    let mut gen = KeyGenerator::new(seeded_rng(seed));
    let key = gen.random_invertible(size).context("generate key")?;
    println!("{}", format_rows(&key.rows()));
    Ok(())
}

fn cmd_roundtrip(key: &str, text: Option<String>) -> Result<()> {
    let rows = parse_rows(key).context("parse --key")?;
    let text = read_text(text)?;
    let engine = CipherEngine::new();

    let cipher = engine.encrypt(&text, &rows);
    ensure_success(&cipher)?;
    let plain = engine.decrypt(&cipher.result, &rows);
    ensure_success(&plain)?;

    // decrypt yields the padded plaintext
    let expected = pad(&clean(&text), rows.len(), engine.config().pad_letter);
    println!("ciphertext: {}", cipher.result);
    println!("decrypted: {}", plain.result);
    if plain.result != expected {
        bail!("roundtrip failed");
    }
    Ok(())
}

fn ensure_success(outcome: &Outcome) -> Result<()> {
    if let Some(step) = outcome.failure() {
        match &step.result {
            Some(detail) => bail!("{}: {}", step.description, detail),
            None => bail!("{}", step.description),
        }
    }
    Ok(())
}

fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read text from stdin")?;
            Ok(buf)
        }
    }
}

fn format_rows(rows: &[Vec<i64>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_rows_parse_back() {
        let rows = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        let text = format_rows(&rows);
        assert_eq!(text, "6 24 1; 13 16 10; 20 17 15");
        assert_eq!(parse_rows(&text).expect("parse"), rows);
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn seeded_keys_are_reproducible() {
        let a = KeyGenerator::new(seeded_rng(Some(42))).random_invertible(3);
        let b = KeyGenerator::new(seeded_rng(Some(42))).random_invertible(3);
        assert_eq!(a, b);
    }

    #[test]
    fn cli_parses_encrypt_flags() {
        let cli = Cli::try_parse_from([
            "hill",
            "-vv",
            "encrypt",
            "--key",
            "3 2; 5 7",
            "--text",
            "HELLO",
            "--pad",
            "Q",
            "--steps",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Encrypt { args, pad } => {
                assert_eq!(pad, 'Q');
                assert!(args.steps);
                assert_eq!(args.text.as_deref(), Some("HELLO"));
            }
            _ => panic!("expected encrypt"),
        }
    }

    #[test]
    fn failures_surface_step_detail() {
        let outcome = CipherEngine::new().encrypt("HELLO", &[vec![2, 0], vec![0, 1]]);
        let err = ensure_success(&outcome).unwrap_err();
        assert_eq!(
            err.to_string(),
            concat!(
                "Matrix validation failed: ",
                "Determinant (2) is not coprime with 26. The matrix is not invertible."
            )
        );
    }
}

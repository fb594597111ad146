//! Command-line interface for AES-128 ECB encryption.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aes128_core::{expand_key, Aes128Key, ROUNDS};
use aes128_ecb::Aes128Ecb;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 ECB CLI.
#[derive(Parser)]
#[command(
    name = "aes128",
    version,
    author,
    about = "AES-128 ECB file encryption (zero-padded, block-independent)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file; output is zero-padded to a 16-byte multiple.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input plaintext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file; input that is not a 16-byte multiple is zero-padded
    /// first, exactly as on encryption.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input ciphertext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Print the 11 round keys derived from a key.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Round-trip random messages through encrypt/decrypt and fail on mismatch.
    Check {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Number of random messages to test.
        #[arg(long, default_value_t = 4)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and message, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &input, &output),
        Commands::Dec {
            key_hex,
            input,
            output,
        } => cmd_dec(&key_hex, &input, &output),
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Check {
            key_hex,
            samples,
            seed,
        } => cmd_check(&key_hex, samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let cipher = Aes128Ecb::new(key.as_bytes())?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let ciphertext = cipher.encrypt(&data)?;
    fs::write(output_path, ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let cipher = Aes128Ecb::new(key.as_bytes())?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plaintext = cipher.decrypt(&data)?;
    fs::write(output_path, plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let expanded = expand_key(key.as_bytes())?;
    for round in 0..=ROUNDS {
        println!("round {:2}: {}", round, hex::encode(expanded.round_key(round)));
    }
    Ok(())
}

fn cmd_check(key_hex: &str, samples: usize, seed: Option<u64>) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let cipher = Aes128Ecb::new(key.as_bytes())?;
    let mut rng = seeded_rng(seed);

    for _ in 0..samples {
        let len = rng.gen_range(1..=96);
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);

        let ciphertext = cipher.encrypt(&message)?;
        let decrypted = cipher.decrypt(&ciphertext)?;
        if &decrypted[..message.len()] != message.as_slice()
            || decrypted[message.len()..].iter().any(|&b| b != 0)
        {
            bail!("round trip mismatch for a {}-byte message", len);
        }
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Aes128Ecb::new(&key_bytes)?;

    // 24 bytes, so the demo also shows the zero padding of the final block.
    let mut message = [0u8; 24];
    rng.fill_bytes(&mut message);

    let ciphertext = cipher.encrypt(&message)?;
    let decrypted = cipher.decrypt(&ciphertext)?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if &decrypted[..message.len()] != message.as_slice() {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != 16 {
        bail!("AES-128 key must be 16 bytes (32 hex characters)");
    }
    let mut key = [0u8; 16];
    key.copy_from_slice(&bytes);
    Ok(Aes128Key::from(key))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

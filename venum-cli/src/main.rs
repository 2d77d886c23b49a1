//! Demo CLI for `venum-core`.
//!
//! Builds [`EncryptionParameters`] from command-line flags, generates a
//! key pair, encrypts one or two integer messages, optionally adds them
//! homomorphically, and decrypts the result. This binary is a thin
//! consumer of the core's public operations; it contributes no
//! cryptographic substance of its own.

use std::process::ExitCode;

use clap::Parser;
use num_bigint::BigUint;

use venum_core::encoding::PolynomialEncoder;
use venum_core::encryption::Encryptor;
use venum_core::evaluation::Evaluator;
use venum_core::keys::gen_key_pair;
use venum_core::{EncryptionParameters, GlweDistribution};

/// Encrypt one or two integer messages under a fresh GLWE key pair, add
/// them homomorphically if two were given, and print the decrypted result.
#[derive(Parser, Debug)]
#[command(name = "venum", version, about)]
struct Cli {
    /// Polynomial dimension N (conventionally a power of two).
    #[arg(long, default_value_t = 4)]
    dimension: usize,

    /// Ciphertext modulus q.
    #[arg(long, default_value = "383")]
    ciphertext_modulus: BigUint,

    /// Plaintext modulus p0.
    #[arg(long, default_value = "127")]
    plaintext_modulus: BigUint,

    /// Noise modulus p1.
    #[arg(long, default_value = "3")]
    noise_modulus: BigUint,

    /// Seed for deterministic sampling. Omit for the process-default RNG.
    #[arg(long)]
    seed: Option<u64>,

    /// The message to encrypt, as space-separated non-negative integers
    /// below the plaintext modulus.
    #[arg(long, value_delimiter = ' ', required = true)]
    message: Vec<BigUint>,

    /// A second message to encrypt and homomorphically add to the first.
    #[arg(long, value_delimiter = ' ')]
    add: Option<Vec<BigUint>>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "demo run failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), venum_core::VenumError> {
    let params = EncryptionParameters::new(
        cli.dimension,
        cli.ciphertext_modulus,
        cli.plaintext_modulus,
        cli.noise_modulus,
        cli.seed,
    )?;
    let dist = GlweDistribution::new(params)?;

    let (sk, pk) = gen_key_pair(&dist, None);
    let encryptor = Encryptor::new(&dist, PolynomialEncoder::new(&dist));
    let evaluator = Evaluator::new(&dist, None);

    let first = encryptor.encrypt(&pk, &cli.message)?;
    println!("encrypted message: {:?}", cli.message);

    let result = match cli.add {
        Some(second_message) => {
            let second = encryptor.encrypt(&pk, &second_message)?;
            println!("encrypted second message: {:?}", second_message);
            evaluator.add(&first, &second)
        }
        None => first,
    };

    let decrypted = encryptor.decrypt(&sk, &result);
    println!("decrypted result: {decrypted:?}");

    Ok(())
}

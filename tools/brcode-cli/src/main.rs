//! BR Code Command Line Tool
//!
//! Provides commands for working with Pix BR Code payloads:
//! - build: Build the payload for a payment request JSON file
//! - validate: Validate a payment request JSON file
//! - classify: Classify a Pix key and show its canonical form
//! - checksum: Compute the CRC-16 checksum of a string
//! - decode: Decode a payload into its fields

use anyhow::{Context, Result};
use brcode_core::{classify_key, format_key, is_valid_key, validate_request, PaymentRequest};
use brcode_emv::{build_payload, checksum, parse, verify_payload, TlvField};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brcode")]
#[command(version)]
#[command(about = "BR Code Command Line Tool - Build, inspect, and verify Pix payloads")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a BR Code payload
    #[command(about = "Build the BR Code payload for a payment request JSON file")]
    Build {
        /// Path to the payment request JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Validate a payment request
    #[command(about = "Validate a payment request JSON file")]
    Validate {
        /// Path to the payment request JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Classify a Pix key
    #[command(about = "Classify a Pix key and show its canonical form")]
    Classify {
        /// The key to classify (CPF, CNPJ, phone, e-mail, or random key)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Compute a CRC-16 checksum
    #[command(about = "Compute the CRC-16/CCITT-FALSE checksum of a string")]
    Checksum {
        /// The text to checksum
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Decode a payload
    #[command(about = "Decode a payload into its fields and verify its checksum")]
    Decode {
        /// The payload string to decode
        #[arg(value_name = "PAYLOAD")]
        payload: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { file } => handle_build(&file),
        Commands::Validate { file } => handle_validate(&file),
        Commands::Classify { key } => handle_classify(&key),
        Commands::Checksum { text } => handle_checksum(&text),
        Commands::Decode { payload } => handle_decode(&payload),
    }
}

fn read_request(file: &PathBuf) -> Result<PaymentRequest> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as payment request", file.display()))
}

fn handle_build(file: &PathBuf) -> Result<()> {
    let request = read_request(file)?;
    validate_request(&request).with_context(|| "Request validation failed")?;

    println!("{}", build_payload(&request));

    Ok(())
}

fn handle_validate(file: &PathBuf) -> Result<()> {
    let request = read_request(file)?;
    validate_request(&request).with_context(|| "Request validation failed")?;

    println!("Valid payment request");

    Ok(())
}

fn handle_classify(key: &str) -> Result<()> {
    let key_type = classify_key(key);

    println!("Type: {}", key_type.label());
    println!("Canonical: {}", format_key(key, key_type));
    println!("Valid: {}", is_valid_key(key));

    Ok(())
}

fn handle_checksum(text: &str) -> Result<()> {
    println!("{}", checksum(text));

    Ok(())
}

fn handle_decode(payload: &str) -> Result<()> {
    let fields = parse(payload).with_context(|| "Failed to decode payload")?;
    print_fields(&fields, 0);

    if verify_payload(payload) {
        println!("Checksum: OK");
    } else {
        println!("Checksum: MISMATCH");
    }

    Ok(())
}

fn print_fields(fields: &[TlvField], depth: usize) {
    let indent = "  ".repeat(depth);

    for field in fields {
        // Tags 26 and 62 are containers at the top level
        let nested = if depth == 0 && (field.tag == "26" || field.tag == "62") {
            parse(&field.value).ok()
        } else {
            None
        };

        match nested {
            Some(sub) => {
                println!("{indent}{}:", field.tag);
                print_fields(&sub, depth + 1);
            }
            None => println!("{indent}{}: {}", field.tag, field.value),
        }
    }
}

//! Command-line arguments.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

/// Sign S3 and Mechanical Turk requests.
#[derive(Debug, Parser)]
#[command(name = "awsign", version, about)]
pub struct Cli {
    /// What to sign.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign an S3 request and print the resulting headers and parameters.
    S3 {
        /// HTTP method.
        method: String,
        /// Canonical resource path, including the bucket.
        path: String,
        /// Request header as `Name: value`. May be repeated.
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
        /// Query parameter as `name=value` or bare `name`. May be repeated.
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
        /// Do not add a `Date` header when none is given.
        #[arg(long)]
        no_date: bool,
    },
    /// Print a presigned URL.
    Presign {
        /// Canonical resource path, including the bucket.
        path: String,
        /// HTTP method the URL is valid for.
        #[arg(long, default_value = "GET")]
        method: String,
        /// Seconds until the URL expires.
        #[arg(long, default_value_t = 3600)]
        expires_in: u64,
    },
    /// Sign a Mechanical Turk request and print its signature.
    Mturk {
        /// Service name, e.g. `AWSMechanicalTurkRequester`.
        service: String,
        /// Operation name, e.g. `CreateHIT`.
        operation: String,
        /// Timestamp to sign; defaults to now.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

/// Split `Name: value` into its parts, trimming space around the value.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let Some((name, value)) = raw.split_once(':') else {
        bail!("header must be `Name: value`, got `{raw}`");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("header name is empty in `{raw}`");
    }
    Ok((name.to_owned(), value.trim().to_owned()))
}

/// Split `name=value` into its parts; a bare `name` has an empty value.
pub fn parse_param(raw: &str) -> (String, String) {
    let (name, value) = raw.split_once('=').unwrap_or((raw, ""));
    (name.to_owned(), value.to_owned())
}

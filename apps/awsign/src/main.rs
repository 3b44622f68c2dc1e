//! awsign - sign S3 and Mechanical Turk requests from the command line.
//!
//! # Usage
//!
//! ```text
//! awsign s3 GET /bucket/key -H "Date: Tue, 27 Mar 2007 19:36:42 +0000" -p acl
//! awsign presign /bucket/key --expires-in 3600
//! awsign mturk AWSMechanicalTurkRequester CreateHIT
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_ACCESS_KEY_ID` | *(unset = anonymous)* | Access key |
//! | `AWS_SECRET_ACCESS_KEY` | *(unset = anonymous)* | Secret key |
//! | `AWS_SESSION_TOKEN` | *(unset)* | Session token |
//! | `AWSIGN_ENDPOINT` | `https://s3.amazonaws.com` | Base URL for presigned URLs |
//! | `AWSIGN_DEBUG_SIGNING` | `false` | Log the string to sign and signature |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod args;

use std::collections::HashMap;

use anyhow::{Context, Result};
use awsign_core::{Credential, Multimap, MultimapExt, SignerConfig, http_date};
use chrono::{TimeDelta, Utc};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command, parse_header, parse_param};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise the filter derived from the config.
/// Logs go to stderr so stdout only carries signing output.
fn init_tracing(config: &SignerConfig) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let directive = config.log_filter();
        EnvFilter::try_new(&directive)
            .with_context(|| format!("invalid log level filter: {directive}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SignerConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config)?;

    let credential = Credential::from_env_or_anonymous();
    if credential.is_anonymous() {
        warn!("No AWS credentials in the environment, requests stay unsigned");
    } else {
        info!(access_key = %credential.access_key, "Loaded credentials");
    }

    match cli.command {
        Command::S3 {
            method,
            path,
            headers,
            params,
            no_date,
        } => {
            let mut header_map = Multimap::new();
            for raw in &headers {
                let (name, value) = parse_header(raw)?;
                header_map.add(name, value);
            }
            if !no_date && !header_map.keys().any(|k| k.eq_ignore_ascii_case("date")) {
                header_map.insert_single("Date", http_date(Utc::now()));
            }

            let mut param_map = Multimap::new();
            for raw in &params {
                let (name, value) = parse_param(raw);
                param_map.add(name, value);
            }

            awsign_s3::sign(&credential, &method, &path, &mut param_map, &mut header_map);

            print_sorted("header", &header_map, ": ");
            print_sorted("param", &param_map, "=");
        }
        Command::Presign {
            path,
            method,
            expires_in,
        } => {
            let expires_in = i64::try_from(expires_in)
                .ok()
                .and_then(TimeDelta::try_seconds)
                .context("expiry too large")?;
            let expires = Utc::now() + expires_in;
            let url = awsign_s3::presign_url(
                &credential,
                &method,
                &config.endpoint,
                &path,
                expires,
                &Multimap::new(),
            );
            println!("{url}");
        }
        Command::Mturk {
            service,
            operation,
            timestamp,
        } => {
            let timestamp = timestamp.unwrap_or_else(|| awsign_mturk::timestamp(Utc::now()));
            let mut fields = HashMap::new();
            awsign_mturk::sign(&credential, &service, &operation, &timestamp, &mut fields);

            println!("Timestamp={timestamp}");
            if let Some(signature) = fields.get(awsign_mturk::SIGNATURE_FIELD) {
                println!("Signature={signature}");
            }
        }
    }

    Ok(())
}

/// Print every (name, value) pair, sorted by name, values in order.
fn print_sorted(kind: &str, map: &Multimap, separator: &str) {
    let mut names: Vec<&String> = map.keys().collect();
    names.sort_unstable();
    for name in names {
        for value in &map[name] {
            println!("{kind} {name}{separator}{value}");
        }
    }
}

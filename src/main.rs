// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use mountwood::config::consts::DEFAULT_MANIFEST_PATH;
use mountwood::config::{load_and_validate_manifest, BootstrapBuilder};
use mountwood::engine::BootstrapMounter;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: u8 = 0;
const EXIT_CONFIG_ERROR: u8 = 1;
const EXIT_PARTIAL_MOUNT: u8 = 2;

/// Logs go to stderr so stdout carries only the rendered page.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [manifest.yaml|manifest.json|manifest.toml]", program);
    eprintln!("Default manifest: {}", DEFAULT_MANIFEST_PATH);
    eprintln!("Example: {} configs/missing-anchor.yaml", program);
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("mountwood");

    match args.get(1).map(String::as_str) {
        Some("-h") | Some("--help") => {
            print_usage(program);
            return ExitCode::SUCCESS;
        }
        _ if args.len() > 2 => {
            print_usage(program);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
        _ => {}
    }

    init_tracing();

    let manifest_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_MANIFEST_PATH);

    let outcome = run(manifest_path);
    if let Err(e) = &outcome {
        tracing::error!("{:#}", e);
    }
    ExitCode::from(exit_code_for(&outcome))
}

/// 0 when every binding mounted, 2 on a partial mount, 1 when the manifest
/// could not be turned into bindings.
fn exit_code_for(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_PARTIAL_MOUNT,
        Err(_) => EXIT_CONFIG_ERROR,
    }
}

/// Load the manifest, mount every binding and print the page.
///
/// Returns whether every binding mounted. Partial mounts still print the page.
fn run(manifest_path: &str) -> anyhow::Result<bool> {
    let manifest = load_and_validate_manifest(manifest_path)
        .with_context(|| format!("failed to load manifest '{}'", manifest_path))?;

    let (bindings, mut document) = BootstrapBuilder::from_manifest(&manifest)
        .with_context(|| format!("failed to resolve components in '{}'", manifest_path))?;

    let report = BootstrapMounter::new().mount(&mut document, &bindings);

    print!("{}", document.render_html());

    Ok(report.is_success())
}

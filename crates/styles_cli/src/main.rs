//! CLI inspection entry point.
//!
//! # Responsibility
//! - Verify `styles_core` linkage with a deterministic ping line.
//! - Load a provider config and print the documents a host would serve.
//!
//! Usage: `styles_cli [<config.json> [list | style <id> | metadata <id> | definition <id> <format>]]`

use log::info;
use std::error::Error;
use std::process::ExitCode;
use styles_core::{build_provider, logging, ProviderConfig, StyleProvider};

const USAGE: &str =
    "usage: styles_cli [<config.json> [list | style <id> | metadata <id> | definition <id> <format>]]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the requested resource is absent.
fn run(args: &[String]) -> Result<bool, Box<dyn Error>> {
    let Some(config_path) = args.first() else {
        println!("styles_core ping={}", styles_core::ping());
        println!("styles_core version={}", styles_core::core_version());
        return Ok(true);
    };

    let config = ProviderConfig::load(config_path)?;
    if let Some(logging_config) = &config.logging {
        logging::init_from_config(logging_config)?;
    }
    let provider = build_provider(&config)?;
    info!(
        "event=cli_provider_ready module=cli status=ok config={} styles={}",
        config_path,
        provider.catalog().styles().len()
    );

    let command: Vec<&str> = args[1..].iter().map(String::as_str).collect();
    match command.as_slice() {
        [] | ["list"] => print_json(&provider.list_styles()),
        ["style", style_id] => match provider.get_style(style_id) {
            Some(entry) => print_json(&entry),
            None => not_found(&format!("style `{style_id}`")),
        },
        ["metadata", style_id] => match provider.get_style_metadata(style_id)? {
            Some(metadata) => print_json(&metadata),
            None => not_found(&format!("style `{style_id}`")),
        },
        ["definition", style_id, format_code] => {
            definition(provider.as_ref(), style_id, format_code)
        }
        _ => Err(USAGE.into()),
    }
}

/// Accepts either a configured format tag or a link `f` code.
fn definition(
    provider: &dyn StyleProvider,
    style_id: &str,
    format: &str,
) -> Result<bool, Box<dyn Error>> {
    let format_tag = styles_core::format::from_format_code(format)
        .map(|descriptor| descriptor.tag)
        .unwrap_or(format);
    match provider.get_style_definition(style_id, format_tag)? {
        Some(content) => {
            print!("{content}");
            Ok(true)
        }
        None => not_found(&format!("stylesheet `{format}` of style `{style_id}`")),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<bool, Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(true)
}

fn not_found(what: &str) -> Result<bool, Box<dyn Error>> {
    eprintln!("not found: {what}");
    Ok(false)
}

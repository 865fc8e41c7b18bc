use crate::output::print_json;
use anyhow::Context;
use assess_core::config::{Config, WarnLevel};
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration
    Show,
    /// Check the configuration for problems
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    match subcmd {
        ConfigSubcommand::Show => show(&config, json),
        ConfigSubcommand::Validate => validate(&config, json),
    }
}

fn show(config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(config);
    }
    println!("fallback_filename:       {}", config.fallback_filename);
    println!("require_name_for_export: {}", config.require_name_for_export);
    let phases: Vec<String> = config.phases.enabled.iter().map(|p| p.to_string()).collect();
    println!("phases.enabled:          {}", phases.join(", "));
    Ok(())
}

fn validate(config: &Config, json: bool) -> anyhow::Result<()> {
    let warnings = config.validate();
    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);

    if json {
        print_json(&serde_json::json!({
            "ok": !has_errors,
            "warnings": warnings,
        }))?;
    } else if warnings.is_empty() {
        println!("Config OK");
    } else {
        for w in &warnings {
            let tag = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("{tag}: {}", w.message);
        }
    }

    if has_errors {
        anyhow::bail!("config has errors");
    }
    Ok(())
}

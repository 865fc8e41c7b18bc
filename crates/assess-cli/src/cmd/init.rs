use crate::output::print_json;
use anyhow::Context;
use assess_core::{config::Config, io, paths, persist, profile::Profile};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    std::fs::create_dir_all(paths::assess_dir(root)).context("failed to create .assess/")?;

    let wrote_config = !paths::config_path(root).exists();
    if wrote_config {
        Config::default().save(root).context("failed to write config")?;
    }

    let profile_bytes = persist::export_profile(&Profile::default_profile())?;
    let wrote_profile = io::write_if_missing(&paths::working_profile_path(root), &profile_bytes)
        .context("failed to write working profile")?;

    if json {
        return print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "config_created": wrote_config,
            "profile_created": wrote_profile,
        }));
    }

    if wrote_profile {
        println!("Initialized assessment workspace in {}", root.display());
        println!("Next: assess basics --name <organization>");
    } else {
        println!("Already initialized: {}", root.display());
    }
    Ok(())
}

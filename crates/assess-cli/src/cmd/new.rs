use super::{open_session, save_session};
use crate::output::print_json;
use std::path::Path;

pub fn run(root: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!(
            "starting a new profile discards all unsaved work; rerun with --yes to confirm"
        );
    }
    let mut session = open_session(root)?;
    let view = session.new_profile();
    save_session(root, &session)?;

    if json {
        return print_json(&view);
    }
    println!("Started a new profile.");
    println!("Next: assess basics --name <organization>");
    Ok(())
}

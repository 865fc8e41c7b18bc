use super::open_session;
use crate::output::{print_json, print_steps};
use assess_core::types::StepStatus;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let session = open_session(root)?;
    let Some(view) = session.controls().progress() else {
        anyhow::bail!("progress was not computed for the working profile");
    };

    if json {
        return print_json(view);
    }

    print_steps(view);
    println!();
    println!("{} ({:.1}%)", view.label, view.percent);
    if let Some(next) = view.steps.iter().find(|s| s.status == StepStatus::Todo) {
        println!("Next: {}", next.title);
    }
    Ok(())
}

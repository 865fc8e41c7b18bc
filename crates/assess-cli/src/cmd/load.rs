use super::{open_session, save_session};
use crate::output::print_json;
use std::path::Path;

pub fn run(root: &Path, file: &Path, json: bool) -> anyhow::Result<()> {
    let mut session = open_session(root)?;
    let report = match session.load_from_path(file) {
        Ok(report) => report,
        Err(e) if e.is_rejected_load() => anyhow::bail!(
            "Error loading {}: {e}. Please ensure it is a valid profile JSON file",
            file.display()
        ),
        Err(e) => {
            return Err(anyhow::Error::new(e).context(format!("failed to read {}", file.display())))
        }
    };
    save_session(root, &session)?;

    if json {
        return print_json(&serde_json::json!({
            "organization_name": report.organization_name,
            "message": report.message,
            "progress": session.controls().progress(),
        }));
    }
    println!("{}", report.message);
    Ok(())
}

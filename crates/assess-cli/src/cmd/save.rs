use super::open_session;
use crate::output::print_json;
use anyhow::Context;
use assess_core::persist;
use std::path::Path;

pub fn run(root: &Path, out: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let session = open_session(root)?;
    let export = session.save()?;
    let dir = out.unwrap_or(root);
    let path = persist::write_export(dir, &export)
        .with_context(|| format!("failed to write {}", dir.join(&export.filename).display()))?;

    if json {
        return print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "filename": export.filename,
            "bytes": export.bytes.len(),
        }));
    }
    println!("Saved profile to {}", path.display());
    Ok(())
}

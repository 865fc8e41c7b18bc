use assess_core::progress::ProgressView;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// One row per enabled step: phase key, status, then the step's title.
pub fn step_lines(view: &ProgressView) -> Vec<String> {
    let phase_width = view
        .steps
        .iter()
        .map(|s| s.phase.as_str().len())
        .chain(std::iter::once("PHASE".len()))
        .max()
        .unwrap_or(0);
    let status_width = view
        .steps
        .iter()
        .map(|s| s.status.as_str().len())
        .chain(std::iter::once("STATUS".len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "{:phase_width$}  {:status_width$}  TITLE",
        "PHASE", "STATUS"
    )];
    lines.extend(view.steps.iter().map(|s| {
        format!(
            "{:phase_width$}  {:status_width$}  {}",
            s.phase.as_str(),
            s.status.as_str(),
            s.title
        )
    }));
    lines
}

pub fn print_steps(view: &ProgressView) {
    for line in step_lines(view) {
        println!("{line}");
    }
}

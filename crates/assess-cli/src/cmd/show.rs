use super::open_session;
use crate::output::print_json;
use assess_core::form::{ControlRegistry, FormLayout, OptionGroup, TextField, Toggle};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let session = open_session(root)?;

    if json {
        return print_json(&serde_json::json!({
            "profile": session.store().get(),
            "progress": session.controls().progress(),
        }));
    }

    let today = chrono::Local::now().format("%B %-d, %Y");
    println!("Version {}, {}", env!("CARGO_PKG_VERSION"), today);
    println!();
    println!("The Basics");

    let controls = session.controls();
    for field in TextField::all() {
        println!("  {:<18} {}", format!("{}:", field.label()), controls.text(*field));
    }
    println!(
        "  {:<18} {}",
        format!("{}:", Toggle::Remote.label()),
        if controls.toggle(Toggle::Remote) { "yes" } else { "no" }
    );

    let layout = FormLayout::standard();
    for group in OptionGroup::all() {
        let checked = controls.checked(*group);
        println!("  {}:", group.label());
        for option in layout.options(*group) {
            let mark = if checked.contains(option) {
                if group.is_multi() { "[x]" } else { "(x)" }
            } else if group.is_multi() {
                "[ ]"
            } else {
                "( )"
            };
            println!("    {mark} {option}");
        }
    }

    if let Some(view) = controls.progress() {
        println!();
        println!("{}", view.label);
    }
    Ok(())
}

use super::{open_session, save_session};
use crate::output::print_json;
use assess_core::form::{ControlRegistry, OptionGroup, TextField, Toggle};
use assess_core::AssessError;
use clap::Args;
use std::path::Path;

/// Values for "The Basics". Flags that are left out keep what the working
/// profile already has.
#[derive(Args, Debug, Default)]
pub struct BasicsArgs {
    /// Organization name
    #[arg(long)]
    pub name: Option<String>,
    /// Organization size (micro, small, medium, large)
    #[arg(long)]
    pub size: Option<String>,
    /// Year the organization was founded
    #[arg(long)]
    pub year: Option<String>,
    /// Where the organization is based
    #[arg(long)]
    pub location: Option<String>,
    /// Whether the organization is fully remote; bare `--remote` means true
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub remote: Option<bool>,
    /// Identity tag; repeat for several (replaces the saved set)
    #[arg(long = "identity")]
    pub identity: Vec<String>,
    /// Legal structure (nonprofit, for_profit, cooperative, government, fiscally_sponsored, other)
    #[arg(long)]
    pub legal: Option<String>,
    /// Funding source; repeat for several (replaces the saved set)
    #[arg(long = "funding")]
    pub funding: Vec<String>,
}

pub fn run(root: &Path, args: BasicsArgs, json: bool) -> anyhow::Result<()> {
    let mut session = open_session(root)?;
    fill(session.controls_mut(), &args)?;
    let view = session.submit_basics();
    save_session(root, &session)?;

    if json {
        return print_json(&serde_json::json!({
            "basics": session.store().get().basics(),
            "progress": view,
        }));
    }
    println!("'The Basics' have been saved!");
    println!("{}", view.label);
    Ok(())
}

/// Apply the given flags on top of the currently drawn form.
fn fill<C: ControlRegistry>(controls: &mut C, args: &BasicsArgs) -> anyhow::Result<()> {
    if let Some(name) = &args.name {
        controls.set_text(TextField::Name, name);
    }
    if let Some(year) = &args.year {
        controls.set_text(TextField::YearFounded, year);
    }
    if let Some(location) = &args.location {
        controls.set_text(TextField::Location, location);
    }
    if let Some(remote) = args.remote {
        controls.set_toggle(Toggle::Remote, remote);
    }
    if let Some(size) = &args.size {
        check(controls, OptionGroup::Size, &[size.clone()])?;
    }
    if let Some(legal) = &args.legal {
        check(controls, OptionGroup::Legal, &[legal.replace('-', "_")])?;
    }
    if !args.identity.is_empty() {
        check(controls, OptionGroup::Identity, &args.identity)?;
    }
    if !args.funding.is_empty() {
        check(controls, OptionGroup::Funding, &args.funding)?;
    }
    Ok(())
}

fn check<C: ControlRegistry>(
    controls: &mut C,
    group: OptionGroup,
    values: &[String],
) -> anyhow::Result<()> {
    controls.clear_group(group);
    for value in values {
        if !controls.check(group, value) {
            return Err(AssessError::UnknownOption {
                group: group.label().to_lowercase(),
                value: value.clone(),
            }
            .into());
        }
    }
    Ok(())
}

//! Render/sync engine: `project` writes a profile onto the form controls,
//! `capture` reads the controls back into a basics record. The two never run
//! together.

use crate::form::{ControlRegistry, OptionGroup, TextField, Toggle};
use crate::profile::{BasicsInput, Profile};

/// Show `profile` on `controls`. Every control is cleared first so nothing
/// from a previously shown profile survives.
pub fn project<C: ControlRegistry + ?Sized>(profile: &Profile, controls: &mut C) {
    controls.clear();

    let Some(basics) = profile.basics() else {
        tracing::debug!("no basics yet; form left empty");
        return;
    };

    controls.set_text(TextField::Name, &basics.organization_name);
    controls.set_text(TextField::YearFounded, &basics.year_founded);
    controls.set_text(TextField::Location, &basics.location);
    controls.set_toggle(Toggle::Remote, basics.is_remote);

    if let Some(size) = &basics.organization_size {
        check_or_warn(controls, OptionGroup::Size, size);
    }
    for value in &basics.identity {
        check_or_warn(controls, OptionGroup::Identity, value);
    }
    if let Some(legal) = &basics.legal_structure {
        check_or_warn(controls, OptionGroup::Legal, legal);
    }
    for value in &basics.funding_sources {
        check_or_warn(controls, OptionGroup::Funding, value);
    }
    tracing::debug!(name = %basics.organization_name, "basics projected");
}

fn check_or_warn<C: ControlRegistry + ?Sized>(controls: &mut C, group: OptionGroup, value: &str) {
    if !controls.check(group, value) {
        tracing::warn!(%group, value, "saved value has no matching option; skipped");
    }
}

/// Read the current state of every basics control.
pub fn capture<C: ControlRegistry + ?Sized>(controls: &C) -> BasicsInput {
    BasicsInput {
        organization_name: controls.text(TextField::Name),
        organization_size: single(controls, OptionGroup::Size),
        year_founded: controls.text(TextField::YearFounded),
        location: controls.text(TextField::Location),
        is_remote: controls.toggle(Toggle::Remote),
        identity: controls.checked(OptionGroup::Identity),
        legal_structure: single(controls, OptionGroup::Legal),
        funding_sources: controls.checked(OptionGroup::Funding),
    }
}

fn single<C: ControlRegistry + ?Sized>(controls: &C, group: OptionGroup) -> Option<String> {
    controls.checked(group).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryControls;
    use crate::profile::OrganizationBasics;

    fn acme() -> OrganizationBasics {
        OrganizationBasics {
            organization_name: "Acme".to_string(),
            organization_size: Some("small".to_string()),
            year_founded: "1999".to_string(),
            location: "Denver".to_string(),
            is_remote: true,
            identity: vec!["women_led".to_string(), "rural".to_string()],
            legal_structure: Some("nonprofit".to_string()),
            funding_sources: vec!["grants".to_string(), "donations".to_string()],
        }
    }

    fn profile_with(basics: OrganizationBasics) -> Profile {
        let mut p = Profile::default_profile();
        p.phase1.organization_basics = Some(basics);
        p
    }

    #[test]
    fn project_then_capture_returns_same_basics() {
        let mut controls = MemoryControls::default();
        project(&profile_with(acme()), &mut controls);
        assert_eq!(capture(&controls), acme());
    }

    #[test]
    fn project_without_basics_empties_form() {
        let mut controls = MemoryControls::default();
        project(&profile_with(acme()), &mut controls);
        project(&Profile::default_profile(), &mut controls);
        assert_eq!(capture(&controls), OrganizationBasics::default());
    }

    #[test]
    fn project_clears_values_missing_from_new_profile() {
        let mut controls = MemoryControls::default();
        project(&profile_with(acme()), &mut controls);

        let sparse = OrganizationBasics {
            organization_name: "Beta".to_string(),
            identity: vec!["rural".to_string()],
            ..Default::default()
        };
        project(&profile_with(sparse.clone()), &mut controls);

        let captured = capture(&controls);
        assert_eq!(captured, sparse);
        assert!(controls.checked(OptionGroup::Funding).is_empty());
        assert!(!controls.toggle(Toggle::Remote));
    }

    #[test]
    fn capture_orders_multi_select_by_declaration() {
        let mut controls = MemoryControls::default();
        controls.check(OptionGroup::Identity, "rural");
        controls.check(OptionGroup::Identity, "community_based");
        let captured = capture(&controls);
        assert_eq!(
            captured.identity,
            vec!["community_based".to_string(), "rural".to_string()]
        );
        assert!(captured.organization_size.is_none());
        assert!(captured.legal_structure.is_none());
    }

    #[test]
    fn unlisted_size_leaves_group_unchecked() {
        let mut basics = acme();
        basics.organization_size = Some("1-10 employees".to_string());
        let mut controls = MemoryControls::default();
        project(&profile_with(basics), &mut controls);
        assert!(controls.checked(OptionGroup::Size).is_empty());
        assert_eq!(controls.text(TextField::Name), "Acme");
        assert!(capture(&controls).organization_size.is_none());
    }

    #[test]
    fn unknown_saved_tags_are_skipped() {
        let mut basics = acme();
        basics.identity.push("retired_option".to_string());
        let mut controls = MemoryControls::default();
        project(&profile_with(basics), &mut controls);
        assert_eq!(
            controls.checked(OptionGroup::Identity),
            vec!["women_led".to_string(), "rural".to_string()]
        );
    }
}

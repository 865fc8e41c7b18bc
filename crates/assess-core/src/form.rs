//! The basics form as a set of declared controls, and the surface the
//! render/sync engine talks to.

use crate::progress::ProgressView;
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Control identifiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    YearFounded,
    Location,
}

impl TextField {
    pub fn all() -> &'static [TextField] {
        &[TextField::Name, TextField::YearFounded, TextField::Location]
    }

    pub fn label(self) -> &'static str {
        match self {
            TextField::Name => "Organization name",
            TextField::YearFounded => "Year founded",
            TextField::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Remote,
}

impl Toggle {
    pub fn label(self) -> &'static str {
        match self {
            Toggle::Remote => "Fully remote",
        }
    }
}

/// A group of options. Single-select groups behave like radio buttons,
/// multi-select groups like a column of checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionGroup {
    Size,
    Identity,
    Legal,
    Funding,
}

impl OptionGroup {
    pub fn all() -> &'static [OptionGroup] {
        &[
            OptionGroup::Size,
            OptionGroup::Identity,
            OptionGroup::Legal,
            OptionGroup::Funding,
        ]
    }

    pub fn control_name(self) -> &'static str {
        match self {
            OptionGroup::Size => "org-size",
            OptionGroup::Identity => "org-identity",
            OptionGroup::Legal => "org-legal",
            OptionGroup::Funding => "org-funding",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OptionGroup::Size => "Size",
            OptionGroup::Identity => "Identity",
            OptionGroup::Legal => "Legal structure",
            OptionGroup::Funding => "Funding sources",
        }
    }

    pub fn is_multi(self) -> bool {
        matches!(self, OptionGroup::Identity | OptionGroup::Funding)
    }
}

impl fmt::Display for OptionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_name())
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const SIZE_OPTIONS: &[&str] = &["micro", "small", "medium", "large"];

pub const LEGAL_OPTIONS: &[&str] = &[
    "nonprofit",
    "for_profit",
    "cooperative",
    "government",
    "fiscally_sponsored",
    "other",
];

pub const IDENTITY_OPTIONS: &[&str] = &[
    "community_based",
    "faith_based",
    "bipoc_led",
    "women_led",
    "lgbtq_led",
    "youth_serving",
    "immigrant_serving",
    "rural",
];

pub const FUNDING_OPTIONS: &[&str] = &[
    "grants",
    "donations",
    "earned_revenue",
    "government_contracts",
    "membership_dues",
    "investment",
    "loans",
];

/// Declared options per group, in the order the controls appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    groups: Vec<(OptionGroup, Vec<String>)>,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormLayout {
    pub fn standard() -> Self {
        let owned = |values: &[&str]| -> Vec<String> { values.iter().map(|v| v.to_string()).collect() };
        Self {
            groups: vec![
                (OptionGroup::Size, owned(SIZE_OPTIONS)),
                (OptionGroup::Identity, owned(IDENTITY_OPTIONS)),
                (OptionGroup::Legal, owned(LEGAL_OPTIONS)),
                (OptionGroup::Funding, owned(FUNDING_OPTIONS)),
            ],
        }
    }

    pub fn options(&self, group: OptionGroup) -> &[String] {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, opts)| opts.as_slice())
            .unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// The controls of the basics form.
pub trait ControlRegistry {
    /// Return every control to its empty default.
    fn clear(&mut self);

    fn set_text(&mut self, field: TextField, value: &str);
    fn text(&self, field: TextField) -> String;

    fn set_toggle(&mut self, toggle: Toggle, on: bool);
    fn toggle(&self, toggle: Toggle) -> bool;

    /// Check `value` in `group`; a single-select group unchecks its other
    /// options. Returns false when the group declares no such option.
    fn check(&mut self, group: OptionGroup, value: &str) -> bool;

    /// Checked values of `group` in declaration order.
    fn checked(&self, group: OptionGroup) -> Vec<String>;

    /// Uncheck every option of `group`.
    fn clear_group(&mut self, group: OptionGroup);
}

/// Where derived step/progress state is shown.
pub trait ProgressDisplay {
    fn show_progress(&mut self, view: &ProgressView);
}

// ---------------------------------------------------------------------------
// MemoryControls
// ---------------------------------------------------------------------------

/// An in-memory control surface built from a [`FormLayout`].
#[derive(Debug, Clone)]
pub struct MemoryControls {
    texts: HashMap<TextField, String>,
    toggles: HashMap<Toggle, bool>,
    groups: Vec<(OptionGroup, Vec<(String, bool)>)>,
    progress: Option<ProgressView>,
}

impl Default for MemoryControls {
    fn default() -> Self {
        Self::new(&FormLayout::standard())
    }
}

impl MemoryControls {
    pub fn new(layout: &FormLayout) -> Self {
        let groups = OptionGroup::all()
            .iter()
            .map(|&g| {
                let opts = layout
                    .options(g)
                    .iter()
                    .map(|v| (v.clone(), false))
                    .collect();
                (g, opts)
            })
            .collect();
        Self {
            texts: HashMap::new(),
            toggles: HashMap::new(),
            groups,
            progress: None,
        }
    }

    /// The progress last pushed by the engine, if any.
    pub fn progress(&self) -> Option<&ProgressView> {
        self.progress.as_ref()
    }

    fn group_mut(&mut self, group: OptionGroup) -> Option<&mut Vec<(String, bool)>> {
        self.groups
            .iter_mut()
            .find(|(g, _)| *g == group)
            .map(|(_, opts)| opts)
    }
}

impl ControlRegistry for MemoryControls {
    fn clear(&mut self) {
        self.texts.clear();
        self.toggles.clear();
        for (_, opts) in &mut self.groups {
            for (_, checked) in opts.iter_mut() {
                *checked = false;
            }
        }
    }

    fn set_text(&mut self, field: TextField, value: &str) {
        self.texts.insert(field, value.to_string());
    }

    fn text(&self, field: TextField) -> String {
        self.texts.get(&field).cloned().unwrap_or_default()
    }

    fn set_toggle(&mut self, toggle: Toggle, on: bool) {
        self.toggles.insert(toggle, on);
    }

    fn toggle(&self, toggle: Toggle) -> bool {
        self.toggles.get(&toggle).copied().unwrap_or(false)
    }

    fn check(&mut self, group: OptionGroup, value: &str) -> bool {
        let Some(opts) = self.group_mut(group) else {
            return false;
        };
        if !opts.iter().any(|(v, _)| v == value) {
            return false;
        }
        for (v, checked) in opts.iter_mut() {
            if v == value {
                *checked = true;
            } else if !group.is_multi() {
                *checked = false;
            }
        }
        true
    }

    fn checked(&self, group: OptionGroup) -> Vec<String> {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, opts)| {
                opts.iter()
                    .filter(|(_, checked)| *checked)
                    .map(|(v, _)| v.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn clear_group(&mut self, group: OptionGroup) {
        if let Some(opts) = self.group_mut(group) {
            for (_, checked) in opts.iter_mut() {
                *checked = false;
            }
        }
    }
}

impl ProgressDisplay for MemoryControls {
    fn show_progress(&mut self, view: &ProgressView) {
        self.progress = Some(view.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_select_keeps_one_checked() {
        let mut c = MemoryControls::default();
        assert!(c.check(OptionGroup::Size, "small"));
        assert!(c.check(OptionGroup::Size, "large"));
        assert_eq!(c.checked(OptionGroup::Size), vec!["large".to_string()]);
    }

    #[test]
    fn multi_select_reports_declaration_order() {
        let mut c = MemoryControls::default();
        assert!(c.check(OptionGroup::Funding, "loans"));
        assert!(c.check(OptionGroup::Funding, "grants"));
        assert_eq!(
            c.checked(OptionGroup::Funding),
            vec!["grants".to_string(), "loans".to_string()]
        );
    }

    #[test]
    fn unknown_option_is_not_checked() {
        let mut c = MemoryControls::default();
        assert!(!c.check(OptionGroup::Identity, "pirate_led"));
        assert!(c.checked(OptionGroup::Identity).is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut c = MemoryControls::default();
        c.set_text(TextField::Name, "Acme");
        c.set_toggle(Toggle::Remote, true);
        c.check(OptionGroup::Identity, "rural");
        c.clear();
        assert_eq!(c.text(TextField::Name), "");
        assert!(!c.toggle(Toggle::Remote));
        assert!(c.checked(OptionGroup::Identity).is_empty());
    }

    #[test]
    fn clear_group_leaves_other_groups() {
        let mut c = MemoryControls::default();
        c.check(OptionGroup::Identity, "rural");
        c.check(OptionGroup::Funding, "grants");
        c.clear_group(OptionGroup::Identity);
        assert!(c.checked(OptionGroup::Identity).is_empty());
        assert_eq!(c.checked(OptionGroup::Funding), vec!["grants".to_string()]);
    }

    #[test]
    fn layout_lists_declared_options() {
        let layout = FormLayout::standard();
        assert_eq!(layout.options(OptionGroup::Size).len(), SIZE_OPTIONS.len());
        assert_eq!(layout.options(OptionGroup::Legal)[1], "for_profit");
    }
}

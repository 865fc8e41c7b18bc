//! Wires the store, the render/sync engine and persistence together at the
//! points a user can trigger: new profile, save, load and basics submit.

use crate::config::Config;
use crate::error::{AssessError, Result};
use crate::form::{ControlRegistry, ProgressDisplay};
use crate::persist::{self, Export};
use crate::progress::{reflect_progress, ProgressView};
use crate::store::ProfileStore;
use crate::sync;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Outcome of a successful load, with the message to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub organization_name: Option<String>,
    pub message: String,
}

/// Held while a file is being read for import. Only one can exist per
/// session; dropping it without finishing abandons the import and leaves
/// the profile untouched.
#[derive(Debug)]
pub struct ImportTicket {
    slot: Arc<AtomicBool>,
}

impl Drop for ImportTicket {
    fn drop(&mut self) {
        self.slot.store(false, Ordering::Release);
    }
}

pub struct Session<C> {
    store: ProfileStore,
    controls: C,
    config: Config,
    import_slot: Arc<AtomicBool>,
    rendered_revision: Option<u64>,
}

impl<C: ControlRegistry + ProgressDisplay> Session<C> {
    pub fn new(config: Config, controls: C) -> Self {
        Self::with_store(ProfileStore::new(), config, controls)
    }

    /// Start from an existing store and draw it immediately.
    pub fn with_store(store: ProfileStore, config: Config, controls: C) -> Self {
        let mut session = Self {
            store,
            controls,
            config,
            import_slot: Arc::new(AtomicBool::new(false)),
            rendered_revision: None,
        };
        session.render();
        session
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut C {
        &mut self.controls
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True when the store changed since the controls were last drawn.
    pub fn is_render_stale(&self) -> bool {
        self.rendered_revision != Some(self.store.revision())
    }

    /// Project the current profile and recompute progress.
    pub fn render(&mut self) -> ProgressView {
        let profile = self.store.get();
        sync::project(profile, &mut self.controls);
        let view = reflect_progress(profile, &self.config.phases.enabled, &mut self.controls);
        self.rendered_revision = Some(self.store.revision());
        view
    }

    /// Discard the current profile for a fresh default one.
    pub fn new_profile(&mut self) -> ProgressView {
        self.store.reset();
        self.render()
    }

    /// Capture the form, make it the basics record, and redraw.
    pub fn submit_basics(&mut self) -> ProgressView {
        let input = sync::capture(&self.controls);
        self.store.commit_basics(input);
        self.render()
    }

    /// Snapshot the current profile for download.
    pub fn save(&self) -> Result<Export> {
        persist::prepare_export(self.store.get(), &self.config.export_policy())
    }

    /// Claim the single import slot. Fails while another import is open.
    pub fn begin_import(&self) -> Result<ImportTicket> {
        if self
            .import_slot
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AssessError::ImportInProgress);
        }
        Ok(ImportTicket {
            slot: Arc::clone(&self.import_slot),
        })
    }

    pub fn import_in_progress(&self) -> bool {
        self.import_slot.load(Ordering::Acquire)
    }

    /// Parse and apply the bytes read for `ticket`. On any error the current
    /// profile and the controls are left as they were.
    pub fn finish_import(&mut self, ticket: ImportTicket, bytes: &[u8]) -> Result<LoadReport> {
        if !Arc::ptr_eq(&ticket.slot, &self.import_slot) {
            return Err(AssessError::ForeignImportTicket);
        }
        let outcome = persist::import_profile(bytes).and_then(|value| self.store.replace(value));
        drop(ticket);
        if let Err(e) = outcome {
            tracing::warn!(error = %e, "profile load rejected");
            return Err(e);
        }
        self.render();

        let organization_name = self.store.get().organization_name().map(str::to_string);
        let message = match &organization_name {
            Some(name) => format!("Profile for \"{name}\" loaded successfully."),
            None => "Profile loaded successfully.".to_string(),
        };
        tracing::info!(organization = organization_name.as_deref(), "profile loaded");
        Ok(LoadReport {
            organization_name,
            message,
        })
    }

    /// Begin, read and finish an import from a file on disk.
    pub fn load_from_path(&mut self, path: &Path) -> Result<LoadReport> {
        let ticket = self.begin_import()?;
        let bytes = persist::read_file(path)?;
        self.finish_import(ticket, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{MemoryControls, OptionGroup, TextField, Toggle};
    use crate::types::{Phase, StepStatus};
    use tempfile::TempDir;

    fn session() -> Session<MemoryControls> {
        Session::new(Config::default(), MemoryControls::default())
    }

    fn fill_acme(s: &mut Session<MemoryControls>) {
        let c = s.controls_mut();
        c.set_text(TextField::Name, "Acme");
        c.set_text(TextField::YearFounded, "1999");
        c.set_text(TextField::Location, "Denver");
        c.set_toggle(Toggle::Remote, true);
        c.check(OptionGroup::Size, "small");
        c.check(OptionGroup::Identity, "community_based");
        c.check(OptionGroup::Legal, "nonprofit");
        c.check(OptionGroup::Funding, "grants");
    }

    #[test]
    fn new_session_is_rendered() {
        let s = session();
        assert!(!s.is_render_stale());
        let view = s.controls().progress().unwrap();
        assert_eq!(view.status_of(Phase::CurrentState), Some(StepStatus::Locked));
    }

    #[test]
    fn submit_commits_and_unlocks() {
        let mut s = session();
        fill_acme(&mut s);
        let view = s.submit_basics();
        let basics = s.store().get().basics().unwrap();
        assert_eq!(basics.organization_name, "Acme");
        assert_eq!(basics.organization_size.as_deref(), Some("small"));
        assert_eq!(view.status_of(Phase::CurrentState), Some(StepStatus::Todo));
        assert_eq!(s.controls().text(TextField::Name), "Acme");
        assert!(!s.is_render_stale());
    }

    #[test]
    fn save_then_load_into_fresh_session() {
        let mut s = session();
        fill_acme(&mut s);
        s.submit_basics();
        let export = s.save().unwrap();
        assert_eq!(export.filename, "Acme.json");

        let mut fresh = session();
        let ticket = fresh.begin_import().unwrap();
        let report = fresh.finish_import(ticket, &export.bytes).unwrap();
        assert_eq!(report.message, "Profile for \"Acme\" loaded successfully.");
        assert_eq!(fresh.store().get(), s.store().get());
        assert_eq!(fresh.controls().checked(OptionGroup::Funding), vec!["grants"]);
    }

    #[test]
    fn save_refused_without_name() {
        let mut s = session();
        s.submit_basics();
        let before = s.store().get().clone();
        let err = s.save().unwrap_err();
        assert!(matches!(err, AssessError::Refused(_)));
        assert_eq!(s.store().get(), &before);
    }

    #[test]
    fn bad_file_keeps_prior_profile_and_form() {
        let mut s = session();
        fill_acme(&mut s);
        s.submit_basics();
        let before = s.store().get().clone();

        let ticket = s.begin_import().unwrap();
        let err = s.finish_import(ticket, b"not json").unwrap_err();
        assert!(matches!(err, AssessError::Parse(_)));
        assert_eq!(s.store().get(), &before);
        assert_eq!(s.controls().text(TextField::Name), "Acme");

        let ticket = s.begin_import().unwrap();
        let err = s.finish_import(ticket, br#"{"organizationName": "Other"}"#).unwrap_err();
        assert!(matches!(err, AssessError::Schema(_)));
        assert_eq!(s.store().get().organization_name(), Some("Acme"));
    }

    #[test]
    fn second_import_refused_while_first_open() {
        let mut s = session();
        let first = s.begin_import().unwrap();
        assert!(s.import_in_progress());
        assert!(matches!(
            s.begin_import(),
            Err(AssessError::ImportInProgress)
        ));
        let bytes = persist::export_profile(&crate::profile::Profile::default_profile()).unwrap();
        s.finish_import(first, &bytes).unwrap();
        assert!(!s.import_in_progress());
        assert!(s.begin_import().is_ok());
    }

    #[test]
    fn abandoned_import_releases_slot() {
        let s = session();
        let ticket = s.begin_import().unwrap();
        drop(ticket);
        assert!(!s.import_in_progress());
        assert!(s.begin_import().is_ok());
    }

    #[test]
    fn ticket_from_other_session_is_refused() {
        let other = session();
        let mut s = session();
        fill_acme(&mut s);
        s.submit_basics();
        let before = s.store().get().clone();

        let foreign = other.begin_import().unwrap();
        let bytes = persist::export_profile(&crate::profile::Profile::default_profile()).unwrap();
        let err = s.finish_import(foreign, &bytes).unwrap_err();
        assert!(matches!(err, AssessError::ForeignImportTicket));
        assert_eq!(s.store().get(), &before);
        assert!(!s.import_in_progress());
        assert!(!other.import_in_progress());
    }

    #[test]
    fn failed_import_releases_slot() {
        let mut s = session();
        let ticket = s.begin_import().unwrap();
        assert!(s.finish_import(ticket, b"[]").is_err());
        assert!(!s.import_in_progress());
    }

    #[test]
    fn new_profile_clears_form() {
        let mut s = session();
        fill_acme(&mut s);
        s.submit_basics();
        s.new_profile();
        assert!(s.store().get().basics().is_none());
        assert_eq!(s.controls().text(TextField::Name), "");
        assert!(s.controls().checked(OptionGroup::Size).is_empty());
    }

    #[test]
    fn load_from_missing_path_leaves_state() {
        let dir = TempDir::new().unwrap();
        let mut s = session();
        fill_acme(&mut s);
        s.submit_basics();
        let err = s.load_from_path(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AssessError::Io(_)));
        assert_eq!(s.store().get().organization_name(), Some("Acme"));
        assert!(!s.import_in_progress());
    }
}

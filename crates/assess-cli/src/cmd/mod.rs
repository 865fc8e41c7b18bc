pub mod basics;
pub mod config;
pub mod init;
pub mod load;
pub mod new;
pub mod progress;
pub mod save;
pub mod show;

use anyhow::Context;
use assess_core::{
    config::Config, form::MemoryControls, persist, session::Session,
};
use std::path::Path;

/// Open the working profile under `root` with its controls already drawn.
pub(crate) fn open_session(root: &Path) -> anyhow::Result<Session<MemoryControls>> {
    let config = Config::load(root).context("failed to load config")?;
    let store = persist::load_working(root).context("failed to load working profile")?;
    Ok(Session::with_store(store, config, MemoryControls::default()))
}

pub(crate) fn save_session(root: &Path, session: &Session<MemoryControls>) -> anyhow::Result<()> {
    persist::save_working(root, session.store().get()).context("failed to save working profile")
}

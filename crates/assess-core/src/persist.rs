use crate::error::{AssessError, Result};
use crate::io::atomic_write;
use crate::paths;
use crate::profile::Profile;
use crate::store::ProfileStore;
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const DEFAULT_FALLBACK_FILENAME: &str = "snapshot.json";

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Pretty-printed JSON for `profile`, newline-terminated.
pub fn export_profile(profile: &Profile) -> Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(profile)?;
    data.push(b'\n');
    Ok(data)
}

/// Parse raw file contents as JSON. Only syntax is checked here; whether
/// the value is a profile is decided by [`ProfileStore::replace`].
pub fn import_profile(bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes).map_err(|_| AssessError::NotUtf8)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    serde_json::from_str(text).map_err(AssessError::Parse)
}

// ---------------------------------------------------------------------------
// Export naming and policy
// ---------------------------------------------------------------------------

static UNSAFE_CHARS_RE: OnceLock<Regex> = OnceLock::new();

fn unsafe_chars_re() -> &'static Regex {
    UNSAFE_CHARS_RE.get_or_init(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]+"#).unwrap())
}

/// `<organization name>.json`, or `fallback` when no name has been entered.
/// Characters that cannot appear in a filename become `-`.
pub fn export_filename(profile: &Profile, fallback: &str) -> String {
    match profile.organization_name() {
        Some(name) => {
            let cleaned = unsafe_chars_re().replace_all(name, "-");
            let cleaned = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
            if cleaned.is_empty() {
                fallback.to_string()
            } else {
                format!("{cleaned}.json")
            }
        }
        None => fallback.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPolicy {
    pub require_name: bool,
    pub fallback_filename: String,
}

impl Default for ExportPolicy {
    fn default() -> Self {
        Self {
            require_name: true,
            fallback_filename: DEFAULT_FALLBACK_FILENAME.to_string(),
        }
    }
}

/// A serialized snapshot ready to be handed to whatever presents downloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Build the export for `profile`, or refuse when the policy needs an
/// organization name and none has been saved with the basics.
pub fn prepare_export(profile: &Profile, policy: &ExportPolicy) -> Result<Export> {
    if policy.require_name && profile.organization_name().is_none() {
        return Err(AssessError::Refused(
            "Please provide an organization name and save the basics before saving the profile."
                .to_string(),
        ));
    }
    Ok(Export {
        filename: export_filename(profile, &policy.fallback_filename),
        bytes: export_profile(profile)?,
    })
}

/// Write `export` into `dir`, returning the full path written.
pub fn write_export(dir: &Path, export: &Export) -> Result<PathBuf> {
    let path = dir.join(&export.filename);
    atomic_write(&path, &export.bytes)?;
    tracing::info!(path = %path.display(), "profile saved");
    Ok(path)
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

// ---------------------------------------------------------------------------
// Working copy
// ---------------------------------------------------------------------------

/// Load the working copy kept under `.assess/` into a fresh store.
pub fn load_working(root: &Path) -> Result<ProfileStore> {
    let path = paths::working_profile_path(root);
    if !path.exists() {
        return Err(AssessError::NotInitialized);
    }
    let mut store = ProfileStore::new();
    store.replace(import_profile(&read_file(&path)?)?)?;
    Ok(store)
}

pub fn save_working(root: &Path, profile: &Profile) -> Result<()> {
    let path = paths::working_profile_path(root);
    atomic_write(&path, &export_profile(profile)?)
}
